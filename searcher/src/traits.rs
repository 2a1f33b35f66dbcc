use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use num::{CheckedAdd, Zero};

/// Numeric type used for edge costs and frontier priorities.
///
/// Implemented for the primitive integer and floating point types.
/// Values which do not compare with themselves (NaN) are rejected by
/// the search engine before they reach the frontier.
pub trait SearchCost: Copy + Debug + PartialOrd + Add<Output = Self> + Zero {
    /// Sum of two costs, or `None` if the sum cannot be represented.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_cost {
    ($($t:ty),*) => {
        $(
            impl SearchCost for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

macro_rules! float_cost {
    ($($t:ty),*) => {
        $(
            impl SearchCost for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

integer_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_cost!(f32, f64);

/// Provides an interface for conducting searches.
///
/// The search engine never inspects states beyond hashing and
/// comparing them, and only ever hands actions back to [SearchProblem::cost].
pub trait SearchProblem {
    type State: Debug + Clone + Eq + Hash;
    type Action;
    type Cost: SearchCost;

    /// Indicates that this state satisfies the search, and causes
    /// the search algorithm to stop.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Produces the states reachable in one step from this state,
    /// along with the action which leads to each one. Terminal
    /// states return an empty list.
    fn successors(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    /// Cost of taking `action` from `state` to arrive at `next`.
    ///
    /// Returning `None` for a step produced by [SearchProblem::successors]
    /// is a contract violation and aborts the search.
    fn cost(&self, state: &Self::State, action: &Self::Action, next: &Self::State)
        -> Option<Self::Cost>;
}

/// An estimate of the remaining cost from a state to the nearest goal.
///
/// The estimate should never exceed the true remaining cost, otherwise
/// the cost reported by A* may not be minimal. This is not checked.
/// An estimate which does not compare with itself (NaN) aborts the search.
pub trait Heuristic<S, C> {
    fn estimate(&self, state: &S) -> C;
}

impl<S, C, F> Heuristic<S, C> for F
where
    F: Fn(&S) -> C,
{
    fn estimate(&self, state: &S) -> C {
        self(state)
    }
}

/// The constant zero heuristic, which turns A* into uniform cost search.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHeuristic;

impl<S, C> Heuristic<S, C> for NoHeuristic
where
    C: Zero,
{
    fn estimate(&self, _state: &S) -> C {
        C::zero()
    }
}
