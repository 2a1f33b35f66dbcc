//! Searches driven by plain closures rather than a [SearchProblem] impl.

use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::algorithm::{astar, ucs};
use crate::errors::Result;
use crate::traits::{Heuristic, SearchCost, SearchProblem};

/// Adapts a goal test, a successor function and a cost function
/// into a [SearchProblem].
pub struct FnProblem<S, A, C, G, N, K> {
    goal_test: G,
    get_successors: N,
    get_cost: K,
    marker: PhantomData<fn() -> (S, A, C)>,
}

impl<S, A, C, G, N, K> FnProblem<S, A, C, G, N, K>
where
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Vec<(A, S)>,
    K: Fn(&S, &A, &S) -> Option<C>,
{
    pub fn new(goal_test: G, get_successors: N, get_cost: K) -> Self {
        FnProblem {
            goal_test,
            get_successors,
            get_cost,
            marker: PhantomData,
        }
    }
}

impl<S, A, C, G, N, K> Debug for FnProblem<S, A, C, G, N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProblem").finish()
    }
}

impl<S, A, C, G, N, K> SearchProblem for FnProblem<S, A, C, G, N, K>
where
    S: Debug + Clone + Eq + Hash,
    C: SearchCost,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Vec<(A, S)>,
    K: Fn(&S, &A, &S) -> Option<C>,
{
    type State = S;
    type Action = A;
    type Cost = C;

    fn is_goal(&self, state: &S) -> bool {
        (self.goal_test)(state)
    }

    fn successors(&self, state: &S) -> Vec<(A, S)> {
        (self.get_successors)(state)
    }

    fn cost(&self, state: &S, action: &A, next: &S) -> Option<C> {
        (self.get_cost)(state, action, next)
    }
}

/// Uniform cost search over closures.
///
/// Returns the cost of the cheapest path to a goal and the goal reached,
/// or `None` when no goal is reachable from `start`.
pub fn uniform_cost_search<S, A, C, G, N, K>(
    start: S,
    goal_test: G,
    get_successors: N,
    get_cost: K,
) -> Result<Option<(C, S)>>
where
    S: Debug + Clone + Eq + Hash,
    C: SearchCost,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Vec<(A, S)>,
    K: Fn(&S, &A, &S) -> Option<C>,
{
    let problem = FnProblem::new(goal_test, get_successors, get_cost);
    ucs::run(&problem, start)
}

/// A* search over closures.
///
/// Identical to [uniform_cost_search], except that `heuristic` is added to
/// the cost of each path when ordering the frontier.
pub fn a_star_search<S, A, C, G, N, K, H>(
    start: S,
    goal_test: G,
    get_successors: N,
    get_cost: K,
    heuristic: H,
) -> Result<Option<(C, S)>>
where
    S: Debug + Clone + Eq + Hash,
    C: SearchCost,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Vec<(A, S)>,
    K: Fn(&S, &A, &S) -> Option<C>,
    H: Heuristic<S, C>,
{
    let problem = FnProblem::new(goal_test, get_successors, get_cost);
    astar::run(&problem, start, heuristic)
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;
    use crate::SearchError;

    type Successors = HashMap<char, Vec<(&'static str, char)>>;
    type Costs = HashMap<(char, &'static str, char), f64>;

    fn reference() -> (Successors, Costs, HashMap<char, f64>) {
        let edges = [
            ('S', "toA", 'A', 1.0),
            ('S', "toB", 'B', 4.0),
            ('A', "toC", 'C', 3.0),
            ('A', "toD", 'D', 1.0),
            ('B', "toD", 'D', 1.0),
            ('C', "toZ", 'Z', 2.0),
            ('D', "toZ", 'Z', 5.0),
        ];

        let mut successors = Successors::new();
        let mut costs = Costs::new();
        for (from, action, to, cost) in edges.iter() {
            successors.entry(*from).or_default().push((*action, *to));
            costs.insert((*from, *action, *to), *cost);
        }

        let estimates = [
            ('S', 5.0),
            ('A', 4.0),
            ('B', 2.0),
            ('C', 2.0),
            ('D', 1.0),
            ('Z', 0.0),
        ]
        .iter()
        .cloned()
        .collect();

        (successors, costs, estimates)
    }

    #[test]
    fn reference_ucs() {
        let (successors, costs, _) = reference();
        let found = uniform_cost_search(
            'S',
            |s| *s == 'Z',
            |s| successors.get(s).cloned().unwrap_or_default(),
            |s, a, n| costs.get(&(*s, *a, *n)).copied(),
        )
        .unwrap();
        assert_eq!(found, Some((6.0, 'Z')));
    }

    #[test]
    fn reference_astar() {
        let (successors, costs, estimates) = reference();
        let found = a_star_search(
            'S',
            |s| *s == 'Z',
            |s| successors.get(s).cloned().unwrap_or_default(),
            |s, a, n| costs.get(&(*s, *a, *n)).copied(),
            |s: &char| estimates[s],
        )
        .unwrap();
        assert_eq!(found, Some((6.0, 'Z')));
    }

    #[test]
    fn start_is_goal() {
        let found = uniform_cost_search(
            7u32,
            |s| *s == 7,
            |_| -> Vec<((), u32)> { panic!("goal states are never expanded") },
            |_, _, _| Some(1u32),
        )
        .unwrap();
        assert_eq!(found, Some((0, 7)));
    }

    #[test]
    fn unreachable() {
        let (successors, costs, estimates) = reference();
        let found = a_star_search(
            'S',
            |s| *s == 'Q',
            |s| successors.get(s).cloned().unwrap_or_default(),
            |s, a, n| costs.get(&(*s, *a, *n)).copied(),
            |s: &char| estimates[s],
        )
        .unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn missing_cost_aborts() {
        let (successors, mut costs, _) = reference();
        costs.remove(&('C', "toZ", 'Z'));
        let err = uniform_cost_search(
            'S',
            |s| *s == 'Z',
            |s| successors.get(s).cloned().unwrap_or_default(),
            |s, a, n| costs.get(&(*s, *a, *n)).copied(),
        )
        .unwrap_err();
        assert!(matches!(err, SearchError::MissingCost { .. }));
        assert_eq!(err.to_string(), "No cost defined for the step 'C' -> 'Z'");
    }

    #[test]
    fn nan_cost_aborts() {
        let err = uniform_cost_search(
            0u8,
            |s| *s == 2,
            |s| vec![((), s + 1)],
            |_, _, _| Some(f64::NAN),
        )
        .unwrap_err();
        assert!(matches!(err, SearchError::InvalidCost { .. }));
    }
}
