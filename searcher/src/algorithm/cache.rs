//! Best-known costs and finalized states for a single search.

use std::collections::{HashMap, HashSet};
use std::default::Default;
use std::hash::Hash;

/// Records the cheapest cost found to reach each state, and which
/// states have already been expanded.
#[derive(Debug)]
pub(crate) struct CostCache<S, C>
where
    S: Eq + Hash,
{
    cost_so_far: HashMap<S, C>,
    visited: HashSet<S>,
}

impl<S, C> Default for CostCache<S, C>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        CostCache {
            cost_so_far: HashMap::default(),
            visited: HashSet::default(),
        }
    }
}

impl<S, C> CostCache<S, C>
where
    S: Eq + Hash + Clone,
    C: PartialOrd + Copy,
{
    /// Seed the cache with the origin of the search.
    pub(crate) fn origin(state: S, cost: C) -> Self {
        let mut cache = Self::default();
        cache.cost_so_far.insert(state, cost);
        cache
    }

    pub(crate) fn cost(&self, state: &S) -> Option<C> {
        self.cost_so_far.get(state).copied()
    }

    /// Offer a new cost for a state.
    ///
    /// (a) For states which are not in the cache, add them.
    /// (b) If the state is already in the cache with a lower or equal
    ///     cost, ignore this path.
    /// (c) If the state is in the cache with a higher cost, this path
    ///     is the new winner.
    ///
    /// Returns true when the offered cost was recorded.
    pub(crate) fn relax(&mut self, state: &S, cost: C) -> bool {
        match self.cost_so_far.get_mut(state) {
            // (c)
            Some(known) if cost < *known => {
                *known = cost;
                true
            }
            // (b)
            Some(_) => false,
            // (a)
            None => {
                self.cost_so_far.insert(state.clone(), cost);
                true
            }
        }
    }

    /// Mark a state as expanded. Returns false if it already was.
    pub(crate) fn visit(&mut self, state: &S) -> bool {
        if self.visited.contains(state) {
            return false;
        }
        self.visited.insert(state.clone())
    }
}
