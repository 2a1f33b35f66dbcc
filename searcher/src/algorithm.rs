//! Provides the building blocks for search algorithms

use num::Zero;
use tracing::{debug, trace};

use self::cache::CostCache;
use self::frontier::Frontier;
use crate::errors::{Result, SearchError};
use crate::traits::{Heuristic, SearchCost, SearchProblem};

pub mod astar;
pub(crate) mod cache;
pub mod frontier;
pub mod ucs;

/// Number of frontier pops between progress messages.
const PROGRESS_INTERVAL: usize = 10_000;

/// Tuning knobs shared by every search algorithm.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of frontier pops before the search gives up.
    pub limit: Option<usize>,
}

/// Counters describing the work done by one search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries removed from the frontier.
    pub popped: usize,
    /// States whose successors were generated.
    pub expanded: usize,
    /// Popped entries discarded because their state was already expanded.
    pub stale: usize,
    /// Entries added to the frontier, including the origin.
    pub pushed: usize,
    /// Successors discarded because an equal or cheaper path was known.
    pub discarded: usize,
    /// Largest size reached by the frontier.
    pub high_water: usize,
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(SearchError::StepLimitExhausted(self.maximum))
        } else {
            Ok(())
        }
    }
}

/// A goal state along with the cost of the cheapest path to it.
pub type Found<P> = (<P as SearchProblem>::Cost, <P as SearchProblem>::State);

/// Best-first search, shared by uniform cost search and A*.
///
/// The priority of each frontier entry is the cost of the path to it
/// plus the heuristic estimate. With [crate::NoHeuristic] this is uniform
/// cost search.
#[derive(Debug)]
pub struct SearchAlgorithm<'p, P, H>
where
    P: SearchProblem,
    H: Heuristic<P::State, P::Cost>,
{
    problem: &'p P,
    heuristic: H,
    origin: P::State,
    options: SearchOptions,
}

impl<'p, P, H> SearchAlgorithm<'p, P, H>
where
    P: SearchProblem,
    H: Heuristic<P::State, P::Cost>,
{
    pub fn new(problem: &'p P, origin: P::State, heuristic: H) -> Self {
        SearchAlgorithm {
            problem,
            heuristic,
            origin,
            options: SearchOptions::default(),
        }
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When this many candidates have been popped from the frontier,
    /// the search algorithm will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.options.limit = Some(limit)
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the search to completion.
    ///
    /// Returns `Ok(None)` when the frontier runs dry without reaching a goal.
    pub fn run(self) -> Result<Option<Found<P>>> {
        self.run_with_stats().map(|(found, _)| found)
    }

    /// Run the search to completion, also reporting how much work it took.
    pub fn run_with_stats(self) -> Result<(Option<Found<P>>, SearchStats)> {
        let mut search = Search {
            problem: self.problem,
            heuristic: &self.heuristic,
            frontier: Frontier::new(),
            cache: CostCache::origin(self.origin.clone(), P::Cost::zero()),
            counter: self.options.limit.map(StepLimit::new),
            stats: SearchStats::default(),
        };

        debug!(origin = ?self.origin, limit = ?self.options.limit, "starting search");
        let priority = self.heuristic.estimate(&self.origin);
        search.push(priority, self.origin)?;

        let found = search.run()?;
        match &found {
            Some((cost, state)) => {
                debug!(?cost, ?state, stats = ?search.stats, "search found goal")
            }
            None => debug!(stats = ?search.stats, "search exhausted without a goal"),
        }
        Ok((found, search.stats))
    }
}

/// State which lives for the duration of one search call.
struct Search<'a, P, H>
where
    P: SearchProblem,
{
    problem: &'a P,
    heuristic: &'a H,
    frontier: Frontier<P::Cost, P::State>,
    cache: CostCache<P::State, P::Cost>,
    counter: Option<StepLimit>,
    stats: SearchStats,
}

impl<'a, P, H> Search<'a, P, H>
where
    P: SearchProblem,
    H: Heuristic<P::State, P::Cost>,
{
    fn push(&mut self, priority: P::Cost, state: P::State) -> Result<()> {
        // NaN would break the total order of the frontier.
        if priority.partial_cmp(&priority).is_none() {
            return Err(SearchError::InvalidHeuristic {
                state: format!("{:?}", state),
                estimate: format!("{:?}", priority),
            });
        }
        self.frontier.push(priority, state);
        self.stats.pushed += 1;
        self.stats.high_water = self.stats.high_water.max(self.frontier.len());
        Ok(())
    }

    fn run(&mut self) -> Result<Option<Found<P>>> {
        while !self.frontier.is_empty() {
            if let Some(counter) = self.counter.as_mut() {
                counter.increment()?;
            }

            let (priority, state) = self.frontier.pop()?;
            self.stats.popped += 1;
            trace!(?priority, ?state, "popped");

            if self.stats.popped % PROGRESS_INTERVAL == 0 {
                debug!(
                    popped = self.stats.popped,
                    frontier = self.frontier.len(),
                    ?priority,
                    next = ?self.frontier.peek_priority(),
                    "search progress"
                );
            }

            // Every state is given a cost before it is pushed.
            let cost = self
                .cache
                .cost(&state)
                .ok_or_else(|| SearchError::UnrecordedState(format!("{:?}", state)))?;

            if self.problem.is_goal(&state) {
                return Ok(Some((cost, state)));
            }

            if !self.cache.visit(&state) {
                trace!(?state, "discarding stale entry");
                self.stats.stale += 1;
                continue;
            }

            self.expand(&state, cost)?;
        }
        Ok(None)
    }

    fn expand(&mut self, state: &P::State, cost: P::Cost) -> Result<()> {
        self.stats.expanded += 1;

        for (action, next) in self.problem.successors(state) {
            let step = self
                .problem
                .cost(state, &action, &next)
                .ok_or_else(|| SearchError::MissingCost {
                    from: format!("{:?}", state),
                    to: format!("{:?}", next),
                })?;
            check_cost(state, &next, step)?;

            let overflow = || SearchError::CostOverflow {
                from: format!("{:?}", state),
                to: format!("{:?}", next),
            };
            let new_cost = cost.checked_sum(step).ok_or_else(overflow)?;
            if self.cache.relax(&next, new_cost) {
                trace!(?next, ?new_cost, "relaxed");
                let priority = new_cost
                    .checked_sum(self.heuristic.estimate(&next))
                    .ok_or_else(overflow)?;
                self.push(priority, next)?;
            } else {
                self.stats.discarded += 1;
            }
        }
        Ok(())
    }
}

/// Edge costs must be non-negative for the first goal popped to be optimal.
fn check_cost<S, C>(from: &S, to: &S, cost: C) -> Result<()>
where
    S: std::fmt::Debug,
    C: SearchCost,
{
    if cost >= C::zero() {
        Ok(())
    } else {
        Err(SearchError::InvalidCost {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            cost: format!("{:?}", cost),
        })
    }
}
