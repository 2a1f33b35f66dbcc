//! Generalized best-first search, for finding the cheapest path to a goal.
//!
//! To use these search algorithms, implement the trait [SearchProblem]
//! (or pass closures to [uniform_cost_search] and [a_star_search]). Both
//! algorithms share one engine, [SearchAlgorithm], and differ only in the
//! [Heuristic] added to each frontier priority.

pub mod algorithm;
mod callbacks;
mod errors;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::Heuristic;
pub use traits::NoHeuristic;
pub use traits::SearchCost;
pub use traits::SearchProblem;

pub use algorithm::astar;
pub use algorithm::frontier::Frontier;
pub use algorithm::ucs;
pub use algorithm::Found;
pub use algorithm::SearchAlgorithm;
pub use algorithm::SearchOptions;
pub use algorithm::SearchStats;

pub use callbacks::a_star_search;
pub use callbacks::uniform_cost_search;
pub use callbacks::FnProblem;
