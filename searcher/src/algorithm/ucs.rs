//! Uniform Cost Search

use super::{Found, SearchAlgorithm};
use crate::errors::Result;
use crate::traits::{NoHeuristic, SearchProblem};

/// Search algorithm which always expands the cheapest known path first.
pub type UniformCostSearch<'p, P> = SearchAlgorithm<'p, P, NoHeuristic>;

/// Build a Uniform Cost Searcher
pub fn build<P>(problem: &P, origin: P::State) -> UniformCostSearch<'_, P>
where
    P: SearchProblem,
{
    SearchAlgorithm::new(problem, origin, NoHeuristic)
}

/// Perform a search using uniform cost search.
///
/// Uniform cost search is Dijkstra's algorithm stopped at the first goal.
/// To be optimal, every step cost must be non-negative.
pub fn run<P>(problem: &P, origin: P::State) -> Result<Option<Found<P>>>
where
    P: SearchProblem,
{
    build(problem, origin).run()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::test::Table;

    #[test]
    fn reference_graph() {
        assert_eq!(run(&Table::reference(), "S").unwrap(), Some((6, "Z")));
    }

    #[test]
    fn nearest_of_several_goals() {
        let table = Table::new(&["X", "Y"])
            .edge("S", "x", "X", 4)
            .edge("S", "a", "A", 1)
            .edge("A", "y", "Y", 2)
            .edge("Y", "x", "X", 0);
        assert_eq!(run(&table, "S").unwrap(), Some((3, "Y")));
    }

    #[test]
    fn zero_cost_edges() {
        let table = Table::new(&["Z"])
            .edge("S", "a", "A", 0)
            .edge("A", "b", "B", 0)
            .edge("B", "z", "Z", 0)
            .edge("S", "z", "Z", 1);
        assert_eq!(run(&table, "S").unwrap(), Some((0, "Z")));
    }

    #[test]
    fn cycle_without_goal() {
        let table = Table::new(&["Z"])
            .edge("S", "a", "A", 1)
            .edge("A", "b", "B", 1)
            .edge("B", "s", "S", 1);
        assert_eq!(run(&table, "S").unwrap(), None);
        assert!(table.expansions.borrow().values().all(|n| *n == 1));
    }
}
