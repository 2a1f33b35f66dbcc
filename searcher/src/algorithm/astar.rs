//! A* Search

use super::{Found, SearchAlgorithm};
use crate::errors::Result;
use crate::traits::{Heuristic, SearchProblem};

pub type AStarSearcher<'p, P, H> = SearchAlgorithm<'p, P, H>;

pub fn build<P, H>(problem: &P, origin: P::State, heuristic: H) -> AStarSearcher<'_, P, H>
where
    P: SearchProblem,
    H: Heuristic<P::State, P::Cost>,
{
    SearchAlgorithm::new(problem, origin, heuristic)
}

/// Perform a search using A*.
///
/// The frontier is ordered by the path cost so far plus the heuristic
/// estimate of the cost remaining. When the heuristic never overestimates,
/// the returned cost is minimal.
pub fn run<P, H>(problem: &P, origin: P::State, heuristic: H) -> Result<Option<Found<P>>>
where
    P: SearchProblem,
    H: Heuristic<P::State, P::Cost>,
{
    build(problem, origin, heuristic).run()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::test::Table;
    use crate::NoHeuristic;

    #[test]
    fn reference_graph() {
        let found = run(&Table::reference(), "S", Table::reference_heuristic).unwrap();
        assert_eq!(found, Some((6, "Z")));
    }

    #[test]
    fn no_heuristic_is_ucs() {
        let table = Table::reference();
        assert_eq!(
            run(&table, "S", NoHeuristic).unwrap(),
            crate::ucs::run(&table, "S").unwrap()
        );
    }

    #[test]
    fn overestimate_is_not_an_error() {
        // Pushing D far down the frontier hides the cheaper route through it.
        let table = Table::new(&["Z"])
            .edge("S", "d", "D", 1)
            .edge("S", "z", "Z", 5)
            .edge("D", "z", "Z", 1);
        let heuristic = |s: &&'static str| -> i64 {
            if *s == "D" {
                100
            } else {
                0
            }
        };
        let found = run(&table, "S", heuristic).unwrap();
        assert_eq!(found, Some((5, "Z")));
    }

    #[test]
    fn heuristic_skips_expensive_branch() {
        let table = Table::new(&["Z"])
            .edge("S", "a", "A", 1)
            .edge("S", "b", "B", 1)
            .edge("A", "z", "Z", 1)
            .edge("B", "c", "C", 1)
            .edge("C", "z", "Z", 1);
        let heuristic = |s: &&'static str| -> i64 {
            match *s {
                "S" => 2,
                "A" => 1,
                "B" => 2,
                "C" => 1,
                _ => 0,
            }
        };
        let (found, stats) = build(&table, "S", heuristic).run_with_stats().unwrap();
        assert_eq!(found, Some((2, "Z")));
        assert_eq!(stats.expanded, 2);
        assert!(!table.expansions.borrow().contains_key("B"));
    }
}
