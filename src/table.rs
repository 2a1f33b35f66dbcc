//! Weighted graphs described by a small text table.
//!
//! Each line of the table is one directive:
//!
//! ```text
//! start S
//! goal Z
//! edge S toA A 1
//! heuristic S 5
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::num::ParseFloatError;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use searcher::{FnProblem, SearchOptions, SearchResult, SearchStats};

#[derive(Debug, Error)]
pub enum ParseGraphError {
    #[error("Unrecognized line: {0}")]
    InvalidLine(String),

    #[error("Invalid number {0:?}")]
    InvalidNumber(String, #[source] ParseFloatError),

    #[error("Start state given twice: {0} and {1}")]
    DuplicateStart(String, String),

    #[error("No start state given")]
    MissingStart,

    #[error("No goal state given")]
    MissingGoal,

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unable to read graph")]
    Io(#[from] std::io::Error),
}

/// Which search algorithm to run over a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    UniformCost,
    AStar,
}

impl FromStr for Algorithm {
    type Err = ParseGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ucs" => Ok(Algorithm::UniformCost),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(ParseGraphError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::UniformCost => write!(f, "UCS"),
            Algorithm::AStar => write!(f, "A*"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Directive {
    Start(String),
    Goal(String),
    Edge {
        from: String,
        action: String,
        to: String,
        cost: f64,
    },
    Heuristic(String, f64),
}

fn parse_number(s: &str) -> Result<f64, ParseGraphError> {
    s.parse()
        .map_err(|e| ParseGraphError::InvalidNumber(s.to_string(), e))
}

impl FromStr for Directive {
    type Err = ParseGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref START: Regex = Regex::new(r"^start\s+(?P<state>\S+)$").unwrap();
            static ref GOAL: Regex = Regex::new(r"^goal\s+(?P<state>\S+)$").unwrap();
            static ref EDGE: Regex = Regex::new(
                r"^edge\s+(?P<from>\S+)\s+(?P<action>\S+)\s+(?P<to>\S+)\s+(?P<cost>\S+)$"
            )
            .unwrap();
            static ref HEURISTIC: Regex =
                Regex::new(r"^heuristic\s+(?P<state>\S+)\s+(?P<estimate>\S+)$").unwrap();
        };

        let s = s.trim();
        if let Some(cap) = START.captures(s) {
            return Ok(Directive::Start(cap["state"].to_string()));
        }
        if let Some(cap) = GOAL.captures(s) {
            return Ok(Directive::Goal(cap["state"].to_string()));
        }
        if let Some(cap) = EDGE.captures(s) {
            return Ok(Directive::Edge {
                from: cap["from"].to_string(),
                action: cap["action"].to_string(),
                to: cap["to"].to_string(),
                cost: parse_number(&cap["cost"])?,
            });
        }
        if let Some(cap) = HEURISTIC.captures(s) {
            return Ok(Directive::Heuristic(
                cap["state"].to_string(),
                parse_number(&cap["estimate"])?,
            ));
        }
        Err(ParseGraphError::InvalidLine(s.to_string()))
    }
}

type Step = (String, String, String);

/// Fixed successor, cost and heuristic tables for a weighted graph.
#[derive(Debug, Clone, Default)]
pub struct GraphTable {
    start: String,
    goals: HashSet<String>,
    successors: HashMap<String, Vec<(String, String)>>,
    costs: HashMap<Step, f64>,
    estimates: HashMap<String, f64>,
}

impl GraphTable {
    pub fn read<R: Read>(input: R) -> Result<Self, ParseGraphError> {
        let reader = BufReader::new(input);

        let mut start: Option<String> = None;
        let mut table = GraphTable::default();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.parse::<Directive>()? {
                Directive::Start(state) => {
                    if let Some(previous) = start.replace(state.clone()) {
                        return Err(ParseGraphError::DuplicateStart(previous, state));
                    }
                }
                Directive::Goal(state) => {
                    table.goals.insert(state);
                }
                Directive::Edge {
                    from,
                    action,
                    to,
                    cost,
                } => {
                    table
                        .successors
                        .entry(from.clone())
                        .or_default()
                        .push((action.clone(), to.clone()));
                    table.costs.insert((from, action, to), cost);
                }
                Directive::Heuristic(state, estimate) => {
                    table.estimates.insert(state, estimate);
                }
            }
        }

        table.start = start.ok_or(ParseGraphError::MissingStart)?;
        if table.goals.is_empty() {
            return Err(ParseGraphError::MissingGoal);
        }

        debug!(
            start = %table.start,
            goals = table.goals.len(),
            edges = table.costs.len(),
            "read graph table"
        );
        Ok(table)
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    /// Estimated remaining cost from a state. States without an entry
    /// are estimated at zero.
    pub fn estimate(&self, state: &str) -> f64 {
        self.estimates.get(state).copied().unwrap_or(0.0)
    }

    /// Search the table, returning the cost and goal reached if any.
    pub fn solve(
        &self,
        algorithm: Algorithm,
        options: SearchOptions,
    ) -> SearchResult<(Option<(f64, String)>, SearchStats)> {
        let problem = FnProblem::new(
            |state: &String| self.goals.contains(state),
            |state: &String| self.successors.get(state).cloned().unwrap_or_default(),
            |state: &String, action: &String, next: &String| {
                self.costs
                    .get(&(state.clone(), action.clone(), next.clone()))
                    .copied()
            },
        );

        let origin = self.start.clone();
        match algorithm {
            Algorithm::UniformCost => searcher::ucs::build(&problem, origin)
                .with_options(options)
                .run_with_stats(),
            Algorithm::AStar => {
                searcher::astar::build(&problem, origin, |state: &String| self.estimate(state))
                    .with_options(options)
                    .run_with_stats()
            }
        }
    }
}

impl FromStr for GraphTable {
    type Err = ParseGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GraphTable::read(s.as_bytes())
    }
}
