use thiserror::Error;

/// Error produced when a search fails.
///
/// Exhausting the frontier without reaching a goal is not an error,
/// searches report that as `Ok(None)`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Pop called on an empty frontier")]
    EmptyFrontier,

    #[error("No cost defined for the step {from} -> {to}")]
    MissingCost { from: String, to: String },

    #[error("Invalid cost {cost} for the step {from} -> {to}, costs must be non-negative")]
    InvalidCost {
        from: String,
        to: String,
        cost: String,
    },

    #[error("Cost overflow on the step {from} -> {to}")]
    CostOverflow { from: String, to: String },

    #[error("Invalid heuristic estimate {estimate} for {state}")]
    InvalidHeuristic { state: String, estimate: String },

    #[error("Frontier state {0} has no recorded cost")]
    UnrecordedState(String),

    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
