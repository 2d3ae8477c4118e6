use gridwalk_core::Point;
use thiserror::Error;

/// Failures of the planner and the route helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The destination search popped more tiles than its budget allows.
    #[error("search too complex: {destination} not reached within {budget} pops")]
    BudgetExceeded { budget: u64, destination: Point },

    /// The frontier ran dry before the destination was reached.
    #[error("destination {destination} unreachable due to obstacles")]
    Unreachable { destination: Point },

    /// The configured expansion cap was hit.
    #[error("search stopped after {limit} expansions")]
    StepLimit { limit: u64 },

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// Every cross pair of tiles shares the same cell.
    #[error("no rendezvous pair on distinct cells")]
    NoRendezvous,

    /// A parent link points at a cell absent from the tile set.
    #[error("parent chain broken at {at}")]
    BrokenChain { at: Point },
}

pub type Result<T> = std::result::Result<T, SearchError>;
