/// Ranking cost of one translation. Independent of the robot's real prices.
pub const TRANSLATE_COST: u64 = 5;

/// Ranking cost per cumulative turn on the path so far.
pub const TURN_PUNISH: u64 = 1;

/// Heuristic multiplier. Zero, so the search is uniform-cost.
pub const H_ESTIMATE: u64 = 0;

/// Default pops allowed per unit of Manhattan distance to the destination.
pub const DEFAULT_BUDGET_FACTOR: u64 = 200;

/// Tunables for a [`Planner`](crate::Planner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Destination searches give up after `budget_factor × distance` pops.
    pub budget_factor: u64,
    /// Hard cap on expanded tiles in either mode. `None` means no cap.
    pub max_expansions: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget_factor: DEFAULT_BUDGET_FACTOR,
            max_expansions: None,
        }
    }
}
