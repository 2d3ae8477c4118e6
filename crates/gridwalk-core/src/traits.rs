use crate::{Bounds, Direction, Energy, Point};

/// A primitive robot action with a real energy price.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Move one cell in the facing direction.
    Translate,
    /// Turn a quarter turn.
    Rotate,
}

/// Read-only view of a mobile robot, as seen by the planner.
pub trait Agent {
    /// Current cell.
    fn position(&self) -> Point;

    /// Current facing.
    fn direction(&self) -> Direction;

    /// Energy currently held.
    fn energy(&self) -> Energy;

    /// Real energy price of performing `action` once.
    fn cost(&self, action: Action) -> Energy;
}

/// Board occupancy, as seen by the planner.
///
/// Implementations must not change while a search borrows them.
pub trait Board {
    /// The kind of robot this board hosts.
    type Agent: Agent;

    /// Inclusive extents of the board.
    fn bounds(&self) -> Bounds;

    /// Whether `agent` could stand at `p`. Called only for in-bounds points.
    fn can_host(&self, p: Point, agent: &Self::Agent) -> bool;
}
