use gridwalk_core::Point;
use thiserror::Error;

/// Errors raised while building or editing a [`World`](crate::World).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("layout is empty")]
    EmptyLayout,

    #[error("layout line {line} has width {found}, expected {expected}")]
    InconsistentWidth { line: i64, expected: i64, found: i64 },

    #[error("layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },

    #[error("robot {0} is already on the board")]
    DuplicateRobot(char),

    #[error("no robot named {0}")]
    UnknownRobot(char),

    #[error("{0} is outside the board")]
    OutOfBounds(Point),

    #[error("{0} is already occupied")]
    Occupied(Point),
}
