//! Compass directions and the turn arithmetic between them.

use std::fmt;

/// One of the four cardinal facings.
///
/// The discriminants follow clockwise order starting at `Up`, which is also
/// the neighbor expansion order used by the planner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

/// Unit step per direction, indexed by discriminant. Y grows down.
const DELTAS: [(i64, i64); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

impl Direction {
    /// All directions in clockwise expansion order: up, right, down, left.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Signed per-axis unit step `(dx, dy)`.
    #[inline]
    pub const fn delta(self) -> (i64, i64) {
        DELTAS[self as usize]
    }

    /// Minimal number of quarter turns to face `other`: 0, 1 or 2.
    #[inline]
    pub const fn turns_to(self, other: Direction) -> u32 {
        let d = (self as u32).abs_diff(other as u32);
        if d == 3 { 1 } else { d }
    }

    /// The direction facing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::ALL[(self as usize + 2) % 4]
    }

    /// A quarter turn clockwise.
    #[inline]
    pub const fn rotate_right(self) -> Self {
        Self::ALL[(self as usize + 1) % 4]
    }

    /// A quarter turn counter-clockwise.
    #[inline]
    pub const fn rotate_left(self) -> Self {
        Self::ALL[(self as usize + 3) % 4]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_between_directions() {
        for d in Direction::ALL {
            assert_eq!(d.turns_to(d), 0);
            assert_eq!(d.turns_to(d.rotate_left()), 1);
            assert_eq!(d.turns_to(d.rotate_right()), 1);
            assert_eq!(d.turns_to(d.opposite()), 2);
        }
        assert_eq!(Direction::Up.turns_to(Direction::Left), 1);
        assert_eq!(Direction::Left.turns_to(Direction::Up), 1);
    }

    #[test]
    fn turns_are_symmetric() {
        for a in Direction::ALL {
            for b in Direction::ALL {
                assert_eq!(a.turns_to(b), b.turns_to(a));
            }
        }
    }

    #[test]
    fn opposite_deltas_cancel() {
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            let (ox, oy) = d.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn rotations_compose() {
        for d in Direction::ALL {
            assert_eq!(d.rotate_right().rotate_left(), d);
            assert_eq!(d.rotate_right().rotate_right(), d.opposite());
        }
    }
}
