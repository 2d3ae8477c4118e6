//! Geometry primitives: [`Point`] and [`Bounds`].
//!
//! Coordinates are `i64` and boards may stretch to the edge of that range,
//! so nothing here wraps silently: stepping off the representable range
//! yields `None` and distances saturate at `u64::MAX`.

use std::fmt;

use crate::direction::Direction;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Return the point shifted by (dx, dy), or `None` on overflow.
    #[inline]
    pub fn checked_shift(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The adjacent point one unit step in `dir`, or `None` on overflow.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.delta();
        self.checked_shift(dx, dy)
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// Each axis difference fits a `u64`; the sum saturates.
    #[inline]
    pub fn manhattan(self, other: Point) -> u64 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }

    /// Whether `other` is one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Board extents: the closed rectangle `[0, max.x] × [0, max.y]`.
///
/// Unlike a half-open range, the maximum is inclusive, so a board can span
/// the whole non-negative `i64` range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub max: Point,
}

impl Bounds {
    /// Bounds with the given inclusive maxima.
    ///
    /// Returns `None` if either maximum is negative.
    #[inline]
    pub const fn new(max_x: i64, max_y: i64) -> Option<Self> {
        if max_x < 0 || max_y < 0 {
            return None;
        }
        Some(Self {
            max: Point { x: max_x, y: max_y },
        })
    }

    /// Bounds of a `width × height` board (cells `0..width`, `0..height`).
    ///
    /// Returns `None` for an empty board.
    #[inline]
    pub fn with_size(width: i64, height: i64) -> Option<Self> {
        if width <= 0 || height <= 0 {
            return None;
        }
        Self::new(width - 1, height - 1)
    }

    /// Whether `p` lies on the board.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x <= self.max.x && p.y <= self.max.y
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", Point::ZERO, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_cell() {
        let p = Point::new(3, 3);
        assert_eq!(p.step(Direction::Up), Some(Point::new(3, 2)));
        assert_eq!(p.step(Direction::Right), Some(Point::new(4, 3)));
        assert_eq!(p.step(Direction::Down), Some(Point::new(3, 4)));
        assert_eq!(p.step(Direction::Left), Some(Point::new(2, 3)));
    }

    #[test]
    fn step_off_the_integer_range_is_none() {
        let p = Point::new(i64::MAX, 0);
        assert_eq!(p.step(Direction::Right), None);
        let q = Point::new(0, i64::MIN);
        assert_eq!(q.step(Direction::Up), None);
    }

    #[test]
    fn manhattan_basic() {
        assert_eq!(Point::new(0, 0).manhattan(Point::new(3, 4)), 7);
        assert_eq!(Point::new(-2, 5).manhattan(Point::new(2, 1)), 8);
        assert!(Point::new(1, 1).is_adjacent(Point::new(1, 2)));
        assert!(!Point::new(1, 1).is_adjacent(Point::new(2, 2)));
    }

    #[test]
    fn manhattan_saturates() {
        let a = Point::new(i64::MIN, i64::MIN);
        let b = Point::new(i64::MAX, i64::MAX);
        assert_eq!(a.manhattan(b), u64::MAX);
        assert_eq!(Point::new(0, 0).manhattan(Point::new(i64::MAX, 0)), i64::MAX as u64);
    }

    #[test]
    fn bounds_are_inclusive() {
        let b = Bounds::new(9, 9).unwrap();
        assert!(b.contains(Point::new(0, 0)));
        assert!(b.contains(Point::new(9, 9)));
        assert!(!b.contains(Point::new(10, 0)));
        assert!(!b.contains(Point::new(0, -1)));
    }

    #[test]
    fn bounds_with_size() {
        assert_eq!(Bounds::with_size(10, 5), Bounds::new(9, 4));
        assert_eq!(Bounds::with_size(1, 1), Bounds::new(0, 0));
        assert_eq!(Bounds::with_size(0, 5), None);
        assert_eq!(Bounds::with_size(5, -2), None);
    }

    #[test]
    fn negative_maxima_are_rejected() {
        assert_eq!(Bounds::new(-1, 4), None);
        assert_eq!(Bounds::new(4, -1), None);
        assert_eq!(Bounds::new(i64::MIN, i64::MIN), None);
        assert_eq!(Bounds::new(0, 0).map(|b| b.max), Some(Point::ZERO));
    }

    #[test]
    fn bounds_at_integer_limit() {
        let b = Bounds::new(i64::MAX, i64::MAX).unwrap();
        assert!(b.contains(Point::new(i64::MAX, i64::MAX)));
        assert!(!b.contains(Point::new(-1, 0)));
    }
}
