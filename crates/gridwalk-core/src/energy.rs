//! Robot energy as an ordered quantity.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// An amount of energy in the robot's own units.
///
/// Arithmetic saturates at the `i64` limits instead of wrapping. Values may
/// be negative: a hypothetical path can cost more than the robot holds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Energy(pub i64);

impl Energy {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    #[inline]
    pub const fn units(self) -> i64 {
        self.0
    }

    /// Whether any energy is left.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl Add for Energy {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Energy {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Mul<i64> for Energy {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i64) -> Self {
        Self(self.0.saturating_mul(rhs))
    }
}

impl AddAssign for Energy {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Energy {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl From<i64> for Energy {
    fn from(units: i64) -> Self {
        Self(units)
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}E", self.0)
    }
}
