//! **gridwalk-core**: value types shared by the gridwalk planning crates.
//!
//! This crate provides the geometry ([`Point`], [`Bounds`]), facing
//! ([`Direction`]) and [`Energy`] types, plus the [`Agent`] and [`Board`]
//! traits through which the planner reads robots and boards without owning
//! them.

pub mod direction;
pub mod energy;
pub mod geom;
pub mod traits;

pub use direction::Direction;
pub use energy::Energy;
pub use geom::{Bounds, Point};
pub use traits::{Action, Agent, Board};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(-4, i64::MAX);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn energy_is_transparent() {
        let json = serde_json::to_string(&Energy::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: Energy = serde_json::from_str("42").unwrap();
        assert_eq!(back, Energy::new(42));
    }

    #[test]
    fn direction_round_trip() {
        for d in Direction::ALL {
            let json = serde_json::to_string(&d).unwrap();
            let back: Direction = serde_json::from_str(&json).unwrap();
            assert_eq!(d, back);
        }
    }
}
