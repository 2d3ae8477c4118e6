//! In-memory board and robot types for gridwalk.
//!
//! [`World`] implements [`Board`](gridwalk_core::Board) and [`Robot`]
//! implements [`Agent`](gridwalk_core::Agent), so both can be handed
//! straight to the planner in `gridwalk-paths`.

pub mod error;
pub mod robot;
pub mod world;

pub use error::WorldError;
pub use robot::{DEFAULT_ENERGY, Robot};
pub use world::World;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use gridwalk_core::{Direction, Point};

    #[test]
    fn robot_round_trip() {
        let r = Robot::new('C', Point::new(3, 9))
            .with_direction(Direction::Left)
            .with_energy(77)
            .with_costs(4, 2);
        let json = serde_json::to_string(&r).unwrap();
        let back: Robot = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
