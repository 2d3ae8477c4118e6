//! Energy-aware route planning for robots on a bounded grid.
//!
//! The planner runs a uniform-cost search whose ranking cost charges a fixed
//! price per move plus an escalating penalty for every turn taken, while
//! separately tracking the real energy the robot would have left:
//!
//! - **Destination search** ([`Mode::Destination`]) stops at a goal cell and
//!   gives up after a pop budget proportional to the Manhattan distance.
//! - **Reachability search** ([`Mode::EnergyBounded`]) explores every cell
//!   the robot can reach without running dry.
//!
//! On top of that, [`pick_rendezvous`] chooses where two robots should meet
//! and [`reconstruct_path`] turns a search result back into a cell sequence.
//!
//! The board and robots are read through the [`Board`](gridwalk_core::Board)
//! and [`Agent`](gridwalk_core::Agent) traits and must not change while a
//! search is running.
//!
//! ```ignore
//! let planner = Planner::new(&world);
//! let robot = world.robot('A').unwrap();
//! let path = planner.path_to(robot, Point::new(3, 0))?;
//! ```

mod config;
mod error;
mod frontier;
mod route;
mod search;
mod tile;

#[cfg(test)]
mod property_tests;

pub use config::{DEFAULT_BUDGET_FACTOR, H_ESTIMATE, SearchConfig, TRANSLATE_COST, TURN_PUNISH};
pub use error::{Result, SearchError};
pub use frontier::Frontier;
pub use route::{pick_rendezvous, prune_to_chain, reconstruct_path};
pub use search::{Mode, Planner};
pub use tile::Tile;
