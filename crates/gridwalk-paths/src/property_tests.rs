//! Invariants checked over seeded random boards.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use gridwalk_core::{Agent, Board, Direction, Point};
use gridwalk_world::{Robot, World};

use crate::{Mode, Planner, SearchError, Tile, pick_rendezvous, reconstruct_path};

const W: i64 = 14;
const H: i64 = 11;
const SEEDS: u64 = 24;

/// A random board with about one wall in five cells and robots A and B.
fn random_world(seed: u64) -> World {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = World::with_size(W, H).unwrap();
    for y in 0..H {
        for x in 0..W {
            if rng.random_range(0..5) == 0 {
                world.add_wall(Point::new(x, y)).unwrap();
            }
        }
    }
    for (name, energy) in [('A', 40), ('B', 60)] {
        loop {
            let p = Point::new(rng.random_range(0..W), rng.random_range(0..H));
            if world.is_wall(p) || world.robot_at(p).is_some() {
                continue;
            }
            let dir = Direction::ALL[rng.random_range(0..4_usize)];
            let robot = Robot::new(name, p)
                .with_direction(dir)
                .with_energy(energy)
                .with_costs(rng.random_range(1..4), rng.random_range(0..3));
            world.place_robot(robot).unwrap();
            break;
        }
    }
    world
}

fn assert_linked(closed: &[Tile]) {
    for t in closed {
        if let Some(parent) = t.parent() {
            assert_eq!(t.pos().manhattan(parent), 1, "{t:?}");
        }
    }
}

#[test]
fn destination_results_are_linked_and_end_at_goal() {
    for seed in 0..SEEDS {
        let world = random_world(seed);
        let planner = Planner::new(&world);
        let a = world.robot('A').unwrap();
        for goal in [Point::new(0, 0), Point::new(W - 1, H - 1), Point::new(W / 2, 0)] {
            match planner.search(a, goal, Mode::Destination) {
                Ok(closed) => {
                    assert_eq!(closed.last().unwrap().pos(), goal);
                    assert_linked(&closed);
                    for t in &closed {
                        assert!(world.can_host(t.pos(), a));
                        assert_eq!(t.f(), t.g() + t.h());
                        assert_eq!(t.h(), 0);
                    }
                    let path = reconstruct_path(&closed, closed.last().unwrap()).unwrap();
                    assert_eq!(path[0], a.position());
                    assert_eq!(*path.last().unwrap(), goal);
                    assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
                }
                Err(SearchError::Unreachable { .. } | SearchError::BudgetExceeded { .. }) => {}
                Err(e) => panic!("seed {seed}: unexpected {e}"),
            }
        }
    }
}

#[test]
fn energy_bounded_results_stay_affordable() {
    for seed in 0..SEEDS {
        let world = random_world(seed);
        let planner = Planner::new(&world);
        let b = world.robot('B').unwrap();
        let closed = planner.reachable(b).unwrap();
        assert_eq!(closed[0].pos(), b.position());
        assert_linked(&closed);
        for t in &closed {
            // The start tile is kept whatever the robot holds.
            if t.parent().is_some() {
                assert!(t.energy().is_positive(), "seed {seed}: {t:?}");
            }
            assert!(t.energy() <= b.energy());
            assert!(world.can_host(t.pos(), b));
        }
        // Closed cells are unique and popped in non-decreasing cost order.
        let mut seen = std::collections::HashSet::new();
        assert!(closed.iter().all(|t| seen.insert(t.pos())));
        assert!(closed.windows(2).all(|w| w[0].f() <= w[1].f()));
    }
}

#[test]
fn rendezvous_is_optimal_over_all_pairs() {
    for seed in 0..SEEDS {
        let world = random_world(seed);
        let planner = Planner::new(&world);
        let a = world.robot('A').unwrap();
        let b = world.robot('B').unwrap();
        let ra = planner.search(a, b.position(), Mode::EnergyBounded).unwrap();
        let rb = planner.search(b, a.position(), Mode::EnergyBounded).unwrap();
        let Ok((ta, tb)) = pick_rendezvous(&ra, &rb) else {
            continue;
        };
        let best = ta.pos().manhattan(tb.pos());
        let best_energy = ta.energy() + tb.energy();
        assert_ne!(ta.pos(), tb.pos());
        for x in &ra {
            for y in &rb {
                if x.pos() == y.pos() {
                    continue;
                }
                let d = x.pos().manhattan(y.pos());
                assert!(d >= best, "seed {seed}");
                if d == best {
                    assert!(x.energy() + y.energy() <= best_energy, "seed {seed}");
                }
            }
        }

        if let Ok((pa, pb)) = planner.best_joint_routes(a, b) {
            assert_eq!(pa[0], a.position());
            assert_eq!(pb[0], b.position());
            assert_eq!(*pa.last().unwrap(), ta.pos());
            assert_eq!(*pb.last().unwrap(), tb.pos());
        }
    }
}

#[test]
fn searches_are_repeatable() {
    for seed in 0..SEEDS {
        let world = random_world(seed);
        let planner = Planner::new(&world);
        let a = world.robot('A').unwrap();
        let goal = Point::new(W - 1, 0);
        assert_eq!(
            planner.search(a, goal, Mode::Destination),
            planner.search(a, goal, Mode::Destination)
        );
        assert_eq!(planner.reachable(a), planner.reachable(a));
    }
}
