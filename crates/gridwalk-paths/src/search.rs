use gridwalk_core::{Action, Agent, Board, Direction, Energy, Point};

use crate::config::{H_ESTIMATE, SearchConfig, TRANSLATE_COST, TURN_PUNISH};
use crate::error::{Result, SearchError};
use crate::frontier::Frontier;
use crate::tile::Tile;

/// Termination policy of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Stop at the destination; fail if it cannot be reached within budget.
    Destination,
    /// Explore every cell the robot can afford; the destination is ignored
    /// apart from the (zero-weighted) heuristic.
    EnergyBounded,
}

/// Energy-aware uniform-cost search over a [`Board`].
///
/// A `Planner` only borrows the board; every call builds its own frontier,
/// so nothing carries over between searches.
pub struct Planner<'a, B: Board> {
    board: &'a B,
    config: SearchConfig,
}

/// Per-call inputs shared by every expansion.
struct Expansion<'s, A> {
    agent: &'s A,
    destination: Point,
    mode: Mode,
    translate: Energy,
    rotate: Energy,
}

impl<'a, B: Board> Planner<'a, B> {
    /// A planner with the default [`SearchConfig`].
    pub fn new(board: &'a B) -> Self {
        Self::with_config(board, SearchConfig::default())
    }

    pub fn with_config(board: &'a B, config: SearchConfig) -> Self {
        Self { board, config }
    }

    /// Run one search from the agent's current cell and facing.
    ///
    /// Returns the closed set in pop order. In [`Mode::Destination`] the last
    /// tile is the destination and a path can be rebuilt from it with
    /// [`reconstruct_path`](crate::reconstruct_path). In
    /// [`Mode::EnergyBounded`] the result is the start tile followed by every
    /// cell reachable with energy to spare. The start tile is always present,
    /// so a robot with no energy reaches only its own cell.
    pub fn search(&self, agent: &B::Agent, destination: Point, mode: Mode) -> Result<Vec<Tile>> {
        let start_pos = agent.position();
        log::debug!("{mode:?} search from {start_pos} towards {destination}");

        let budget = match mode {
            Mode::Destination => Some(
                self.config
                    .budget_factor
                    .saturating_mul(start_pos.manhattan(destination)),
            ),
            Mode::EnergyBounded => None,
        };

        let exp = Expansion {
            agent,
            destination,
            mode,
            translate: agent.cost(Action::Translate),
            rotate: agent.cost(Action::Rotate),
        };

        let mut start = Tile::new(start_pos, agent.direction());
        start.set_energy(agent.energy());
        let mut frontier = Frontier::new(start);

        while let Some(current) = frontier.pop() {
            if mode == Mode::Destination && current.pos() == destination {
                frontier.close(current);
                log::debug!(
                    "reached {destination} after {} pops, g={} turns={}",
                    frontier.pops(),
                    current.g(),
                    current.turns()
                );
                return Ok(frontier.into_closed());
            }

            if let Some(budget) = budget {
                if frontier.pops() > budget {
                    log::debug!("budget of {budget} pops exhausted before {destination}");
                    return Err(SearchError::BudgetExceeded {
                        budget,
                        destination,
                    });
                }
            }
            if let Some(limit) = self.config.max_expansions {
                if frontier.pops() > limit {
                    log::debug!("expansion cap {limit} hit");
                    return Err(SearchError::StepLimit { limit });
                }
            }

            for dir in Direction::ALL {
                if let Some(next) = self.expand(&exp, &frontier, &current, dir) {
                    frontier.push(next);
                }
            }
            frontier.close(current);
        }

        match mode {
            Mode::EnergyBounded => {
                log::debug!(
                    "{} cells reachable from {start_pos} after {} pops",
                    frontier.closed().len(),
                    frontier.pops()
                );
                Ok(frontier.into_closed())
            }
            Mode::Destination => {
                log::debug!("frontier exhausted, {destination} unreachable");
                Err(SearchError::Unreachable { destination })
            }
        }
    }

    /// Build the neighbor of `current` in `dir`, or `None` if it is rejected.
    fn expand(
        &self,
        exp: &Expansion<'_, B::Agent>,
        frontier: &Frontier,
        current: &Tile,
        dir: Direction,
    ) -> Option<Tile> {
        let pos = current.pos().step(dir)?;
        if !self.board.bounds().contains(pos) {
            return None;
        }
        if current.parent() == Some(pos) {
            return None;
        }

        let turns = current.direction().turns_to(dir);
        let t = current.turns().saturating_add(u64::from(turns));
        // Turn penalty grows with every turn taken so far on this path.
        let g = current
            .g()
            .saturating_add(TRANSLATE_COST)
            .saturating_add(TURN_PUNISH.saturating_mul(t));

        if !self.board.can_host(pos, exp.agent) {
            return None;
        }

        let energy = current.energy() - exp.translate - exp.rotate * i64::from(turns);
        if exp.mode == Mode::EnergyBounded && !energy.is_positive() {
            return None;
        }

        if frontier.open_covers(pos, g) || frontier.closed_covers(pos, g) {
            return None;
        }

        let mut tile = Tile::new(pos, dir);
        tile.set_cost(g, pos.manhattan(exp.destination).saturating_mul(H_ESTIMATE));
        tile.set_parent(current.pos());
        tile.set_turns(t);
        tile.set_energy(energy);
        log::trace!("queue {pos} g={g} t={t} energy={energy}");
        Some(tile)
    }
}
