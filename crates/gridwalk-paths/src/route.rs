//! Rendezvous selection and path reconstruction on top of search results.

use std::collections::HashMap;

use gridwalk_core::{Agent, Board, Energy, Point};

use crate::error::{Result, SearchError};
use crate::search::{Mode, Planner};
use crate::tile::Tile;

/// Pick one tile from each set so that the two cells are as close as
/// possible, preferring the pair with the most combined energy on a tie.
/// Pairs on the same cell are never chosen.
pub fn pick_rendezvous(a: &[Tile], b: &[Tile]) -> Result<(Tile, Tile)> {
    if a.is_empty() {
        return Err(SearchError::MissingArgument("first reachable set"));
    }
    if b.is_empty() {
        return Err(SearchError::MissingArgument("second reachable set"));
    }

    let mut best: Option<(u64, i128, &Tile, &Tile)> = None;
    for ta in a {
        for tb in b {
            if ta.pos() == tb.pos() {
                continue;
            }
            let dist = ta.pos().manhattan(tb.pos());
            let energy = i128::from(ta.energy().units()) + i128::from(tb.energy().units());
            let better = match best {
                None => true,
                Some((bd, be, _, _)) => dist < bd || (dist == bd && energy > be),
            };
            if better {
                best = Some((dist, energy, ta, tb));
            }
        }
    }

    let (dist, _, ta, tb) = best.ok_or(SearchError::NoRendezvous)?;
    log::debug!("rendezvous {} <-> {} at distance {dist}", ta.pos(), tb.pos());
    Ok((*ta, *tb))
}

/// Walk parent links back from `end` through `set` and return the tiles on
/// that chain in start-to-end order. `set` itself is left untouched.
pub fn prune_to_chain(set: &[Tile], end: &Tile) -> Result<Vec<Tile>> {
    if set.is_empty() {
        return Err(SearchError::MissingArgument("tile set"));
    }

    let by_pos: HashMap<Point, &Tile> = set.iter().rev().map(|t| (t.pos(), t)).collect();
    let mut chain = vec![*end];
    let mut cur = end;
    while let Some(parent) = cur.parent() {
        // A well-formed chain can't be longer than the set it lives in.
        if chain.len() > set.len() {
            return Err(SearchError::BrokenChain { at: parent });
        }
        cur = by_pos
            .get(&parent)
            .copied()
            .ok_or(SearchError::BrokenChain { at: parent })?;
        chain.push(*cur);
    }
    chain.reverse();
    Ok(chain)
}

/// Positions from the start of `set` to `end`, following parent links.
pub fn reconstruct_path(set: &[Tile], end: &Tile) -> Result<Vec<Point>> {
    Ok(prune_to_chain(set, end)?
        .into_iter()
        .map(|t| t.pos())
        .collect())
}

impl<B: Board> Planner<'_, B> {
    /// Everything `agent` can reach with energy to spare.
    pub fn reachable(&self, agent: &B::Agent) -> Result<Vec<Tile>> {
        self.search(agent, agent.position(), Mode::EnergyBounded)
    }

    /// The cell sequence from `agent` to `destination`, both ends included.
    pub fn path_to(&self, agent: &B::Agent, destination: Point) -> Result<Vec<Point>> {
        let closed = self.search(agent, destination, Mode::Destination)?;
        let end = closed.last().ok_or(SearchError::Unreachable { destination })?;
        reconstruct_path(&closed, end)
    }

    /// Energy `agent` would spend travelling to `destination`.
    pub fn energy_cost(&self, agent: &B::Agent, destination: Point) -> Result<Energy> {
        let closed = self.search(agent, destination, Mode::Destination)?;
        let end = closed.last().ok_or(SearchError::Unreachable { destination })?;
        Ok(agent.energy() - end.energy())
    }

    /// Best meeting tiles for two robots, each searched towards the other.
    pub fn rendezvous(&self, a: &B::Agent, b: &B::Agent) -> Result<(Tile, Tile)> {
        let reach_a = self.search(a, b.position(), Mode::EnergyBounded)?;
        let reach_b = self.search(b, a.position(), Mode::EnergyBounded)?;
        pick_rendezvous(&reach_a, &reach_b)
    }

    /// Paths for both robots to their rendezvous cells.
    pub fn best_joint_routes(
        &self,
        a: &B::Agent,
        b: &B::Agent,
    ) -> Result<(Vec<Point>, Vec<Point>)> {
        let reach_a = self.search(a, b.position(), Mode::EnergyBounded)?;
        let reach_b = self.search(b, a.position(), Mode::EnergyBounded)?;
        let (end_a, end_b) = pick_rendezvous(&reach_a, &reach_b)?;
        Ok((
            reconstruct_path(&reach_a, &end_a)?,
            reconstruct_path(&reach_b, &end_b)?,
        ))
    }
}
