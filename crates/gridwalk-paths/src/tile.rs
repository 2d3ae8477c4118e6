use std::cmp::Ordering;

use gridwalk_core::{Direction, Energy, Point};

/// One explored cell plus the path-dependent quantities used to rank it.
///
/// Two cost tracks are kept apart: `g` is the abstract ranking cost built
/// from fixed constants, while `energy` is what the robot would really have
/// left on arrival, priced with its own action costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pos: Point,
    parent: Option<Point>,
    g: u64,
    h: u64,
    f: u64,
    turns: u64,
    energy: Energy,
    direction: Direction,
}

impl Tile {
    /// A tile at `pos` facing `direction`, with no parent and every cost,
    /// turn count and energy at zero.
    pub fn new(pos: Point, direction: Direction) -> Self {
        Self {
            pos,
            parent: None,
            g: 0,
            h: 0,
            f: 0,
            turns: 0,
            energy: Energy::ZERO,
            direction,
        }
    }

    /// Set path cost and heuristic; `f` is recomputed as `g + h`.
    pub fn set_cost(&mut self, g: u64, h: u64) {
        self.g = g;
        self.h = h;
        self.f = g.saturating_add(h);
    }

    pub fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }

    pub fn set_parent(&mut self, parent: Point) {
        self.parent = Some(parent);
    }

    pub fn set_turns(&mut self, turns: u64) {
        self.turns = turns;
    }

    pub fn set_energy(&mut self, energy: Energy) {
        self.energy = energy;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Predecessor on the best known path; `None` for the start tile.
    #[inline]
    pub fn parent(&self) -> Option<Point> {
        self.parent
    }

    #[inline]
    pub fn g(&self) -> u64 {
        self.g
    }

    #[inline]
    pub fn h(&self) -> u64 {
        self.h
    }

    #[inline]
    pub fn f(&self) -> u64 {
        self.f
    }

    /// Cumulative direction changes from the start.
    #[inline]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Energy the robot would hold on arrival.
    #[inline]
    pub fn energy(&self) -> Energy {
        self.energy
    }

    /// Facing on arrival.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Frontier priority: lower `f` first, then lower remaining energy.
    pub fn cmp_priority(&self, other: &Tile) -> Ordering {
        self.f
            .cmp(&other.f)
            .then_with(|| self.energy.cmp(&other.energy))
    }
}
