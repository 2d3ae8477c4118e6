//! A mobile robot with a facing, an energy store and per-action prices.

use gridwalk_core::{Action, Agent, Direction, Energy, Point};

/// Energy a freshly placed robot starts with.
pub const DEFAULT_ENERGY: Energy = Energy::new(1000);

/// A robot identified by a single uppercase letter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Robot {
    name: char,
    pos: Point,
    dir: Direction,
    energy: Energy,
    translate_cost: Energy,
    rotate_cost: Energy,
}

impl Robot {
    /// A robot at `pos` facing right, with [`DEFAULT_ENERGY`] and unit
    /// prices for both actions.
    pub fn new(name: char, pos: Point) -> Self {
        Self {
            name,
            pos,
            dir: Direction::Right,
            energy: DEFAULT_ENERGY,
            translate_cost: Energy::new(1),
            rotate_cost: Energy::new(1),
        }
    }

    pub fn with_direction(mut self, dir: Direction) -> Self {
        self.dir = dir;
        self
    }

    pub fn with_energy(mut self, units: i64) -> Self {
        self.energy = Energy::new(units);
        self
    }

    /// Set the real price of one translation and one quarter turn.
    pub fn with_costs(mut self, translate: i64, rotate: i64) -> Self {
        self.translate_cost = Energy::new(translate);
        self.rotate_cost = Energy::new(rotate);
        self
    }

    pub fn name(&self) -> char {
        self.name
    }

    pub fn set_direction(&mut self, dir: Direction) {
        self.dir = dir;
    }

    pub fn set_energy(&mut self, energy: Energy) {
        self.energy = energy;
    }

    pub(crate) fn set_position(&mut self, pos: Point) {
        self.pos = pos;
    }
}

impl Agent for Robot {
    fn position(&self) -> Point {
        self.pos
    }

    fn direction(&self) -> Direction {
        self.dir
    }

    fn energy(&self) -> Energy {
        self.energy
    }

    fn cost(&self, action: Action) -> Energy {
        match action {
            Action::Translate => self.translate_cost,
            Action::Rotate => self.rotate_cost,
        }
    }
}
