//! A bounded board of walls and robots.
//!
//! [`World`] is the in-memory [`Board`] used to drive the planner. It can be
//! built programmatically or parsed from an ASCII layout:
//!
//! ```text
//! .....
//! .#A#.
//! .....
//! ```
//!
//! `.` is floor, `#` is a wall and an uppercase letter places a robot with
//! that name. Every line must have the same width.

use std::collections::HashSet;

use gridwalk_core::{Agent, Board, Bounds, Point};

use crate::error::WorldError;
use crate::robot::Robot;

const FLOOR: char = '.';
const WALL: char = '#';

/// Walls and robots on a bounded grid.
#[derive(Debug, Clone)]
pub struct World {
    bounds: Bounds,
    walls: HashSet<Point>,
    robots: Vec<Robot>,
}

impl World {
    /// An empty world spanning `[0, max_x] × [0, max_y]`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            walls: HashSet::new(),
            robots: Vec::new(),
        }
    }

    /// An empty `width × height` world.
    pub fn with_size(width: i64, height: i64) -> Result<Self, WorldError> {
        Bounds::with_size(width, height)
            .map(Self::new)
            .ok_or(WorldError::EmptyLayout)
    }

    /// Parse an ASCII layout. Surrounding whitespace is trimmed from the
    /// whole string but not from individual lines.
    pub fn parse(s: &str) -> Result<Self, WorldError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(WorldError::EmptyLayout);
        }

        let mut width: Option<i64> = None;
        let mut walls = HashSet::new();
        let mut marks: Vec<(char, Point)> = Vec::new();
        let mut height: i64 = 0;

        for (y, line) in (0_i64..).zip(s.lines()) {
            let mut x: i64 = 0;
            for ch in line.chars() {
                let p = Point::new(x, y);
                match ch {
                    FLOOR => {}
                    WALL => {
                        walls.insert(p);
                    }
                    'A'..='Z' => {
                        if marks.iter().any(|&(name, _)| name == ch) {
                            return Err(WorldError::DuplicateRobot(ch));
                        }
                        marks.push((ch, p));
                    }
                    _ => return Err(WorldError::InvalidChar { ch, pos: p }),
                }
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(WorldError::InconsistentWidth {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height = y + 1;
        }

        let mut world = Self::with_size(width.unwrap_or(0), height)?;
        world.walls = walls;
        for (name, p) in marks {
            world.robots.push(Robot::new(name, p));
        }
        log::debug!(
            "parsed world {} with {} walls and {} robots",
            world.bounds,
            world.walls.len(),
            world.robots.len()
        );
        Ok(world)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether there is a wall at `p`.
    pub fn is_wall(&self, p: Point) -> bool {
        self.walls.contains(&p)
    }

    /// Place a wall at `p`.
    pub fn add_wall(&mut self, p: Point) -> Result<(), WorldError> {
        if !self.bounds.contains(p) {
            return Err(WorldError::OutOfBounds(p));
        }
        if self.robot_at(p).is_some() {
            return Err(WorldError::Occupied(p));
        }
        self.walls.insert(p);
        Ok(())
    }

    /// Remove the wall at `p`, returning whether there was one.
    pub fn remove_wall(&mut self, p: Point) -> bool {
        self.walls.remove(&p)
    }

    /// Put `robot` on the board at its own position.
    pub fn place_robot(&mut self, robot: Robot) -> Result<(), WorldError> {
        let p = robot.position();
        if !self.bounds.contains(p) {
            return Err(WorldError::OutOfBounds(p));
        }
        if self.robot(robot.name()).is_some() {
            return Err(WorldError::DuplicateRobot(robot.name()));
        }
        if self.is_wall(p) || self.robot_at(p).is_some() {
            return Err(WorldError::Occupied(p));
        }
        self.robots.push(robot);
        Ok(())
    }

    /// Move the named robot to `to`, which must be free for it.
    pub fn move_robot(&mut self, name: char, to: Point) -> Result<(), WorldError> {
        if !self.bounds.contains(to) {
            return Err(WorldError::OutOfBounds(to));
        }
        let robot = self.robot(name).ok_or(WorldError::UnknownRobot(name))?;
        if !self.can_host(to, robot) {
            return Err(WorldError::Occupied(to));
        }
        if let Some(r) = self.robot_mut(name) {
            r.set_position(to);
        }
        Ok(())
    }

    /// The robot named `name`, if present.
    pub fn robot(&self, name: char) -> Option<&Robot> {
        self.robots.iter().find(|r| r.name() == name)
    }

    /// Mutable access to the robot named `name`.
    pub fn robot_mut(&mut self, name: char) -> Option<&mut Robot> {
        self.robots.iter_mut().find(|r| r.name() == name)
    }

    /// The robot standing at `p`, if any.
    pub fn robot_at(&self, p: Point) -> Option<&Robot> {
        self.robots.iter().find(|r| r.position() == p)
    }

    /// All robots in placement order.
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }
}

impl Board for World {
    type Agent = Robot;

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Free floor, or the cell the robot itself stands on.
    fn can_host(&self, p: Point, agent: &Robot) -> bool {
        if self.is_wall(p) {
            return false;
        }
        match self.robot_at(p) {
            Some(other) => other.name() == agent.name(),
            None => true,
        }
    }
}
