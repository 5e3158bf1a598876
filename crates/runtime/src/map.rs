//! Grid map served to the rules through [`dungeon_core::MapOracle`].
//!
//! The map holds terrain and the pieces of the world that only the driver
//! mutates: doors, boulders, switches and bombs that have been put down.
//! Actors and ground items live in [`crate::Simulation`].
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use dungeon_core::{MapOracle, Position};

/// Locked door; opens for good once the matching key is spent on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Door {
    pub key: u32,
    pub open: bool,
}

/// Inclusive rectangle of playable tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    pub const fn point(position: Position) -> Self {
        Self {
            min: position,
            max: position,
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        (self.min.x..=self.max.x).contains(&position.x)
            && (self.min.y..=self.max.y).contains(&position.y)
    }

    /// Grows the rectangle to cover `position`.
    pub fn include(&mut self, position: Position) {
        self.min = Position::new(self.min.x.min(position.x), self.min.y.min(position.y));
        self.max = Position::new(self.max.x.max(position.x), self.max.y.max(position.y));
    }

    /// Grows the rectangle by `margin` tiles on every side.
    #[must_use]
    pub fn padded(self, margin: i32) -> Self {
        Self {
            min: Position::new(self.min.x - margin, self.min.y - margin),
            max: Position::new(self.max.x + margin, self.max.y + margin),
        }
    }
}

/// Static and driver-mutated layout of a dungeon.
///
/// The playable area is the bounding box of everything placed at setup,
/// padded by one tile, so open scenarios still have a finite edge for path
/// searches.
#[derive(Clone, Debug, Default)]
pub struct GridMap {
    extent: Option<Bounds>,
    walls: BTreeSet<Position>,
    exits: BTreeSet<Position>,
    switches: BTreeSet<Position>,
    boulders: BTreeSet<Position>,
    doors: BTreeMap<Position, Door>,
    bombs: BTreeSet<Position>,
}

impl GridMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends the playable area to cover `position`.
    pub fn include(&mut self, position: Position) {
        match &mut self.extent {
            Some(extent) => extent.include(position),
            None => self.extent = Some(Bounds::point(position)),
        }
    }

    pub fn add_wall(&mut self, position: Position) {
        self.include(position);
        self.walls.insert(position);
    }

    pub fn add_exit(&mut self, position: Position) {
        self.include(position);
        self.exits.insert(position);
    }

    pub fn add_switch(&mut self, position: Position) {
        self.include(position);
        self.switches.insert(position);
    }

    pub fn add_boulder(&mut self, position: Position) {
        self.include(position);
        self.boulders.insert(position);
    }

    pub fn add_door(&mut self, position: Position, key: u32) {
        self.include(position);
        self.doors.insert(position, Door { key, open: false });
    }

    /// Playable area, or `None` for a map with nothing placed on it.
    pub fn bounds(&self) -> Option<Bounds> {
        self.extent.map(|extent| extent.padded(1))
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        self.bounds().is_some_and(|bounds| bounds.contains(position))
    }

    pub fn is_wall(&self, position: Position) -> bool {
        self.walls.contains(&position)
    }

    pub fn is_exit(&self, position: Position) -> bool {
        self.exits.contains(&position)
    }

    pub fn is_switch(&self, position: Position) -> bool {
        self.switches.contains(&position)
    }

    pub fn has_boulder(&self, position: Position) -> bool {
        self.boulders.contains(&position)
    }

    pub fn has_bomb(&self, position: Position) -> bool {
        self.bombs.contains(&position)
    }

    pub fn door(&self, position: Position) -> Option<Door> {
        self.doors.get(&position).copied()
    }

    pub fn doors(&self) -> impl Iterator<Item = (Position, Door)> + '_ {
        self.doors.iter().map(|(position, door)| (*position, *door))
    }

    pub fn exits(&self) -> impl Iterator<Item = Position> + '_ {
        self.exits.iter().copied()
    }

    /// A switch is active while a boulder rests on it.
    pub fn is_switch_active(&self, position: Position) -> bool {
        self.is_switch(position) && self.has_boulder(position)
    }

    /// True when every switch carries a boulder; vacuously true without
    /// switches.
    pub fn all_switches_active(&self) -> bool {
        self.switches.iter().all(|switch| self.boulders.contains(switch))
    }

    /// Whether an actor or a boulder may occupy `position`.
    pub fn is_open(&self, position: Position) -> bool {
        self.in_bounds(position)
            && !self.is_wall(position)
            && !self.has_boulder(position)
            && self.door(position).is_none_or(|door| door.open)
    }

    pub fn open_door(&mut self, position: Position) -> bool {
        match self.doors.get_mut(&position) {
            Some(door) if !door.open => {
                door.open = true;
                true
            }
            _ => false,
        }
    }

    /// Moves the boulder on `from` to `to` when `to` is open.
    pub fn push_boulder(&mut self, from: Position, to: Position) -> bool {
        if !self.has_boulder(from) || !self.is_open(to) {
            return false;
        }
        self.boulders.remove(&from);
        self.boulders.insert(to);
        true
    }

    pub fn place_bomb(&mut self, position: Position) {
        self.bombs.insert(position);
    }

    /// Whether a bomb on `position` sits next to an active switch.
    pub fn is_bomb_triggered(&self, position: Position) -> bool {
        self.has_bomb(position)
            && position
                .neighbours()
                .into_iter()
                .any(|tile| self.is_switch_active(tile))
    }

    /// Bombs that must go off now.
    pub fn triggered_bombs(&self) -> Vec<Position> {
        self.bombs
            .iter()
            .copied()
            .filter(|bomb| self.is_bomb_triggered(*bomb))
            .collect()
    }

    /// Removes walls, doors, boulders, switches and bombs in the square of
    /// half-width `radius` around `center`. Exits survive.
    pub fn clear_area(&mut self, center: Position, radius: u32) {
        let hit = |tile: &Position| in_blast(center, radius, *tile);
        self.walls.retain(|tile| !hit(tile));
        self.boulders.retain(|tile| !hit(tile));
        self.switches.retain(|tile| !hit(tile));
        self.bombs.retain(|tile| !hit(tile));
        self.doors.retain(|tile, _| !hit(tile));
    }
}

/// Chebyshev-distance test used for bomb blasts.
pub fn in_blast(center: Position, radius: u32, tile: Position) -> bool {
    center.x.abs_diff(tile.x) <= radius && center.y.abs_diff(tile.y) <= radius
}

impl MapOracle for GridMap {
    fn neighbours(&self, from: Position) -> Vec<Position> {
        from.neighbours()
            .into_iter()
            .filter(|tile| self.is_open(*tile))
            .collect()
    }

    /// Breadth-first search over open tiles; stays put when `target` cannot
    /// be reached.
    fn step_toward(&self, from: Position, target: Position) -> Position {
        if from == target {
            return from;
        }

        let mut parents: HashMap<Position, Position> = HashMap::from([(from, from)]);
        let mut queue = VecDeque::from([from]);

        while let Some(tile) = queue.pop_front() {
            if tile == target {
                let mut step = tile;
                while let Some(&parent) = parents.get(&step)
                    && parent != from
                {
                    step = parent;
                }
                return step;
            }
            for next in self.neighbours(tile) {
                if !parents.contains_key(&next) {
                    parents.insert(next, tile);
                    queue.push_back(next);
                }
            }
        }

        from
    }
}
