//! Win-condition goal trees.
//!
//! A [`Goal`] is an immutable boolean expression over live game state. It is
//! built once at setup and re-evaluated on demand; nothing is cached because
//! the state underneath changes every tick.
//!
//! # Remaining-goals text
//!
//! [`Goal::describe`] renders what is still left to do:
//!
//! - an achieved node renders as the empty string
//! - an unmet leaf renders its tag, e.g. `:exit`
//! - an unmet composite renders `(left AND right)` / `(left OR right)`,
//!   where an achieved child still occupies its (empty) slot
//!
//! So `And(exit, treasure)` with only the exit reached reads `( AND :treasure)`.

mod spec;

pub use spec::{GoalError, GoalName, GoalSpec};

use crate::state::Position;

/// Read-only view of the game state the goal predicates need.
pub trait GoalView {
    /// `None` before the player spawns or after it has been removed.
    fn player_position(&self) -> Option<Position>;
    fn exits(&self) -> Vec<Position>;
    fn collected_treasure(&self) -> u32;
    fn defeated_enemies(&self) -> u32;
    /// True when every floor switch has a boulder on it (vacuously true with
    /// no switches).
    fn all_switches_activated(&self) -> bool;
}

/// Leaf predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GoalKind {
    /// Player stands on an exit tile.
    Exit,
    /// Player has collected at least `target` treasure.
    Treasure { target: u32 },
    /// Player has defeated at least `target` enemies.
    Enemies { target: u32 },
    /// Every switch is covered by a boulder.
    Boulders,
}

impl GoalKind {
    pub const fn tag(self) -> &'static str {
        match self {
            GoalKind::Exit => ":exit",
            GoalKind::Treasure { .. } => ":treasure",
            GoalKind::Enemies { .. } => ":enemies",
            GoalKind::Boulders => ":boulders",
        }
    }

    fn achieved(self, view: &(impl GoalView + ?Sized), player: Position) -> bool {
        match self {
            GoalKind::Exit => view.exits().contains(&player),
            GoalKind::Treasure { target } => view.collected_treasure() >= target,
            GoalKind::Enemies { target } => view.defeated_enemies() >= target,
            GoalKind::Boulders => view.all_switches_activated(),
        }
    }
}

/// Goal tree node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Goal {
    Leaf(GoalKind),
    And(Box<Goal>, Box<Goal>),
    Or(Box<Goal>, Box<Goal>),
}

impl Goal {
    pub fn and(left: Goal, right: Goal) -> Self {
        Goal::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Goal, right: Goal) -> Self {
        Goal::Or(Box::new(left), Box::new(right))
    }

    /// Whether the goal holds against `view`. Always false without a player.
    pub fn achieved(&self, view: &(impl GoalView + ?Sized)) -> bool {
        match view.player_position() {
            Some(player) => self.evaluate(view, player),
            None => false,
        }
    }

    fn evaluate(&self, view: &(impl GoalView + ?Sized), player: Position) -> bool {
        match self {
            Goal::Leaf(kind) => kind.achieved(view, player),
            Goal::And(left, right) => left.evaluate(view, player) && right.evaluate(view, player),
            Goal::Or(left, right) => left.evaluate(view, player) || right.evaluate(view, player),
        }
    }

    /// Remaining-goals text; empty once achieved.
    pub fn describe(&self, view: &(impl GoalView + ?Sized)) -> String {
        if self.achieved(view) {
            return String::new();
        }
        match self {
            Goal::Leaf(kind) => kind.tag().to_owned(),
            Goal::And(left, right) => {
                format!("({} AND {})", left.describe(view), right.describe(view))
            }
            Goal::Or(left, right) => {
                format!("({} OR {})", left.describe(view), right.describe(view))
            }
        }
    }
}

impl From<GoalKind> for Goal {
    fn from(kind: GoalKind) -> Self {
        Goal::Leaf(kind)
    }
}
