//! Reference driver for the dungeon rules.
//!
//! `dungeon-core` decides what actors want and what happens when they meet;
//! this crate owns the world those decisions run against. A [`Simulation`] is
//! built from a [`dungeon_core::ScenarioSpec`] and advanced one tick at a time
//! with a [`PlayerAction`], returning a [`TickReport`] of what changed.
//!
//! Modules are organized by responsibility:
//! - [`map`] holds terrain, doors, boulders, switches and placed bombs
//! - [`simulation`] sequences the tick pipeline and runs battles
//! - [`report`] describes the effects of a tick
//!
//! The crate logs through `tracing` and never installs a subscriber.
pub mod action;
pub mod error;
pub mod map;
pub mod report;
pub mod simulation;

pub use action::PlayerAction;
pub use error::SetupError;
pub use map::{Bounds, Door, GridMap};
pub use report::{BattleRecord, TickChanges, TickReport};
pub use simulation::{GroundItem, Simulation};
