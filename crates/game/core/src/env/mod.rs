//! Traits and blueprints describing the world around the rules.
//!
//! The rules never own the grid. [`MapOracle`] exposes the topology queries
//! the movement strategies need, [`RngOracle`] supplies deterministic rolls,
//! and [`ScenarioSpec`] describes what a driver should spawn.
mod map;
mod rng;
mod scenario;

pub use map::MapOracle;
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use scenario::{InitialEntityKind, InitialEntitySpec, ItemTemplate, ScenarioSpec};
