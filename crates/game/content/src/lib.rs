//! Data-driven content for the dungeon rules.
//!
//! This crate reads the files a session is built from:
//! - Game configuration (data-driven via TOML)
//! - Scenarios: initial entities and the goal tree (data-driven via RON)
//!
//! Content is consumed by the runtime when a simulation is set up and never
//! appears in game state. All loaders deserialize straight into dungeon-core
//! types through their `serde` feature.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, ScenarioLoader};
