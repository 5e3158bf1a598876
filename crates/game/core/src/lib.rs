//! Deterministic rules for a tile-based, tick-driven dungeon.
//!
//! `dungeon-core` resolves how actors move and what happens when they meet,
//! and evaluates the win condition. It owns no grid and performs no I/O: the
//! map and the random source are consumed through the traits in [`env`], and
//! a driver (see the `dungeon-runtime` crate) sequences the tick.
//!
//! Components, leaf first:
//! - [`combat`]: battle statistics composition and battle resolution
//! - [`movement`]: per-tick enemy movement strategies
//! - [`player`]: the player and its timed buff state machine
//! - [`interaction`]: overlap and bribe contracts
//! - [`goal`]: goal-tree evaluation and remaining-goals text
pub mod combat;
pub mod config;
pub mod enemy;
pub mod env;
pub mod error;
pub mod goal;
pub mod interaction;
pub mod movement;
pub mod player;
pub mod state;

pub use combat::{BattleOutcome, BattleResolver, BattleRound, BattleStatistics, RoundResolver, Side};
pub use config::{ConfigError, GameConfig};
pub use enemy::{Enemy, EnemyKind, Mercenary};
pub use env::{
    InitialEntityKind, InitialEntitySpec, ItemTemplate, MapOracle, PcgRng, RngOracle,
    ScenarioSpec, compute_seed,
};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use goal::{Goal, GoalError, GoalKind, GoalSpec, GoalView};
pub use interaction::{Interactable, Overlap, enemy_overlap, item_overlap};
pub use movement::MovementStrategy;
pub use player::{BattleProfile, EffectKind, PendingEffect, Player, PlayerBuffState, PlayerMode};
pub use state::{
    Direction, EntityId, InventoryItem, InventoryState, ItemClass, ItemKind, Position, Tick,
};
