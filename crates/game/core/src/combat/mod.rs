//! Combat profiles and battle resolution.
//!
//! - [`BattleStatistics`]: value type composed from base stats, buffs and
//!   equipment
//! - [`BattleResolver`]: damage exchange between two composed profiles
//! - [`equipment_buff`]: weapon contributions drawn from the inventory

pub mod equipment;
pub mod resolver;
pub mod stats;

pub use equipment::{equipment_buff, item_buff};
pub use resolver::{BattleOutcome, BattleResolver, BattleRound, RoundResolver, Side};
pub use stats::{BattleStatistics, compose};
