//! Plain state types shared by every rules component.
//!
//! Identifiers, grid coordinates, ticks and the player's inventory live here.
//! Behaviour that mutates them belongs to the owning component (player,
//! enemies), never to these types.
mod common;
mod inventory;

pub use common::{Direction, EntityId, Position, Tick};
pub use inventory::{InventoryItem, InventoryState, ItemClass, ItemKind, wear_weapons};
