//! Player input for a single tick.

use dungeon_core::{Direction, EntityId};

/// What the player does this tick.
///
/// Exactly one action is applied per tick, before buffs advance and before
/// any enemy moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Step one tile; walking into a closed door spends the matching key and
    /// walking into a boulder pushes it.
    Move(Direction),
    /// Drink a potion or put down a bomb from the inventory.
    UseItem(EntityId),
    /// Explicit interaction with an entity, e.g. bribing a mercenary.
    Interact(EntityId),
    /// Let the tick pass.
    Wait,
}
