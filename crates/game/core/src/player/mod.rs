//! The controllable player.
//!
//! The player owns its inventory, buff state machine and the two counters the
//! goal tree reads. Movement is two-phase: [`Player::face`] yields the
//! requested tile, and the map calls [`Player::relocate`] once it has
//! validated the move.

mod buff;

pub use buff::{EffectKind, PendingEffect, PlayerBuffState, PlayerMode};

use crate::combat::{BattleStatistics, equipment_buff};
use crate::config::GameConfig;
use crate::state::{Direction, EntityId, InventoryItem, InventoryState, ItemClass, Position, Tick};

/// Player actor state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    position: Position,
    previous_position: Position,
    facing: Direction,
    stats: BattleStatistics,
    inventory: InventoryState,
    buffs: PlayerBuffState,
    collected_treasure: u32,
    defeated_enemies: u32,
}

/// Fully composed battle profile plus the weapons that contributed to it.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleProfile {
    pub stats: BattleStatistics,
    pub weapons_used: Vec<EntityId>,
}

impl Player {
    pub const ID: EntityId = EntityId::PLAYER;

    pub fn new(position: Position, stats: BattleStatistics) -> Self {
        Self {
            position,
            previous_position: position,
            facing: Direction::default(),
            stats,
            inventory: InventoryState::empty(),
            buffs: PlayerBuffState::new(),
            collected_treasure: 0,
            defeated_enemies: 0,
        }
    }

    pub fn from_config(position: Position, config: &GameConfig) -> Self {
        Self::new(
            position,
            BattleStatistics::player(config.player_health, config.player_attack),
        )
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Tile the player occupied before its last relocation.
    pub fn previous_position(&self) -> Position {
        self.previous_position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Base statistics, without buffs or equipment.
    pub fn stats(&self) -> &BattleStatistics {
        &self.stats
    }

    pub fn inventory(&self) -> &InventoryState {
        &self.inventory
    }

    pub fn buffs(&self) -> &PlayerBuffState {
        &self.buffs
    }

    pub fn mode(&self) -> PlayerMode {
        self.buffs.mode()
    }

    pub fn is_invincible(&self) -> bool {
        self.buffs.is_invincible()
    }

    pub fn is_invisible(&self) -> bool {
        self.buffs.is_invisible()
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    pub fn collected_treasure_count(&self) -> u32 {
        self.collected_treasure
    }

    pub fn defeated_enemy_count(&self) -> u32 {
        self.defeated_enemies
    }

    /// Turns toward `direction` and returns the tile the player wants to enter.
    pub fn face(&mut self, direction: Direction) -> Position {
        self.facing = direction;
        self.position.translate(direction)
    }

    /// Moves the player to `position`, remembering the tile it left.
    pub fn relocate(&mut self, position: Position) {
        if position != self.position {
            self.previous_position = self.position;
            self.position = position;
        }
    }

    /// Adds a collectible to the inventory. Returns `false` when it was refused
    /// (the item then stays where it was).
    pub fn pick_up(&mut self, item: InventoryItem) -> bool {
        let is_treasure = item.class() == ItemClass::Treasure;
        let stored = self.inventory.add(item);
        if stored && is_treasure {
            self.collected_treasure += 1;
        }
        stored
    }

    pub fn count(&self, class: ItemClass) -> usize {
        self.inventory.count(class)
    }

    /// Removes and returns the oldest item of `class`.
    pub fn use_item(&mut self, class: ItemClass) -> Option<InventoryItem> {
        self.inventory.remove_first(class)
    }

    /// Takes the item `item_id` out of the inventory.
    pub fn remove_item(&mut self, item_id: EntityId) -> Option<InventoryItem> {
        self.inventory.remove(item_id)
    }

    /// Drinks the potion `item_id`. Returns `false` if the player does not hold
    /// it or it is not a potion; nothing is consumed in that case.
    pub fn consume_potion(&mut self, item_id: EntityId, current_tick: Tick) -> bool {
        let Some(effect) = self
            .inventory
            .get(item_id)
            .and_then(|item| item.kind.potion_effect())
        else {
            return false;
        };
        self.inventory.remove(item_id);
        self.buffs.on_potion_consumed(effect, current_tick);
        true
    }

    /// Advances the buff state machine to `current_tick`.
    pub fn on_tick(&mut self, current_tick: Tick) {
        self.buffs.on_tick(current_tick);
    }

    /// Composes the active potion buff onto `origin`.
    pub fn apply_buff(&self, origin: BattleStatistics) -> BattleStatistics {
        origin.compose(self.mode().battle_buff())
    }

    /// Profile used in battle: base, potion buff, equipment and every ally's
    /// contribution, in that order.
    pub fn battle_profile<I>(&self, allies: I) -> BattleProfile
    where
        I: IntoIterator<Item = BattleStatistics>,
    {
        let (equipment, weapons_used) = equipment_buff(&self.inventory);
        let stats = allies
            .into_iter()
            .fold(self.apply_buff(self.stats).compose(equipment), |acc, ally| {
                acc.compose(ally)
            });
        BattleProfile {
            stats,
            weapons_used,
        }
    }

    /// Applies battle damage to the base statistics.
    pub fn take_damage(&mut self, amount: f64) {
        self.stats = self.stats.with_health(self.stats.health - amount.max(0.0));
    }

    /// Removes weapons that were used in a battle once worn out.
    pub fn wear_weapons(&mut self, used: &[EntityId]) -> Vec<EntityId> {
        crate::state::wear_weapons(&mut self.inventory, used)
    }

    pub fn won_battle(&mut self) {
        self.defeated_enemies += 1;
    }
}
