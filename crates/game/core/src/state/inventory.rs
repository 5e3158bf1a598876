//! Inventory system for the player.
//!
//! The inventory is a typed container: callers look items up by [`ItemClass`]
//! rather than by concrete data, and only the player owns one.

use super::EntityId;

/// Concrete item data carried by a collectible.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Treasure,
    Key { number: u32 },
    InvincibilityPotion { duration: u64 },
    InvisibilityPotion { duration: u64 },
    Bomb,
    Sword { attack: f64, durability: u32 },
    Bow { durability: u32 },
    Shield { defence: f64, durability: u32 },
}

/// Item category used for typed inventory lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ItemClass {
    Treasure,
    Key,
    InvincibilityPotion,
    InvisibilityPotion,
    Bomb,
    Sword,
    Bow,
    Shield,
}

impl ItemKind {
    pub const fn class(&self) -> ItemClass {
        match self {
            ItemKind::Treasure => ItemClass::Treasure,
            ItemKind::Key { .. } => ItemClass::Key,
            ItemKind::InvincibilityPotion { .. } => ItemClass::InvincibilityPotion,
            ItemKind::InvisibilityPotion { .. } => ItemClass::InvisibilityPotion,
            ItemKind::Bomb => ItemClass::Bomb,
            ItemKind::Sword { .. } => ItemClass::Sword,
            ItemKind::Bow { .. } => ItemClass::Bow,
            ItemKind::Shield { .. } => ItemClass::Shield,
        }
    }

    /// Potion effect granted when this item is consumed, if it is a potion.
    pub const fn potion_effect(&self) -> Option<crate::player::PendingEffect> {
        use crate::player::{EffectKind, PendingEffect};
        match *self {
            ItemKind::InvincibilityPotion { duration } => Some(PendingEffect {
                kind: EffectKind::Invincibility,
                duration,
            }),
            ItemKind::InvisibilityPotion { duration } => Some(PendingEffect {
                kind: EffectKind::Invisibility,
                duration,
            }),
            _ => None,
        }
    }

    /// True for items that contribute to battle statistics.
    pub const fn is_weapon(&self) -> bool {
        matches!(
            self,
            ItemKind::Sword { .. } | ItemKind::Bow { .. } | ItemKind::Shield { .. }
        )
    }
}

/// An item owned by the player.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryItem {
    pub id: EntityId,
    pub kind: ItemKind,
}

impl InventoryItem {
    pub const fn new(id: EntityId, kind: ItemKind) -> Self {
        Self { id, kind }
    }

    pub const fn class(&self) -> ItemClass {
        self.kind.class()
    }
}

/// Ordered item storage; insertion order is preserved so "first of class"
/// always means the oldest such item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    items: Vec<InventoryItem>,
}

impl InventoryState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Stores `item`. At most one key may be held at a time; a second key is
    /// refused and `false` is returned.
    pub fn add(&mut self, item: InventoryItem) -> bool {
        if item.class() == ItemClass::Key && self.count(ItemClass::Key) > 0 {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn count(&self, class: ItemClass) -> usize {
        self.items.iter().filter(|item| item.class() == class).count()
    }

    pub fn first(&self, class: ItemClass) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.class() == class)
    }

    pub fn get(&self, id: EntityId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut InventoryItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<InventoryItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn remove_first(&mut self, class: ItemClass) -> Option<InventoryItem> {
        let index = self.items.iter().position(|item| item.class() == class)?;
        Some(self.items.remove(index))
    }

    /// Weapons in insertion order.
    pub fn weapons(&self) -> impl Iterator<Item = &InventoryItem> + '_ {
        self.items.iter().filter(|item| item.kind.is_weapon())
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Remaining-use bookkeeping applied to weapons after a battle.
///
/// Returns the ids of items that broke (and were removed).
pub fn wear_weapons(inventory: &mut InventoryState, used: &[EntityId]) -> Vec<EntityId> {
    let mut broken = Vec::new();
    for id in used {
        let Some(item) = inventory.get_mut(*id) else {
            continue;
        };
        let durability = match &mut item.kind {
            ItemKind::Sword { durability, .. }
            | ItemKind::Bow { durability }
            | ItemKind::Shield { durability, .. } => durability,
            _ => continue,
        };
        *durability = durability.saturating_sub(1);
        if *durability == 0 {
            inventory.remove(*id);
            broken.push(*id);
        }
    }
    broken
}
