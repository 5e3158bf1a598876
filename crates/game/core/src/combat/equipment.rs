//! Weapon contributions to battle statistics.

use super::stats::BattleStatistics;
use crate::state::{EntityId, InventoryState, ItemKind};

/// Damage multiplier granted by a bow.
pub const BOW_DAMAGE_MULTIPLIER: f64 = 2.0;

/// Buff contributed by a single item, if it is a weapon.
pub fn item_buff(kind: &ItemKind) -> Option<BattleStatistics> {
    match *kind {
        ItemKind::Sword { attack, .. } => Some(BattleStatistics {
            attack,
            ..BattleStatistics::NEUTRAL
        }),
        ItemKind::Bow { .. } => Some(BattleStatistics {
            damage_multiplier: BOW_DAMAGE_MULTIPLIER,
            ..BattleStatistics::NEUTRAL
        }),
        ItemKind::Shield { defence, .. } => Some(BattleStatistics {
            defence,
            ..BattleStatistics::NEUTRAL
        }),
        _ => None,
    }
}

/// Combined buff of every weapon in `inventory`, plus the ids of the items
/// that took part (they lose durability after the battle).
pub fn equipment_buff(inventory: &InventoryState) -> (BattleStatistics, Vec<EntityId>) {
    inventory.weapons().fold(
        (BattleStatistics::NEUTRAL, Vec::new()),
        |(buff, mut used), item| match item_buff(&item.kind) {
            Some(weapon) => {
                used.push(item.id);
                (buff.compose(weapon), used)
            }
            None => (buff, used),
        },
    )
}
