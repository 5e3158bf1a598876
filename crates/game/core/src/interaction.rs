//! Overlap and interaction contracts.
//!
//! Overlap is passive: the map reports that two entities now share a tile and
//! asks what should happen. Interaction is explicit: the player targets an
//! entity, and the action only runs when [`Interactable::is_interactable`]
//! holds.

use crate::enemy::Enemy;
use crate::player::Player;
use crate::state::{InventoryItem, ItemClass};

/// What an overlap resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Overlap {
    /// The driver must run a battle between the two parties.
    Battle,
    /// The collectible moved into the player's inventory.
    PickedUp,
    /// Nothing happens.
    Pass,
}

/// Player and enemy share a tile.
///
/// A battle starts only when a player is present, the enemy is hostile, and
/// the player is not invisible. Allied enemies always pass through.
pub fn enemy_overlap(player: Option<&Player>, enemy: &Enemy) -> Overlap {
    match player {
        Some(player) if enemy.is_hostile() && !player.is_invisible() => Overlap::Battle,
        _ => Overlap::Pass,
    }
}

/// Player steps onto a collectible.
pub fn item_overlap(player: Option<&mut Player>, item: InventoryItem) -> Overlap {
    match player {
        Some(player) => {
            if player.pick_up(item) {
                Overlap::PickedUp
            } else {
                Overlap::Pass
            }
        }
        None => Overlap::Pass,
    }
}

/// Explicit, player-initiated actions.
pub trait Interactable {
    /// Whether [`Interactable::interact`] would succeed right now.
    fn is_interactable(&self, player: &Player) -> bool;

    /// Performs the interaction. Returns `false`, with nothing changed, when
    /// the precondition does not hold.
    fn interact(&mut self, player: &mut Player) -> bool;
}

impl Interactable for Enemy {
    /// Only a hostile mercenary within bribe radius of a player carrying
    /// enough treasure can be interacted with.
    fn is_interactable(&self, player: &Player) -> bool {
        let Some(mercenary) = self.as_mercenary() else {
            return false;
        };
        !mercenary.is_allied()
            && self.position().distance(player.position()) <= mercenary.bribe_radius
            && player.count(ItemClass::Treasure) >= mercenary.bribe_amount as usize
    }

    /// Bribes the mercenary: takes exactly the bribe amount of treasure and
    /// makes it a permanent ally.
    fn interact(&mut self, player: &mut Player) -> bool {
        if !self.is_interactable(player) {
            return false;
        }
        let position = self.position();
        let Some(mercenary) = self.as_mercenary_mut() else {
            return false;
        };

        for _ in 0..mercenary.bribe_amount {
            player.use_item(ItemClass::Treasure);
        }
        mercenary.ally();
        if position.is_adjacent(player.position()) {
            mercenary.mark_adjacent();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{EntityId, ItemKind, Position, Tick};

    fn config() -> GameConfig {
        GameConfig {
            bribe_amount: 2,
            bribe_radius: 2,
            ..GameConfig::default()
        }
    }

    fn player_with_treasure(count: u32) -> Player {
        let mut player = Player::from_config(Position::new(0, 0), &config());
        for id in 0..count {
            player.pick_up(InventoryItem::new(EntityId(100 + id), ItemKind::Treasure));
        }
        player
    }

    #[test]
    fn bribe_short_by_one_is_rejected_without_consuming() {
        let mut player = player_with_treasure(1);
        let mut mercenary = Enemy::mercenary(EntityId(1), Position::new(1, 0), &config());

        assert!(!mercenary.is_interactable(&player));
        assert!(!mercenary.interact(&mut player));
        assert_eq!(player.count(ItemClass::Treasure), 1);
        assert!(mercenary.is_hostile());
    }

    #[test]
    fn bribe_consumes_exact_amount_and_allies() {
        let mut player = player_with_treasure(3);
        let mut mercenary = Enemy::mercenary(EntityId(1), Position::new(1, 0), &config());

        assert!(mercenary.interact(&mut player));
        assert_eq!(player.count(ItemClass::Treasure), 1);
        assert!(mercenary.is_allied());
        assert!(mercenary.as_mercenary().is_some_and(|m| m.is_adjacent_to_player()));

        // No second bribe, no un-bribe.
        assert!(!mercenary.is_interactable(&player));
        assert!(!mercenary.interact(&mut player));
        assert_eq!(player.count(ItemClass::Treasure), 1);
    }

    #[test]
    fn bribe_out_of_radius_is_rejected() {
        let mut player = player_with_treasure(5);
        let mut mercenary = Enemy::mercenary(EntityId(1), Position::new(3, 0), &config());

        assert!(!mercenary.interact(&mut player));
        assert_eq!(player.count(ItemClass::Treasure), 5);
    }

    #[test]
    fn zombies_are_not_interactable() {
        let player = player_with_treasure(5);
        let zombie = Enemy::zombie_toast(EntityId(1), Position::new(1, 0), &config());
        assert!(!zombie.is_interactable(&player));
    }

    #[test]
    fn invisibility_suppresses_battle() {
        let mut player = player_with_treasure(0);
        player.pick_up(InventoryItem::new(
            EntityId(9),
            ItemKind::InvisibilityPotion { duration: 3 },
        ));
        player.consume_potion(EntityId(9), Tick(0));
        let zombie = Enemy::zombie_toast(EntityId(1), Position::new(0, 0), &config());

        assert_eq!(enemy_overlap(Some(&player), &zombie), Overlap::Pass);
    }

    #[test]
    fn hostile_contact_starts_battle_and_allies_pass() {
        let mut player = player_with_treasure(2);
        let mut mercenary = Enemy::mercenary(EntityId(1), Position::new(1, 0), &config());
        assert_eq!(enemy_overlap(Some(&player), &mercenary), Overlap::Battle);

        mercenary.interact(&mut player);
        assert_eq!(enemy_overlap(Some(&player), &mercenary), Overlap::Pass);
    }

    #[test]
    fn no_player_means_no_interaction() {
        let zombie = Enemy::zombie_toast(EntityId(1), Position::new(0, 0), &config());
        assert_eq!(enemy_overlap(None, &zombie), Overlap::Pass);
        assert_eq!(
            item_overlap(None, InventoryItem::new(EntityId(2), ItemKind::Treasure)),
            Overlap::Pass
        );
    }

    #[test]
    fn treasure_pickup_counts() {
        let mut player = player_with_treasure(0);
        let outcome = item_overlap(
            Some(&mut player),
            InventoryItem::new(EntityId(2), ItemKind::Treasure),
        );
        assert_eq!(outcome, Overlap::PickedUp);
        assert_eq!(player.collected_treasure_count(), 1);
    }

    #[test]
    fn second_key_stays_on_the_floor() {
        let mut player = player_with_treasure(0);
        let first = InventoryItem::new(EntityId(2), ItemKind::Key { number: 1 });
        let second = InventoryItem::new(EntityId(3), ItemKind::Key { number: 2 });

        assert_eq!(item_overlap(Some(&mut player), first), Overlap::PickedUp);
        assert_eq!(item_overlap(Some(&mut player), second), Overlap::Pass);
        assert_eq!(player.count(ItemClass::Key), 1);
    }
}
