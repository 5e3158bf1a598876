//! Battle execution.

use dungeon_core::{BattleResolver, BattleStatistics, Enemy, Side};
use tracing::info;

use super::Simulation;
use crate::report::{BattleRecord, TickChanges, TickReport};

impl<R: BattleResolver> Simulation<R> {
    /// Fights the enemy at `index` and applies the outcome. Returns `true`
    /// when the enemy was removed.
    ///
    /// The player's side is its base statistics with the current potion buff,
    /// every weapon it carries and the contribution of each allied mercenary.
    /// Damage lands on base health, so nothing composed for the battle
    /// survives it.
    pub(super) fn fight(&mut self, index: usize, report: &mut TickReport) -> bool {
        let allies: Vec<BattleStatistics> = self
            .enemies
            .iter()
            .filter_map(Enemy::ally_profile)
            .collect();
        let Some(player) = self.player.as_mut() else {
            return false;
        };
        let Some(enemy) = self.enemies.get_mut(index) else {
            return false;
        };

        let profile = player.battle_profile(allies);
        let outcome = self.resolver.resolve(&profile.stats, enemy.stats());
        report.changes |= TickChanges::BATTLE;

        if outcome.took_place() {
            player.take_damage(outcome.damage_on_player());
            enemy.take_damage(outcome.damage_on_enemy());
            let broken = player.wear_weapons(&profile.weapons_used);
            if !profile.weapons_used.is_empty() {
                report.changes |= TickChanges::INVENTORY;
            }
            if !broken.is_empty() {
                info!(?broken, "weapons broke");
            }
        }

        let enemy_id = enemy.id();
        let defeated = outcome.defeated;
        info!(
            tick = %self.tick,
            enemy = %enemy_id,
            rounds = outcome.rounds.len(),
            damage_taken = outcome.damage_on_player(),
            ?defeated,
            "battle resolved"
        );
        report.battles.push(BattleRecord {
            enemy: enemy_id,
            outcome,
        });

        match defeated {
            Some(Side::Enemy) => {
                player.won_battle();
                self.enemies.remove(index);
                report.changes |= TickChanges::ENEMY_DEFEATED;
                true
            }
            Some(Side::Player) => {
                self.player = None;
                report.changes |= TickChanges::PLAYER_DEFEATED;
                info!(tick = %self.tick, enemy = %enemy_id, "player defeated");
                false
            }
            None => false,
        }
    }
}
