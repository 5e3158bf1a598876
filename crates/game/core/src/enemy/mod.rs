//! Autonomous enemies.
//!
//! Enemies carry their position, base statistics and a variant tag. The
//! movement role is not stored: [`Enemy::strategy`] derives it each tick from
//! the player's current mode and the enemy's allegiance.

mod mercenary;

pub use mercenary::Mercenary;

use crate::combat::BattleStatistics;
use crate::config::GameConfig;
use crate::env::MapOracle;
use crate::movement::MovementStrategy;
use crate::player::{Player, PlayerMode};
use crate::state::{EntityId, Position};

/// Enemy variant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyKind {
    /// Wanders randomly; flees from an invincible player.
    ZombieToast,
    /// Chases the player and can be bribed into an ally.
    Mercenary(Mercenary),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    id: EntityId,
    position: Position,
    stats: BattleStatistics,
    kind: EnemyKind,
}

impl Enemy {
    pub fn new(id: EntityId, position: Position, stats: BattleStatistics, kind: EnemyKind) -> Self {
        Self {
            id,
            position,
            stats,
            kind,
        }
    }

    pub fn zombie_toast(id: EntityId, position: Position, config: &GameConfig) -> Self {
        Self::new(
            id,
            position,
            BattleStatistics::enemy(config.zombie_health, config.zombie_attack),
            EnemyKind::ZombieToast,
        )
    }

    pub fn mercenary(id: EntityId, position: Position, config: &GameConfig) -> Self {
        Self::new(
            id,
            position,
            BattleStatistics::enemy(config.mercenary_health, config.mercenary_attack),
            EnemyKind::Mercenary(Mercenary::from_config(config)),
        )
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn stats(&self) -> &BattleStatistics {
        &self.stats
    }

    pub fn kind(&self) -> &EnemyKind {
        &self.kind
    }

    pub fn as_mercenary(&self) -> Option<&Mercenary> {
        match &self.kind {
            EnemyKind::Mercenary(mercenary) => Some(mercenary),
            EnemyKind::ZombieToast => None,
        }
    }

    pub(crate) fn as_mercenary_mut(&mut self) -> Option<&mut Mercenary> {
        match &mut self.kind {
            EnemyKind::Mercenary(mercenary) => Some(mercenary),
            EnemyKind::ZombieToast => None,
        }
    }

    /// Allied enemies are never hostile, whatever the player's mode.
    pub fn is_allied(&self) -> bool {
        self.as_mercenary().is_some_and(Mercenary::is_allied)
    }

    pub fn is_hostile(&self) -> bool {
        !self.is_allied()
    }

    /// What this enemy lends the player in battle, if it is an ally.
    pub fn ally_profile(&self) -> Option<BattleStatistics> {
        self.as_mercenary()
            .filter(|mercenary| mercenary.is_allied())
            .map(Mercenary::ally_profile)
    }

    pub fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    /// Applies battle damage to the base statistics.
    pub fn take_damage(&mut self, amount: f64) {
        self.stats = self.stats.with_health(self.stats.health - amount.max(0.0));
    }

    /// Movement role for this tick, in priority order: allegiance, then the
    /// player's invisibility, then invincibility, then the default chase.
    pub fn strategy(&self, mode: PlayerMode) -> MovementStrategy {
        match &self.kind {
            EnemyKind::Mercenary(mercenary) if mercenary.is_allied() => MovementStrategy::Follow {
                trailing: mercenary.is_adjacent_to_player(),
            },
            EnemyKind::Mercenary(_) => match mode {
                PlayerMode::Invisible => MovementStrategy::Random,
                PlayerMode::Invincible => MovementStrategy::MoveAway,
                PlayerMode::Base => MovementStrategy::MoveToward,
            },
            EnemyKind::ZombieToast => match mode {
                PlayerMode::Invincible => MovementStrategy::MoveAway,
                PlayerMode::Base | PlayerMode::Invisible => MovementStrategy::Random,
            },
        }
    }

    /// Selects this tick's strategy and returns its candidate tile.
    ///
    /// An allied mercenary whose candidate is next to the player becomes
    /// permanently marked as adjacent.
    pub fn plan_move<M>(
        &mut self,
        map: &M,
        player: Option<&Player>,
        roll: u32,
    ) -> (MovementStrategy, Position)
    where
        M: MapOracle + ?Sized,
    {
        let mode = player.map_or(PlayerMode::Base, Player::mode);
        let strategy = self.strategy(mode);
        let candidate = strategy.next_position(map, self.position, player, roll);

        if let (Some(player), Some(mercenary)) = (player, self.as_mercenary_mut())
            && mercenary.is_allied()
            && !mercenary.is_adjacent_to_player()
            && map.is_adjacent(player.position(), candidate)
        {
            mercenary.mark_adjacent();
        }

        (strategy, candidate)
    }
}
