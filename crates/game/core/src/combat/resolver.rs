//! Battle resolution.
//!
//! The driver hands fully composed statistics to a [`BattleResolver`]; the
//! resolver only runs damage exchange and never looks at buffs, items or
//! allegiance.

use super::stats::BattleStatistics;

/// Participant in a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

/// Damage dealt during one exchange. Values are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleRound {
    pub damage_on_player: f64,
    pub damage_on_enemy: f64,
}

/// Result of a battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    pub rounds: Vec<BattleRound>,
    /// `None` when no battle took place or neither side could hurt the other.
    pub defeated: Option<Side>,
}

impl BattleOutcome {
    /// An outcome in which nothing happened.
    pub fn skipped() -> Self {
        Self {
            rounds: Vec::new(),
            defeated: None,
        }
    }

    pub fn damage_on_player(&self) -> f64 {
        self.rounds.iter().map(|round| round.damage_on_player).sum()
    }

    pub fn damage_on_enemy(&self) -> f64 {
        self.rounds.iter().map(|round| round.damage_on_enemy).sum()
    }

    pub fn took_place(&self) -> bool {
        !self.rounds.is_empty()
    }
}

/// Resolves a battle between two composed profiles.
pub trait BattleResolver {
    fn resolve(&self, player: &BattleStatistics, enemy: &BattleStatistics) -> BattleOutcome;
}

/// Round-based resolver.
///
/// Each round both sides strike simultaneously:
/// `damage on X = Y.multiplier * (Y.attack - X.defence) / X.reducer`, floored
/// at zero. A side that cannot be attacked takes no damage; when exactly one
/// side is immune the other is defeated in a single round. A battle still
/// undecided after [`RoundResolver::MAX_ROUNDS`] ends in a stalemate.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundResolver;

impl RoundResolver {
    pub const MAX_ROUNDS: usize = 1_000;

    fn damage(attacker: &BattleStatistics, defender: &BattleStatistics) -> f64 {
        if !defender.can_be_attacked {
            return 0.0;
        }
        let raw = attacker.damage_multiplier * (attacker.attack - defender.defence)
            / defender.damage_reducer;
        if raw.is_finite() { raw.max(0.0) } else { 0.0 }
    }
}

impl BattleResolver for RoundResolver {
    fn resolve(&self, player: &BattleStatistics, enemy: &BattleStatistics) -> BattleOutcome {
        if !player.can_attack || !enemy.can_attack {
            return BattleOutcome::skipped();
        }

        match (player.can_be_attacked, enemy.can_be_attacked) {
            (false, false) => return BattleOutcome::skipped(),
            (false, true) => {
                return BattleOutcome {
                    rounds: vec![BattleRound {
                        damage_on_player: 0.0,
                        damage_on_enemy: enemy.health.max(0.0),
                    }],
                    defeated: Some(Side::Enemy),
                };
            }
            (true, false) => {
                return BattleOutcome {
                    rounds: vec![BattleRound {
                        damage_on_player: player.health.max(0.0),
                        damage_on_enemy: 0.0,
                    }],
                    defeated: Some(Side::Player),
                };
            }
            (true, true) => {}
        }

        let on_player = Self::damage(enemy, player);
        let on_enemy = Self::damage(player, enemy);
        let mut player_health = player.health;
        let mut enemy_health = enemy.health;
        let mut rounds = Vec::new();

        if on_player <= 0.0 && on_enemy <= 0.0 {
            return BattleOutcome::skipped();
        }

        while player_health > 0.0 && enemy_health > 0.0 && rounds.len() < Self::MAX_ROUNDS {
            player_health -= on_player;
            enemy_health -= on_enemy;
            rounds.push(BattleRound {
                damage_on_player: on_player,
                damage_on_enemy: on_enemy,
            });
        }

        // A simultaneous knockout counts against the player.
        let defeated = if player_health <= 0.0 {
            Some(Side::Player)
        } else if enemy_health <= 0.0 {
            Some(Side::Enemy)
        } else {
            None
        };

        BattleOutcome { rounds, defeated }
    }
}
