use crate::error::{ErrorSeverity, GameError};

/// Tunable parameters of the rules.
///
/// Every field falls back to its default when absent from a data file, so a
/// partial config only needs to name what it changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub player_health: f64,
    pub player_attack: f64,

    pub zombie_health: f64,
    pub zombie_attack: f64,

    pub mercenary_health: f64,
    pub mercenary_attack: f64,
    /// Treasure a mercenary demands before switching sides.
    pub bribe_amount: u32,
    /// Maximum Manhattan distance between player and mercenary for a bribe.
    pub bribe_radius: u32,
    /// Attack an allied mercenary lends to the player in battle.
    pub ally_attack: f64,
    /// Defence an allied mercenary lends to the player in battle.
    pub ally_defence: f64,

    pub invincibility_potion_duration: u64,
    pub invisibility_potion_duration: u64,

    pub sword_attack: f64,
    pub sword_durability: u32,
    pub bow_durability: u32,
    pub shield_defence: f64,
    pub shield_durability: u32,
    /// Blast half-width of a placed bomb; a radius of 1 clears a 3x3 square.
    pub bomb_radius: u32,

    /// Treasure required by the `:treasure` goal.
    pub treasure_goal: u32,
    /// Defeated enemies required by the `:enemies` goal.
    pub enemy_goal: u32,
}

impl GameConfig {
    pub const DEFAULT_PLAYER_HEALTH: f64 = 5.0;
    pub const DEFAULT_PLAYER_ATTACK: f64 = 5.0;
    pub const DEFAULT_ZOMBIE_HEALTH: f64 = 5.0;
    pub const DEFAULT_ZOMBIE_ATTACK: f64 = 6.0;
    pub const DEFAULT_MERCENARY_HEALTH: f64 = 10.0;
    pub const DEFAULT_MERCENARY_ATTACK: f64 = 5.0;
    pub const DEFAULT_BRIBE_AMOUNT: u32 = 1;
    pub const DEFAULT_BRIBE_RADIUS: u32 = 1;
    pub const DEFAULT_ALLY_ATTACK: f64 = 3.0;
    pub const DEFAULT_ALLY_DEFENCE: f64 = 2.0;
    pub const DEFAULT_POTION_DURATION: u64 = 5;
    pub const DEFAULT_SWORD_ATTACK: f64 = 2.0;
    pub const DEFAULT_SHIELD_DEFENCE: f64 = 2.0;
    pub const DEFAULT_DURABILITY: u32 = 5;
    pub const DEFAULT_BOMB_RADIUS: u32 = 1;

    pub fn new() -> Self {
        Self {
            player_health: Self::DEFAULT_PLAYER_HEALTH,
            player_attack: Self::DEFAULT_PLAYER_ATTACK,
            zombie_health: Self::DEFAULT_ZOMBIE_HEALTH,
            zombie_attack: Self::DEFAULT_ZOMBIE_ATTACK,
            mercenary_health: Self::DEFAULT_MERCENARY_HEALTH,
            mercenary_attack: Self::DEFAULT_MERCENARY_ATTACK,
            bribe_amount: Self::DEFAULT_BRIBE_AMOUNT,
            bribe_radius: Self::DEFAULT_BRIBE_RADIUS,
            ally_attack: Self::DEFAULT_ALLY_ATTACK,
            ally_defence: Self::DEFAULT_ALLY_DEFENCE,
            invincibility_potion_duration: Self::DEFAULT_POTION_DURATION,
            invisibility_potion_duration: Self::DEFAULT_POTION_DURATION,
            sword_attack: Self::DEFAULT_SWORD_ATTACK,
            sword_durability: Self::DEFAULT_DURABILITY,
            bow_durability: Self::DEFAULT_DURABILITY,
            shield_defence: Self::DEFAULT_SHIELD_DEFENCE,
            shield_durability: Self::DEFAULT_DURABILITY,
            bomb_radius: Self::DEFAULT_BOMB_RADIUS,
            treasure_goal: 1,
            enemy_goal: 1,
        }
    }

    /// Rejects values the rules cannot run with.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let stats = [
            ("player_health", self.player_health),
            ("player_attack", self.player_attack),
            ("zombie_health", self.zombie_health),
            ("zombie_attack", self.zombie_attack),
            ("mercenary_health", self.mercenary_health),
            ("mercenary_attack", self.mercenary_attack),
            ("ally_attack", self.ally_attack),
            ("ally_defence", self.ally_defence),
            ("sword_attack", self.sword_attack),
            ("shield_defence", self.shield_defence),
        ];
        for (field, value) in stats {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let durabilities = [
            ("sword_durability", self.sword_durability),
            ("bow_durability", self.bow_durability),
            ("shield_durability", self.shield_durability),
        ];
        for (field, value) in durabilities {
            if value == 0 {
                return Err(ConfigError::ZeroDurability { field });
            }
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Invalid tunable in a [`GameConfig`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be at least 1")]
    ZeroDurability { field: &'static str },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonFinite { .. } => "CONFIG_NON_FINITE",
            Self::Negative { .. } => "CONFIG_NEGATIVE",
            Self::ZeroDurability { .. } => "CONFIG_ZERO_DURABILITY",
        }
    }
}
