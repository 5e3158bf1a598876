//! Battle statistics and buff composition.
//!
//! A [`BattleStatistics`] value is never edited in place while a buff is
//! active. Applying a buff always yields a new value, so a buff cannot leak
//! into the next tick through a stored profile.

/// Combat profile of a single participant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleStatistics {
    pub health: f64,
    pub attack: f64,
    pub defence: f64,
    /// Multiplies outgoing damage.
    pub damage_multiplier: f64,
    /// Divides incoming damage.
    pub damage_reducer: f64,
    /// False while the owner is immune to damage.
    pub can_be_attacked: bool,
    /// False when the owner cannot take part in a battle at all.
    pub can_attack: bool,
}

impl BattleStatistics {
    pub const DEFAULT_DAMAGE_MULTIPLIER: f64 = 1.0;
    pub const DEFAULT_PLAYER_DAMAGE_REDUCER: f64 = 10.0;
    pub const DEFAULT_ENEMY_DAMAGE_REDUCER: f64 = 5.0;

    /// The identity buff: composing with it changes nothing.
    pub const NEUTRAL: Self = Self {
        health: 0.0,
        attack: 0.0,
        defence: 0.0,
        damage_multiplier: 1.0,
        damage_reducer: 1.0,
        can_be_attacked: true,
        can_attack: true,
    };

    pub const fn new(
        health: f64,
        attack: f64,
        defence: f64,
        damage_multiplier: f64,
        damage_reducer: f64,
    ) -> Self {
        Self {
            health,
            attack,
            defence,
            damage_multiplier,
            damage_reducer,
            can_be_attacked: true,
            can_attack: true,
        }
    }

    /// Base profile for the player.
    pub const fn player(health: f64, attack: f64) -> Self {
        Self::new(
            health,
            attack,
            0.0,
            Self::DEFAULT_DAMAGE_MULTIPLIER,
            Self::DEFAULT_PLAYER_DAMAGE_REDUCER,
        )
    }

    /// Base profile for an enemy.
    pub const fn enemy(health: f64, attack: f64) -> Self {
        Self::new(
            health,
            attack,
            0.0,
            Self::DEFAULT_DAMAGE_MULTIPLIER,
            Self::DEFAULT_ENEMY_DAMAGE_REDUCER,
        )
    }

    /// Buff granting immunity to damage.
    pub const fn invincibility() -> Self {
        Self {
            can_be_attacked: false,
            ..Self::NEUTRAL
        }
    }

    /// Buff that removes the owner from combat entirely.
    pub const fn invisibility() -> Self {
        Self {
            can_attack: false,
            ..Self::NEUTRAL
        }
    }

    /// Returns a copy with `health` replaced.
    #[must_use]
    pub const fn with_health(self, health: f64) -> Self {
        Self { health, ..self }
    }

    /// Composes `buff` onto `self`.
    ///
    /// Health, attack and defence add; the multiplier and reducer multiply;
    /// each flag stays true only if both operands allow it.
    #[must_use]
    pub fn compose(self, buff: Self) -> Self {
        Self {
            health: self.health + buff.health,
            attack: self.attack + buff.attack,
            defence: self.defence + buff.defence,
            damage_multiplier: self.damage_multiplier * buff.damage_multiplier,
            damage_reducer: self.damage_reducer * buff.damage_reducer,
            can_be_attacked: self.can_be_attacked && buff.can_be_attacked,
            can_attack: self.can_attack && buff.can_attack,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

impl Default for BattleStatistics {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Free-function form of [`BattleStatistics::compose`].
pub fn compose(base: BattleStatistics, buff: BattleStatistics) -> BattleStatistics {
    base.compose(buff)
}
