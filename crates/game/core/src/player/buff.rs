//! Timed potion buffs.
//!
//! The player is always in exactly one [`PlayerMode`]. Consumed potions queue
//! up as [`PendingEffect`]s and run back to back: when the active effect
//! expires the next queued effect starts on the same tick, with no Base tick
//! in between.
//!
//! # Tick-based Duration
//!
//! An effect started at tick `t` with duration `d` stores `expires_at = t + d`
//! and is active for ticks `t..t + d`. At `expires_at` the queue is consulted
//! again.

use std::collections::VecDeque;

use crate::combat::BattleStatistics;
use crate::state::Tick;

/// Potion effect kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectKind {
    Invincibility,
    Invisibility,
}

/// A consumed potion waiting for its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingEffect {
    pub kind: EffectKind,
    /// Number of ticks the effect lasts once started.
    pub duration: u64,
}

impl PendingEffect {
    pub const fn new(kind: EffectKind, duration: u64) -> Self {
        Self { kind, duration }
    }
}

/// Current buff mode of the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PlayerMode {
    #[default]
    Base,
    Invincible,
    Invisible,
}

impl From<EffectKind> for PlayerMode {
    fn from(kind: EffectKind) -> Self {
        match kind {
            EffectKind::Invincibility => PlayerMode::Invincible,
            EffectKind::Invisibility => PlayerMode::Invisible,
        }
    }
}

impl PlayerMode {
    /// Buff this mode contributes to the player's battle statistics.
    pub const fn battle_buff(self) -> BattleStatistics {
        match self {
            PlayerMode::Base => BattleStatistics::NEUTRAL,
            PlayerMode::Invincible => BattleStatistics::invincibility(),
            PlayerMode::Invisible => BattleStatistics::invisibility(),
        }
    }
}

/// Buff state machine owned by the player.
///
/// Invariant: `expires_at` is `Some` exactly when `mode != Base`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerBuffState {
    mode: PlayerMode,
    expires_at: Option<Tick>,
    pending: VecDeque<PendingEffect>,
}

impl PlayerBuffState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    /// Tick at which the active effect ends, or `None` in Base mode.
    pub fn expires_at(&self) -> Option<Tick> {
        self.expires_at
    }

    /// Effects queued behind the active one, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &PendingEffect> {
        self.pending.iter()
    }

    pub fn is_invincible(&self) -> bool {
        self.mode == PlayerMode::Invincible
    }

    pub fn is_invisible(&self) -> bool {
        self.mode == PlayerMode::Invisible
    }

    pub fn is_base(&self) -> bool {
        self.mode == PlayerMode::Base
    }

    /// Queues `effect`; starts it immediately when no effect is active.
    pub fn on_potion_consumed(&mut self, effect: PendingEffect, current_tick: Tick) {
        self.pending.push_back(effect);
        if self.is_base() {
            self.advance(current_tick);
        }
    }

    /// Notifies the machine that `current_tick` has begun.
    ///
    /// In Base mode the queue is always re-checked. Otherwise the queue is
    /// consulted once the active effect has reached its expiry tick.
    ///
    /// Expiry is `current_tick >= expires_at` rather than strict equality, so
    /// a driver that skips ticks still ends the effect. Called every tick, the
    /// two agree.
    pub fn on_tick(&mut self, current_tick: Tick) {
        let expired = self
            .expires_at
            .is_none_or(|expires_at| current_tick >= expires_at);
        if self.is_base() || expired {
            self.advance(current_tick);
        }
    }

    /// Starts the next queued effect, or falls back to Base when none is left.
    fn advance(&mut self, current_tick: Tick) {
        match self.pending.pop_front() {
            Some(effect) => {
                self.mode = effect.kind.into();
                self.expires_at = Some(current_tick + effect.duration);
            }
            None => {
                self.mode = PlayerMode::Base;
                self.expires_at = None;
            }
        }
    }
}
