//! Per-tick change reports.

use bitflags::bitflags;
use dungeon_core::{BattleOutcome, EntityId, Tick};

bitflags! {
    /// Tracks which parts of the world changed during a tick.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct TickChanges: u16 {
        const PLAYER_MOVED    = 1 << 0;
        const INVENTORY       = 1 << 1;
        const BUFFS           = 1 << 2;
        const ENEMIES_MOVED   = 1 << 3;
        const BATTLE          = 1 << 4;
        const ENEMY_DEFEATED  = 1 << 5;
        const PLAYER_DEFEATED = 1 << 6;
        const ALLEGIANCE      = 1 << 7;
        const MAP             = 1 << 8;
        const EXPLOSION       = 1 << 9;
        const GOAL_ACHIEVED   = 1 << 10;
    }
}

/// One battle fought during a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleRecord {
    pub enemy: EntityId,
    pub outcome: BattleOutcome,
}

/// Everything a tick did, in the order it happened.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// The tick that was processed.
    pub tick: Tick,
    pub changes: TickChanges,
    pub battles: Vec<BattleRecord>,
}

impl TickReport {
    pub fn new(tick: Tick) -> Self {
        Self {
            tick,
            changes: TickChanges::empty(),
            battles: Vec::new(),
        }
    }

    /// True when nothing observable happened.
    pub fn is_quiet(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn contains(&self, changes: TickChanges) -> bool {
        self.changes.contains(changes)
    }
}
