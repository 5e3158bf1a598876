use crate::combat::BattleStatistics;
use crate::config::GameConfig;

/// Bribable enemy state.
///
/// Allegiance only ever flips from hostile to allied, and
/// `adjacent_to_player` only ever flips from false to true.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mercenary {
    pub bribe_amount: u32,
    pub bribe_radius: u32,
    ally_attack: f64,
    ally_defence: f64,
    allied: bool,
    adjacent_to_player: bool,
}

impl Mercenary {
    pub const fn new(
        bribe_amount: u32,
        bribe_radius: u32,
        ally_attack: f64,
        ally_defence: f64,
    ) -> Self {
        Self {
            bribe_amount,
            bribe_radius,
            ally_attack,
            ally_defence,
            allied: false,
            adjacent_to_player: false,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.bribe_amount,
            config.bribe_radius,
            config.ally_attack,
            config.ally_defence,
        )
    }

    pub fn is_allied(&self) -> bool {
        self.allied
    }

    /// True once the mercenary has been next to the player while allied.
    pub fn is_adjacent_to_player(&self) -> bool {
        self.adjacent_to_player
    }

    /// Profile an ally lends to the player: zero health so it never changes
    /// the player's hit points, configured attack and defence, neutral
    /// multipliers.
    pub fn ally_profile(&self) -> BattleStatistics {
        BattleStatistics::new(0.0, self.ally_attack, self.ally_defence, 1.0, 1.0)
    }

    pub(crate) fn ally(&mut self) {
        self.allied = true;
    }

    pub(crate) fn mark_adjacent(&mut self) {
        self.adjacent_to_player = true;
    }
}
