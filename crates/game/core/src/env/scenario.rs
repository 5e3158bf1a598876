use crate::config::GameConfig;
use crate::goal::GoalSpec;
use crate::state::{ItemKind, Position};

/// Everything needed to lay out a dungeon at the start of a session.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSpec {
    pub entities: Vec<InitialEntitySpec>,
    /// Win condition; a scenario without one can never be won.
    #[cfg_attr(feature = "serde", serde(default))]
    pub goal: Option<GoalSpec>,
}

/// Blueprint describing an entity that exists when the scenario starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitialEntitySpec {
    pub position: Position,
    pub kind: InitialEntityKind,
}

impl InitialEntitySpec {
    pub const fn new(position: Position, kind: InitialEntityKind) -> Self {
        Self { position, kind }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialEntityKind {
    Player,
    Wall,
    Exit,
    Boulder,
    Switch,
    Door { key: u32 },
    Item(ItemTemplate),
    ZombieToast,
    Mercenary,
}

/// Collectible as written in a scenario; tunable numbers come from
/// [`GameConfig`] when the item is spawned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemTemplate {
    Treasure,
    Key { number: u32 },
    InvincibilityPotion,
    InvisibilityPotion,
    Bomb,
    Sword,
    Bow,
    Shield,
}

impl ItemTemplate {
    pub fn instantiate(self, config: &GameConfig) -> ItemKind {
        match self {
            ItemTemplate::Treasure => ItemKind::Treasure,
            ItemTemplate::Key { number } => ItemKind::Key { number },
            ItemTemplate::InvincibilityPotion => ItemKind::InvincibilityPotion {
                duration: config.invincibility_potion_duration,
            },
            ItemTemplate::InvisibilityPotion => ItemKind::InvisibilityPotion {
                duration: config.invisibility_potion_duration,
            },
            ItemTemplate::Bomb => ItemKind::Bomb,
            ItemTemplate::Sword => ItemKind::Sword {
                attack: config.sword_attack,
                durability: config.sword_durability,
            },
            ItemTemplate::Bow => ItemKind::Bow {
                durability: config.bow_durability,
            },
            ItemTemplate::Shield => ItemKind::Shield {
                defence: config.shield_defence,
                durability: config.shield_durability,
            },
        }
    }
}
