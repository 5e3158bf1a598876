//! Building a [`Simulation`] from a scenario.

use dungeon_core::{
    BattleResolver, Enemy, EntityId, ErrorContext, GameConfig, Goal, InitialEntityKind, ItemKind,
    PcgRng, Player, RoundResolver, ScenarioSpec, Tick,
};
use tracing::{info, warn};

use super::{GroundItem, Simulation};
use crate::error::SetupError;
use crate::map::GridMap;

impl Simulation<RoundResolver> {
    /// Lays out `scenario` with the default round-based battle resolver.
    ///
    /// Entities receive ids in file order starting at 1; the player always
    /// gets [`EntityId::PLAYER`]. Enemies act in that same order every tick.
    ///
    /// # Errors
    ///
    /// See [`Simulation::with_resolver`].
    pub fn from_scenario(
        config: GameConfig,
        scenario: &ScenarioSpec,
        seed: u64,
    ) -> Result<Self, SetupError> {
        Self::with_resolver(config, scenario, seed, RoundResolver)
    }
}

impl<R: BattleResolver> Simulation<R> {
    /// Lays out `scenario`, resolving battles with `resolver`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] when the config does not validate, the goal
    /// tree is malformed, or more than one player is placed.
    pub fn with_resolver(
        config: GameConfig,
        scenario: &ScenarioSpec,
        seed: u64,
        resolver: R,
    ) -> Result<Self, SetupError> {
        config.validate()?;

        let goal = match &scenario.goal {
            Some(spec) => Some(Goal::from_spec(spec, &config)?),
            None => {
                warn!("scenario has no goal and can never be won");
                None
            }
        };

        let mut map = GridMap::new();
        let mut player: Option<Player> = None;
        let mut enemies = Vec::new();
        let mut items = Vec::new();

        for (index, entity) in scenario.entities.iter().enumerate() {
            let id = EntityId(index as u32 + 1);
            let position = entity.position;
            map.include(position);

            match &entity.kind {
                InitialEntityKind::Player => {
                    if player.is_some() {
                        return Err(SetupError::DuplicatePlayer {
                            context: ErrorContext::new()
                                .with_entity(id)
                                .with_position(position)
                                .with_message("a scenario holds exactly one player"),
                        });
                    }
                    player = Some(Player::from_config(position, &config));
                }
                InitialEntityKind::Wall => map.add_wall(position),
                InitialEntityKind::Exit => map.add_exit(position),
                InitialEntityKind::Boulder => map.add_boulder(position),
                InitialEntityKind::Switch => map.add_switch(position),
                InitialEntityKind::Door { key } => map.add_door(position, *key),
                InitialEntityKind::Item(template) => items.push(GroundItem {
                    id,
                    position,
                    kind: template.instantiate(&config),
                }),
                InitialEntityKind::ZombieToast => {
                    enemies.push(Enemy::zombie_toast(id, position, &config));
                }
                InitialEntityKind::Mercenary => {
                    enemies.push(Enemy::mercenary(id, position, &config));
                }
            }
        }

        for (position, door) in map.doors() {
            let has_key = items.iter().any(|item: &GroundItem| {
                matches!(item.kind, ItemKind::Key { number } if number == door.key)
            });
            if !has_key {
                warn!(%position, key = door.key, "door has no matching key in the scenario");
            }
        }
        if player.is_none() {
            warn!("scenario places no player; goals cannot be achieved");
        }

        info!(
            seed,
            enemies = enemies.len(),
            items = items.len(),
            "simulation ready"
        );

        Ok(Self {
            config,
            seed,
            tick: Tick::ZERO,
            map,
            player,
            enemies,
            items,
            goal,
            resolver,
            rng: PcgRng,
        })
    }
}
