use dungeon_core::{
    ConfigError, Direction, EntityId, ErrorSeverity, GameConfig, GameError, GoalError, GoalSpec,
    InitialEntityKind, InitialEntitySpec, ItemClass, ItemKind, ItemTemplate, PlayerMode, Position,
    ScenarioSpec, Side, Tick,
};
use dungeon_runtime::{PlayerAction, SetupError, Simulation, TickChanges};

use InitialEntityKind::*;
use PlayerAction::{Interact, Move, UseItem, Wait};

fn scenario(entities: &[(i32, i32, InitialEntityKind)], goal: Option<GoalSpec>) -> ScenarioSpec {
    ScenarioSpec {
        entities: entities
            .iter()
            .map(|(x, y, kind)| InitialEntitySpec::new(Position::new(*x, *y), kind.clone()))
            .collect(),
        goal,
    }
}

fn simulation(entities: &[(i32, i32, InitialEntityKind)], goal: Option<GoalSpec>) -> Simulation {
    Simulation::from_scenario(GameConfig::default(), &scenario(entities, goal), 7)
        .expect("scenario should be valid")
}

fn player_position(sim: &Simulation) -> Position {
    sim.player().expect("player should be alive").position()
}

/// Walls above and below the row `y = 0` for `x` in `from..=to`.
fn corridor(from: i32, to: i32) -> Vec<(i32, i32, InitialEntityKind)> {
    (from..=to)
        .flat_map(|x| [(x, -1, Wall), (x, 1, Wall)])
        .collect()
}

#[test]
fn treasure_pickup_completes_goal() {
    let mut sim = simulation(
        &[(0, 0, Player), (1, 0, Item(ItemTemplate::Treasure))],
        Some(GoalSpec::leaf("treasure")),
    );
    assert!(!sim.goal_achieved());

    let report = sim.tick(Move(Direction::Right));

    assert_eq!(report.tick, Tick(0));
    assert!(report.contains(
        TickChanges::PLAYER_MOVED | TickChanges::INVENTORY | TickChanges::GOAL_ACHIEVED
    ));
    assert!(sim.goal_achieved());
    assert_eq!(sim.describe_goal(), "");
    assert!(sim.items().is_empty());
    assert_eq!(sim.current_tick(), Tick(1));
    assert!(sim.is_over());
}

#[test]
fn remaining_goals_shrink_as_leaves_complete() {
    let mut sim = simulation(
        &[
            (0, 0, Player),
            (2, 0, Exit),
            (0, 1, Item(ItemTemplate::Treasure)),
        ],
        Some(GoalSpec::composite(
            "AND",
            GoalSpec::leaf("exit"),
            GoalSpec::leaf("treasure"),
        )),
    );
    assert_eq!(sim.describe_goal(), "(:exit AND :treasure)");

    sim.tick(Move(Direction::Down));
    assert_eq!(sim.describe_goal(), "(:exit AND )");

    sim.tick(Move(Direction::Up));
    sim.tick(Move(Direction::Right));
    let report = sim.tick(Move(Direction::Right));

    assert!(report.contains(TickChanges::GOAL_ACHIEVED));
    assert_eq!(sim.describe_goal(), "");
}

#[test]
fn walls_block_but_turn_the_player() {
    let mut sim = simulation(&[(0, 0, Player), (1, 0, Wall)], None);

    let report = sim.tick(Move(Direction::Right));

    assert!(!report.contains(TickChanges::PLAYER_MOVED));
    assert_eq!(player_position(&sim), Position::new(0, 0));
    assert_eq!(sim.player().map(|p| p.facing()), Some(Direction::Right));
}

#[test]
fn door_opens_with_matching_key_and_stays_open() {
    let mut sim = simulation(
        &[
            (0, 0, Player),
            (0, 1, Item(ItemTemplate::Key { number: 1 })),
            (1, 0, Door { key: 1 }),
        ],
        None,
    );

    sim.tick(Move(Direction::Right));
    assert_eq!(player_position(&sim), Position::new(0, 0));

    sim.tick(Move(Direction::Down));
    sim.tick(Move(Direction::Up));
    let report = sim.tick(Move(Direction::Right));

    assert!(report.contains(TickChanges::INVENTORY | TickChanges::MAP | TickChanges::PLAYER_MOVED));
    assert_eq!(player_position(&sim), Position::new(1, 0));
    assert_eq!(sim.player().map(|p| p.count(ItemClass::Key)), Some(0));
    assert!(sim.map().door(Position::new(1, 0)).is_some_and(|door| door.open));

    sim.tick(Move(Direction::Left));
    sim.tick(Move(Direction::Right));
    assert_eq!(player_position(&sim), Position::new(1, 0));
}

#[test]
fn wrong_key_leaves_door_locked_and_key_held() {
    let mut sim = simulation(
        &[
            (0, 0, Player),
            (0, 1, Item(ItemTemplate::Key { number: 2 })),
            (1, 0, Door { key: 1 }),
        ],
        None,
    );

    sim.tick(Move(Direction::Down));
    sim.tick(Move(Direction::Up));
    sim.tick(Move(Direction::Right));

    assert_eq!(player_position(&sim), Position::new(0, 0));
    assert_eq!(sim.player().map(|p| p.count(ItemClass::Key)), Some(1));
}

#[test]
fn pushing_boulder_onto_switch_completes_boulders_goal() {
    let mut sim = simulation(
        &[(0, 0, Player), (1, 0, Boulder), (2, 0, Switch)],
        Some(GoalSpec::leaf("boulders")),
    );
    assert_eq!(sim.describe_goal(), ":boulders");

    let report = sim.tick(Move(Direction::Right));

    assert!(report.contains(
        TickChanges::MAP | TickChanges::PLAYER_MOVED | TickChanges::GOAL_ACHIEVED
    ));
    assert_eq!(player_position(&sim), Position::new(1, 0));
    assert!(sim.map().has_boulder(Position::new(2, 0)));
}

#[test]
fn boulders_do_not_move_into_walls_or_items() {
    let mut sim = simulation(
        &[
            (0, 0, Player),
            (1, 0, Boulder),
            (2, 0, Wall),
            (0, 1, Boulder),
            (0, 2, Item(ItemTemplate::Treasure)),
        ],
        None,
    );

    let report = sim.tick(Move(Direction::Right));
    assert!(!report.contains(TickChanges::PLAYER_MOVED));

    let report = sim.tick(Move(Direction::Down));
    assert!(!report.contains(TickChanges::PLAYER_MOVED));

    assert_eq!(player_position(&sim), Position::new(0, 0));
    assert!(sim.map().has_boulder(Position::new(1, 0)));
    assert!(sim.map().has_boulder(Position::new(0, 1)));
}

/// The zombie sits at the dead end of a corridor, so every move it makes is
/// forced and the test does not depend on the seed.
#[test]
fn invincible_player_defeats_cornered_zombie_in_one_round() {
    let mut entities = vec![
        (0, 0, Player),
        (1, 0, Item(ItemTemplate::InvincibilityPotion)),
        (3, 0, ZombieToast),
        (4, 0, Wall),
        (-1, 0, Wall),
    ];
    entities.extend(corridor(-1, 4));
    let mut sim = simulation(&entities, Some(GoalSpec::leaf("enemies")));
    let potion = EntityId(2);

    sim.tick(Move(Direction::Right));
    assert_eq!(sim.enemies()[0].position(), Position::new(2, 0));

    let report = sim.tick(UseItem(potion));
    assert!(report.contains(TickChanges::BUFFS));
    assert_eq!(sim.player().map(|p| p.mode()), Some(PlayerMode::Invincible));
    assert_eq!(sim.enemies()[0].position(), Position::new(3, 0));

    sim.tick(Move(Direction::Right));
    assert_eq!(sim.enemies()[0].position(), Position::new(3, 0));

    let report = sim.tick(Move(Direction::Right));

    assert!(report.contains(TickChanges::BATTLE | TickChanges::ENEMY_DEFEATED));
    assert_eq!(report.battles.len(), 1);
    let outcome = &report.battles[0].outcome;
    assert_eq!(outcome.rounds.len(), 1);
    assert_eq!(outcome.defeated, Some(Side::Enemy));
    assert_eq!(outcome.damage_on_player(), 0.0);

    assert!(sim.enemies().is_empty());
    assert_eq!(sim.player().map(|p| p.stats().health), Some(5.0));
    assert_eq!(sim.player().map(|p| p.defeated_enemy_count()), Some(1));
    assert!(sim.goal_achieved());
}

#[test]
fn invisible_player_never_battles() {
    let mut entities = vec![
        (0, 0, Player),
        (1, 0, Item(ItemTemplate::InvisibilityPotion)),
        (3, 0, ZombieToast),
        (4, 0, Wall),
        (-1, 0, Wall),
    ];
    entities.extend(corridor(-1, 4));
    let mut sim = simulation(&entities, None);

    sim.tick(Move(Direction::Right));
    sim.tick(UseItem(EntityId(2)));
    assert_eq!(sim.player().map(|p| p.mode()), Some(PlayerMode::Invisible));

    for _ in 2..6 {
        let report = sim.tick(Wait);
        assert!(!report.contains(TickChanges::BATTLE));
        assert_eq!(sim.enemies().len(), 1);
    }

    // Drunk on tick 1 with the default duration of 5.
    let report = sim.tick(Wait);
    assert_eq!(report.tick, Tick(6));
    assert!(report.contains(TickChanges::BUFFS));
    assert_eq!(sim.player().map(|p| p.mode()), Some(PlayerMode::Base));
}

#[test]
fn mercenary_outlasts_unarmed_player() {
    let mut sim = simulation(&[(0, 0, Player), (2, 0, Mercenary)], None);

    sim.tick(Wait);
    assert_eq!(sim.enemies()[0].position(), Position::new(1, 0));

    let report = sim.tick(Wait);

    assert!(report.contains(TickChanges::BATTLE | TickChanges::PLAYER_DEFEATED));
    let outcome = &report.battles[0].outcome;
    // 0.5 damage per round against 5 health; the enemy also hits zero on the
    // tenth round, which counts against the player.
    assert_eq!(outcome.rounds.len(), 10);
    assert_eq!(outcome.defeated, Some(Side::Player));
    assert!(sim.player().is_none());
    assert!(sim.is_over());
    assert!(!sim.goal_achieved());

    let report = sim.tick(Move(Direction::Left));
    assert!(report.is_quiet());
}

#[test]
fn sword_turns_the_fight_and_loses_durability() {
    let mut sim = simulation(
        &[
            (0, 0, Player),
            (1, 0, Item(ItemTemplate::Sword)),
            (3, 0, Mercenary),
        ],
        None,
    );

    sim.tick(Move(Direction::Right));
    let report = sim.tick(Wait);

    assert!(report.contains(
        TickChanges::BATTLE | TickChanges::ENEMY_DEFEATED | TickChanges::INVENTORY
    ));
    let outcome = &report.battles[0].outcome;
    assert_eq!(outcome.rounds.len(), 8);
    assert_eq!(outcome.defeated, Some(Side::Enemy));

    let player = sim.player().expect("player survives");
    assert!((player.stats().health - 1.0).abs() < 1e-9);
    let sword = player.inventory().first(ItemClass::Sword).map(|item| item.kind);
    assert!(matches!(sword, Some(ItemKind::Sword { durability: 4, .. })));
}

#[test]
fn bribed_mercenary_joins_and_trails_the_player() {
    let mut sim = simulation(
        &[
            (0, 0, Player),
            (1, 0, Item(ItemTemplate::Treasure)),
            (4, 0, Mercenary),
        ],
        None,
    );
    let mercenary = EntityId(3);

    sim.tick(Move(Direction::Right));
    sim.tick(Wait);
    assert_eq!(sim.enemy(mercenary).map(|e| e.position()), Some(Position::new(2, 0)));

    let report = sim.tick(Interact(mercenary));

    assert!(report.contains(TickChanges::ALLEGIANCE | TickChanges::INVENTORY));
    assert!(!report.contains(TickChanges::BATTLE));
    assert!(sim.enemy(mercenary).is_some_and(|e| e.is_allied()));
    let player = sim.player().expect("player alive");
    assert_eq!(player.count(ItemClass::Treasure), 0);
    assert_eq!(player.collected_treasure_count(), 1);

    // The follower takes the tile the player just left.
    sim.tick(Move(Direction::Down));
    assert_eq!(sim.enemy(mercenary).map(|e| e.position()), Some(Position::new(1, 0)));
}

#[test]
fn bribe_out_of_radius_is_rejected() {
    let mut sim = simulation(
        &[
            (0, 0, Player),
            (1, 0, Item(ItemTemplate::Treasure)),
            (6, 0, Mercenary),
        ],
        None,
    );

    sim.tick(Move(Direction::Right));
    let report = sim.tick(Interact(EntityId(3)));

    assert!(!report.contains(TickChanges::ALLEGIANCE));
    assert!(sim.enemy(EntityId(3)).is_some_and(|e| e.is_hostile()));
    assert_eq!(sim.player().map(|p| p.count(ItemClass::Treasure)), Some(1));
}

#[test]
fn bomb_next_to_active_switch_clears_the_area() {
    let mut sim = simulation(
        &[
            (0, 0, Player),
            (1, 0, Item(ItemTemplate::Bomb)),
            (2, 0, Switch),
            (2, 0, Boulder),
            (2, -1, ZombieToast),
            (1, -1, Wall),
            (3, -1, Wall),
            (2, -2, Wall),
            (0, 1, Wall),
            (3, 1, Wall),
        ],
        None,
    );

    sim.tick(Move(Direction::Right));
    assert_eq!(sim.enemies()[0].position(), Position::new(2, -1));

    let report = sim.tick(UseItem(EntityId(2)));

    assert!(report.contains(
        TickChanges::EXPLOSION
            | TickChanges::MAP
            | TickChanges::INVENTORY
            | TickChanges::ENEMY_DEFEATED
    ));
    assert!(sim.enemies().is_empty());
    assert!(!sim.map().is_wall(Position::new(1, -1)));
    assert!(!sim.map().is_wall(Position::new(0, 1)));
    assert!(!sim.map().has_boulder(Position::new(2, 0)));
    assert!(sim.map().is_wall(Position::new(3, -1)));
    assert!(sim.map().is_wall(Position::new(3, 1)));
    assert!(sim.player().is_some());
    assert_eq!(sim.player().map(|p| p.defeated_enemy_count()), Some(0));
}

#[test]
fn same_seed_replays_identically() {
    let entities = [
        (0, 0, Player),
        (3, 3, ZombieToast),
        (5, 1, ZombieToast),
        (6, 6, Wall),
    ];
    let spec = scenario(&entities, None);
    let mut first = Simulation::from_scenario(GameConfig::default(), &spec, 42).unwrap();
    let mut second = Simulation::from_scenario(GameConfig::default(), &spec, 42).unwrap();

    for _ in 0..20 {
        let a = first.tick(Wait);
        let b = second.tick(Wait);
        assert_eq!(a, b);
        let positions = |sim: &Simulation| -> Vec<Position> {
            sim.enemies().iter().map(|enemy| enemy.position()).collect()
        };
        assert_eq!(positions(&first), positions(&second));
    }
}

#[test]
fn scenario_without_goal_is_never_won() {
    let mut sim = simulation(&[(0, 0, Player), (1, 0, Exit)], None);
    sim.tick(Move(Direction::Right));

    assert!(!sim.goal_achieved());
    assert_eq!(sim.describe_goal(), "");
    assert!(!sim.is_over());
}

#[test]
fn goals_fail_without_a_player() {
    let sim = simulation(&[(1, 0, Exit)], Some(GoalSpec::leaf("boulders")));

    // No switches would make `:boulders` vacuously true, but there is no
    // player to have achieved it.
    assert!(!sim.goal_achieved());
    assert_eq!(sim.describe_goal(), ":boulders");
}

#[test]
fn second_player_is_rejected_with_context() {
    let spec = scenario(&[(0, 0, Player), (3, 3, Player)], None);

    let err = Simulation::from_scenario(GameConfig::default(), &spec, 0)
        .err()
        .expect("duplicate player must fail");

    assert_eq!(err.error_code(), "SETUP_DUPLICATE_PLAYER");
    assert_eq!(err.severity(), ErrorSeverity::Validation);
    let context = err.context().expect("context is attached");
    assert_eq!(context.entity, Some(EntityId(2)));
    assert_eq!(context.position, Some(Position::new(3, 3)));
}

#[test]
fn malformed_goal_and_config_are_rejected() {
    let spec = scenario(&[(0, 0, Player)], Some(GoalSpec::leaf("gems")));
    let err = Simulation::from_scenario(GameConfig::default(), &spec, 0)
        .err()
        .expect("unknown goal must fail");
    assert_eq!(err, SetupError::Goal(GoalError::UnknownGoal("gems".into())));

    let config = GameConfig {
        sword_durability: 0,
        ..GameConfig::default()
    };
    let spec = scenario(&[(0, 0, Player)], None);
    let err = Simulation::from_scenario(config, &spec, 0)
        .err()
        .expect("invalid config must fail");
    assert_eq!(
        err,
        SetupError::Config(ConfigError::ZeroDurability {
            field: "sword_durability"
        })
    );
}
