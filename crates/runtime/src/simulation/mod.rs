//! Tick pipeline.
//!
//! Every tick runs the same fixed sequence:
//!
//! 1. the player's action, then the player's overlaps on its new tile
//! 2. the buff state machine advances to the current tick
//! 3. each enemy, in spawn order, picks a strategy, moves and resolves its
//!    overlap with the player
//! 4. the tick counter advances
//!
//! Battles can happen in steps 1 and 3. A defeated player is removed and the
//! rest of the tick still runs without it.

mod combat;
mod setup;

use dungeon_core::{
    BattleResolver, Direction, Enemy, EntityId, GameConfig, Goal, GoalView, Interactable,
    InventoryItem, ItemClass, ItemKind, Overlap, PcgRng, Player, Position, RngOracle,
    RoundResolver, Tick, compute_seed, enemy_overlap, item_overlap,
};
use tracing::{debug, info};

use crate::action::PlayerAction;
use crate::map::{GridMap, in_blast};
use crate::report::{TickChanges, TickReport};

/// Collectible lying on the floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundItem {
    pub id: EntityId,
    pub position: Position,
    pub kind: ItemKind,
}

/// A running dungeon session.
pub struct Simulation<R = RoundResolver> {
    config: GameConfig,
    seed: u64,
    tick: Tick,
    map: GridMap,
    player: Option<Player>,
    /// Spawn order is action order.
    enemies: Vec<Enemy>,
    items: Vec<GroundItem>,
    goal: Option<Goal>,
    resolver: R,
    rng: PcgRng,
}

impl<R> Simulation<R> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The tick the next call to [`Simulation::tick`] will process.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    /// `None` once the player has been defeated (or if none was placed).
    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id() == id)
    }

    pub fn items(&self) -> &[GroundItem] {
        &self.items
    }

    pub fn goal(&self) -> Option<&Goal> {
        self.goal.as_ref()
    }

    /// Whether the win condition currently holds. A scenario without a goal
    /// is never won.
    pub fn goal_achieved(&self) -> bool {
        self.goal.as_ref().is_some_and(|goal| goal.achieved(self))
    }

    /// What is left to do, e.g. `( AND :treasure)`; empty once achieved.
    pub fn describe_goal(&self) -> String {
        self.goal
            .as_ref()
            .map(|goal| goal.describe(self))
            .unwrap_or_default()
    }

    /// True once the player is gone or the goal holds.
    pub fn is_over(&self) -> bool {
        self.player.is_none() || self.goal_achieved()
    }
}

impl<R> GoalView for Simulation<R> {
    fn player_position(&self) -> Option<Position> {
        self.player.as_ref().map(Player::position)
    }

    fn exits(&self) -> Vec<Position> {
        self.map.exits().collect()
    }

    fn collected_treasure(&self) -> u32 {
        self.player
            .as_ref()
            .map_or(0, Player::collected_treasure_count)
    }

    fn defeated_enemies(&self) -> u32 {
        self.player.as_ref().map_or(0, Player::defeated_enemy_count)
    }

    fn all_switches_activated(&self) -> bool {
        self.map.all_switches_active()
    }
}

impl<R: BattleResolver> Simulation<R> {
    /// Runs one tick and reports what changed.
    pub fn tick(&mut self, action: PlayerAction) -> TickReport {
        let mut report = TickReport::new(self.tick);
        let goal_before = self.goal_achieved();

        self.player_phase(action, &mut report);
        self.buff_phase(&mut report);
        self.enemy_phase(&mut report);

        if !goal_before && self.goal_achieved() {
            report.changes |= TickChanges::GOAL_ACHIEVED;
            info!(tick = %self.tick, "goal achieved");
        }

        self.tick = self.tick.next();
        report
    }

    fn player_phase(&mut self, action: PlayerAction, report: &mut TickReport) {
        if self.player.is_none() {
            debug!(?action, "no player; action ignored");
            return;
        }

        match action {
            PlayerAction::Move(direction) => {
                if self.move_player(direction, report) {
                    self.player_overlap(report);
                }
            }
            PlayerAction::UseItem(item) => self.use_item(item, report),
            PlayerAction::Interact(target) => self.interact(target, report),
            PlayerAction::Wait => {}
        }
    }

    /// Returns whether the player changed tile.
    fn move_player(&mut self, direction: Direction, report: &mut TickReport) -> bool {
        let Some(player) = self.player.as_mut() else {
            return false;
        };
        let target = player.face(direction);

        if !self.map.in_bounds(target) || self.map.is_wall(target) {
            debug!(%target, "move blocked");
            return false;
        }

        if let Some(door) = self.map.door(target)
            && !door.open
        {
            let holds_key = player.inventory().first(ItemClass::Key).is_some_and(
                |item| matches!(item.kind, ItemKind::Key { number } if number == door.key),
            );
            if !holds_key {
                debug!(%target, key = door.key, "door is locked");
                return false;
            }
            player.use_item(ItemClass::Key);
            self.map.open_door(target);
            report.changes |= TickChanges::INVENTORY | TickChanges::MAP;
            debug!(%target, key = door.key, "door opened");
        }

        let mut pushed_onto = None;
        if self.map.has_boulder(target) {
            let behind = target.translate(direction);
            let occupied = self.enemies.iter().any(|enemy| enemy.position() == behind)
                || self.items.iter().any(|item| item.position == behind);
            if occupied || !self.map.push_boulder(target, behind) {
                debug!(%target, "boulder does not move");
                return false;
            }
            report.changes |= TickChanges::MAP;
            pushed_onto = Some(behind);
        }

        player.relocate(target);
        report.changes |= TickChanges::PLAYER_MOVED;

        if pushed_onto.is_some_and(|tile| self.map.is_switch(tile)) {
            self.detonate_triggered_bombs(report);
        }
        true
    }

    fn player_overlap(&mut self, report: &mut TickReport) {
        let Some(position) = self.player_position() else {
            return;
        };

        let mut index = 0;
        while index < self.items.len() {
            let item = self.items[index];
            if item.position == position
                && item_overlap(self.player.as_mut(), InventoryItem::new(item.id, item.kind))
                    == Overlap::PickedUp
            {
                self.items.remove(index);
                report.changes |= TickChanges::INVENTORY;
                debug!(item = %item.id, kind = ?item.kind, "picked up");
            } else {
                index += 1;
            }
        }

        let mut index = 0;
        while index < self.enemies.len() {
            let removed = self.enemies[index].position() == position
                && enemy_overlap(self.player.as_ref(), &self.enemies[index]) == Overlap::Battle
                && self.fight(index, report);
            if !removed {
                index += 1;
            }
        }
    }

    fn use_item(&mut self, item_id: EntityId, report: &mut TickReport) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let Some(item) = player.inventory().get(item_id).copied() else {
            debug!(item = %item_id, "item not held");
            return;
        };

        if item.kind.potion_effect().is_some() {
            let before = player.mode();
            if player.consume_potion(item_id, self.tick) {
                report.changes |= TickChanges::INVENTORY;
                if player.mode() != before {
                    report.changes |= TickChanges::BUFFS;
                }
                debug!(
                    item = %item_id,
                    mode = %player.mode(),
                    queued = player.buffs().pending().count(),
                    "potion consumed"
                );
            }
            return;
        }

        if item.kind == ItemKind::Bomb {
            player.remove_item(item_id);
            let position = player.position();
            self.map.place_bomb(position);
            report.changes |= TickChanges::INVENTORY | TickChanges::MAP;
            debug!(item = %item_id, %position, "bomb placed");
            if self.map.is_bomb_triggered(position) {
                self.explode(position, report);
            }
            return;
        }

        debug!(item = %item_id, kind = ?item.kind, "item cannot be used");
    }

    fn interact(&mut self, target: EntityId, report: &mut TickReport) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let Some(enemy) = self.enemies.iter_mut().find(|enemy| enemy.id() == target) else {
            debug!(%target, "nothing to interact with");
            return;
        };

        if enemy.interact(player) {
            report.changes |= TickChanges::ALLEGIANCE | TickChanges::INVENTORY;
            debug!(%target, treasure = player.count(ItemClass::Treasure), "mercenary bribed");
        } else {
            debug!(%target, "interaction rejected");
        }
    }

    fn buff_phase(&mut self, report: &mut TickReport) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let before = player.mode();
        player.on_tick(self.tick);
        if player.mode() != before {
            report.changes |= TickChanges::BUFFS;
            debug!(tick = %self.tick, from = %before, to = %player.mode(), "player mode changed");
        }
    }

    fn enemy_phase(&mut self, report: &mut TickReport) {
        let mut index = 0;
        while index < self.enemies.len() {
            let enemy = &mut self.enemies[index];
            let from = enemy.position();
            let roll = self
                .rng
                .next_u32(compute_seed(self.seed, self.tick, enemy.id()));
            let (strategy, candidate) = enemy.plan_move(&self.map, self.player.as_ref(), roll);

            if candidate != from && self.map.is_open(candidate) {
                enemy.relocate(candidate);
                report.changes |= TickChanges::ENEMIES_MOVED;
            }
            debug!(enemy = %enemy.id(), %strategy, %from, to = %enemy.position(), "enemy acted");

            let position = enemy.position();
            let removed = self.player_position() == Some(position)
                && enemy_overlap(self.player.as_ref(), &self.enemies[index]) == Overlap::Battle
                && self.fight(index, report);
            if !removed {
                index += 1;
            }
        }
    }

    fn detonate_triggered_bombs(&mut self, report: &mut TickReport) {
        for bomb in self.map.triggered_bombs() {
            // An earlier blast may already have taken this one.
            if self.map.has_bomb(bomb) {
                self.explode(bomb, report);
            }
        }
    }

    /// Clears the blast square of everything except the player and exits.
    fn explode(&mut self, center: Position, report: &mut TickReport) {
        let radius = self.config.bomb_radius;
        self.map.clear_area(center, radius);

        let enemies_before = self.enemies.len();
        self.enemies
            .retain(|enemy| !in_blast(center, radius, enemy.position()));
        self.items.retain(|item| !in_blast(center, radius, item.position));

        report.changes |= TickChanges::EXPLOSION | TickChanges::MAP;
        let destroyed = enemies_before - self.enemies.len();
        if destroyed > 0 {
            report.changes |= TickChanges::ENEMY_DEFEATED;
        }
        info!(%center, radius, destroyed, "bomb exploded");
    }
}
