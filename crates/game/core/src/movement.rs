//! Enemy movement strategies.
//!
//! A strategy is chosen fresh every tick (see [`crate::enemy::Enemy::strategy`])
//! and turned into exactly one candidate tile. Strategies never store state
//! on the enemy and never relocate anything; the driver's map validates the
//! candidate and performs the move.

use crate::env::MapOracle;
use crate::player::Player;
use crate::state::Position;

/// How an enemy picks its next tile this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum MovementStrategy {
    /// Trail the player as an ally. Once `trailing` is set the follower aims
    /// for the tile the player just left instead of the player itself.
    Follow { trailing: bool },
    /// Wander to a uniformly chosen legal neighbour.
    Random,
    /// Increase the distance to the player.
    MoveAway,
    /// Chase the player along a shortest route.
    MoveToward,
}

impl MovementStrategy {
    /// Candidate tile for an actor on `from`.
    ///
    /// `roll` feeds [`MovementStrategy::Random`] and is ignored otherwise.
    /// Strategies that need a target stay put when there is no player.
    pub fn next_position<M>(
        self,
        map: &M,
        from: Position,
        player: Option<&Player>,
        roll: u32,
    ) -> Position
    where
        M: MapOracle + ?Sized,
    {
        if self == MovementStrategy::Random {
            return map.step_random(from, roll);
        }

        let Some(player) = player else {
            return from;
        };

        match self {
            MovementStrategy::Follow { trailing } => Self::follow(map, from, player, trailing),
            MovementStrategy::MoveAway => map.step_away(from, player.position()),
            MovementStrategy::MoveToward => map.step_toward(from, player.position()),
            MovementStrategy::Random => map.step_random(from, roll),
        }
    }

    fn follow<M>(map: &M, from: Position, player: &Player, trailing: bool) -> Position
    where
        M: MapOracle + ?Sized,
    {
        let target = if trailing {
            player.previous_position()
        } else {
            player.position()
        };

        let next = if target != player.position() && map.is_adjacent(from, target) {
            target
        } else {
            map.step_toward(from, target)
        };

        // A follower never steps onto the player.
        if next == player.position() { from } else { next }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::BattleStatistics;
    use crate::state::Direction;

    struct Room;

    impl MapOracle for Room {
        fn neighbours(&self, from: Position) -> Vec<Position> {
            from.neighbours()
                .into_iter()
                .filter(|tile| (0..6).contains(&tile.x) && (0..6).contains(&tile.y))
                .collect()
        }
    }

    fn player_at(x: i32, y: i32) -> Player {
        Player::new(Position::new(x, y), BattleStatistics::player(10.0, 5.0))
    }

    #[test]
    fn toward_and_away_move_in_opposite_senses() {
        let player = player_at(0, 0);
        let from = Position::new(3, 0);

        let closer = MovementStrategy::MoveToward.next_position(&Room, from, Some(&player), 0);
        let farther = MovementStrategy::MoveAway.next_position(&Room, from, Some(&player), 0);

        assert!(closer.distance(player.position()) < from.distance(player.position()));
        assert!(farther.distance(player.position()) > from.distance(player.position()));
    }

    #[test]
    fn follower_never_overlaps_player() {
        let player = player_at(2, 2);
        let from = Position::new(2, 3);

        let next = MovementStrategy::Follow { trailing: false }.next_position(
            &Room,
            from,
            Some(&player),
            0,
        );

        assert_eq!(next, from);
    }

    #[test]
    fn trailing_follower_takes_the_vacated_tile() {
        let mut player = player_at(2, 2);
        let target = player.face(Direction::Right);
        player.relocate(target);
        let from = Position::new(2, 3);

        let next = MovementStrategy::Follow { trailing: true }.next_position(
            &Room,
            from,
            Some(&player),
            0,
        );

        assert_eq!(next, Position::new(2, 2));
    }

    #[test]
    fn targeted_strategies_stay_without_player() {
        let from = Position::new(1, 1);
        for strategy in [
            MovementStrategy::MoveToward,
            MovementStrategy::MoveAway,
            MovementStrategy::Follow { trailing: true },
        ] {
            assert_eq!(strategy.next_position(&Room, from, None, 0), from);
        }
    }

    #[test]
    fn random_ignores_player_presence() {
        let from = Position::new(1, 1);
        let next = MovementStrategy::Random.next_position(&Room, from, None, 3);
        assert!(from.is_adjacent(next));
    }
}
