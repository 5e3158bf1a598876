use crate::state::Position;

/// Grid capability consumed by the movement strategies.
///
/// Implementors answer topology questions only; they never see actors, buffs
/// or allegiance. Every step query returns a single candidate tile, and the
/// caller's map still validates the move before relocating anything.
pub trait MapOracle {
    /// Tiles an enemy on `from` may legally enter next, in a stable order.
    fn neighbours(&self, from: Position) -> Vec<Position>;

    fn is_adjacent(&self, a: Position, b: Position) -> bool {
        a.is_adjacent(b)
    }

    /// Next tile on a shortest route from `from` to `target`.
    ///
    /// The default is greedy: the first neighbour that strictly reduces the
    /// Manhattan distance, or `from` when none does.
    fn step_toward(&self, from: Position, target: Position) -> Position {
        let current = from.distance(target);
        self.neighbours(from)
            .into_iter()
            .filter(|tile| tile.distance(target) < current)
            .min_by_key(|tile| tile.distance(target))
            .unwrap_or(from)
    }

    /// Neighbour that increases the distance to `target` the most, or `from`
    /// when every legal move would bring the actor closer.
    fn step_away(&self, from: Position, target: Position) -> Position {
        let current = from.distance(target);
        self.neighbours(from)
            .into_iter()
            .filter(|tile| tile.distance(target) > current)
            .fold(None::<Position>, |best, tile| match best {
                Some(best) if best.distance(target) >= tile.distance(target) => Some(best),
                _ => Some(tile),
            })
            .unwrap_or(from)
    }

    /// Uniform choice among the legal neighbours driven by `roll`; stays put
    /// when boxed in.
    fn step_random(&self, from: Position, roll: u32) -> Position {
        let options = self.neighbours(from);
        if options.is_empty() {
            return from;
        }
        options[roll as usize % options.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Open 5x5 room.
    struct Room;

    impl MapOracle for Room {
        fn neighbours(&self, from: Position) -> Vec<Position> {
            from.neighbours()
                .into_iter()
                .filter(|tile| (0..5).contains(&tile.x) && (0..5).contains(&tile.y))
                .collect()
        }
    }

    #[test]
    fn step_toward_reduces_distance() {
        let next = Room.step_toward(Position::new(0, 0), Position::new(3, 0));
        assert_eq!(next, Position::new(1, 0));
    }

    #[test]
    fn step_away_increases_distance() {
        let from = Position::new(2, 2);
        let target = Position::new(2, 3);
        let next = Room.step_away(from, target);
        assert!(next.distance(target) > from.distance(target));
    }

    #[test]
    fn step_away_stays_when_cornered() {
        let from = Position::new(0, 0);
        assert_eq!(Room.step_away(from, Position::new(4, 4)), from);
    }

    #[test]
    fn step_random_picks_a_legal_neighbour() {
        let from = Position::new(0, 0);
        for roll in 0..8 {
            let next = Room.step_random(from, roll);
            assert!(from.is_adjacent(next));
        }
    }
}
