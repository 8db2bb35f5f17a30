//! Demo autopilot
//!
//! Greedy steering toward the food that refuses moves which would end the
//! game on the very next tick. It does not plan ahead, so it will eventually
//! trap itself on long runs.

use super::grid::{Cell, Direction};
use super::state::Snapshot;

/// Pick the heading to buffer for the next tick
pub fn choose_direction(view: &Snapshot<'_>) -> Direction {
    let Some(head) = view.head() else {
        return view.direction;
    };
    let grid = view.grid();

    // Current heading first so ties keep the snake going straight
    let candidates = std::iter::once(view.direction).chain(
        Direction::ALL
            .into_iter()
            .filter(|d| *d != view.direction && !d.is_opposite(view.direction)),
    );

    candidates
        .filter(|d| {
            let next = head + d.delta();
            grid.contains(next) && !view.snake.contains(&next)
        })
        .min_by_key(|d| manhattan(head + d.delta(), view.food))
        .unwrap_or(view.direction)
}

fn manhattan(a: Cell, b: Cell) -> i32 {
    let d = a - b;
    d.x.abs() + d.y.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{Engine, Snake, TickOutcome};
    use glam::IVec2;

    #[test]
    fn test_turns_toward_food() {
        let mut engine = Engine::new(GameConfig::with_grid(10, 10));
        engine.place_snake(
            Snake::straight(IVec2::new(4, 4), Direction::Right, 3),
            Direction::Right,
        );
        engine.place_food_at(IVec2::new(4, 8));
        assert_eq!(choose_direction(&engine.snapshot()), Direction::Down);
    }

    #[test]
    fn test_avoids_wall() {
        let mut engine = Engine::new(GameConfig::with_grid(10, 10));
        engine.place_snake(
            Snake::straight(IVec2::new(9, 0), Direction::Right, 3),
            Direction::Right,
        );
        engine.place_food_at(IVec2::new(9, 9));
        assert_eq!(choose_direction(&engine.snapshot()), Direction::Down);
    }

    #[test]
    fn test_autopilot_scores() {
        let mut engine = Engine::new(GameConfig {
            seed: Some(2024),
            ..GameConfig::with_grid(12, 12)
        });
        engine.start();
        for _ in 0..200 {
            let dir = choose_direction(&engine.snapshot());
            engine.steer(dir);
            if let TickOutcome::Died(_) = engine.advance() {
                break;
            }
        }
        assert!(engine.score() > 0);
    }
}
