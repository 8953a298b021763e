//! A greedy food chasing policy. It never looks at walls or the snake's own
//! body, so it is only good for animating bots, not for winning.
use rand::{thread_rng, Rng};

use crate::types::{
    Direction, FoodGettableGame, HeadGettableGame, Mode, ModeDeterminableGame,
    SizeDeterminableGame, N_DIRECTIONS,
};

/// Picks the direction that closes the larger axis gap between the head and
/// the food, preferring the horizontal axis only when it is strictly larger. In
/// pass-through mode the gap is measured the short way around the grid.
pub fn simulate_move<G>(game: &G) -> Direction
where
    G: HeadGettableGame + FoodGettableGame + SizeDeterminableGame + ModeDeterminableGame,
{
    simulate_move_with_rng(game, &mut thread_rng())
}

/// `simulate_move` with the rng used when the head already sits on the food
pub fn simulate_move_with_rng<G, R>(game: &G, rng: &mut R) -> Direction
where
    G: HeadGettableGame + FoodGettableGame + SizeDeterminableGame + ModeDeterminableGame,
    R: Rng + ?Sized,
{
    let head = match game.get_head() {
        Some(head) => head,
        None => return random_direction(rng),
    };
    let food = game.get_food();
    let mut dx = food.x - head.x;
    let mut dy = food.y - head.y;

    if game.mode() == Mode::PassThrough {
        let size = game.get_grid_size() as i32;
        dx = shortest_wrapped_delta(dx, size);
        dy = shortest_wrapped_delta(dy, size);
    }

    if dx.abs() > dy.abs() {
        if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy != 0 {
        if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        }
    } else {
        random_direction(rng)
    }
}

// |delta| > size / 2 in real arithmetic
fn shortest_wrapped_delta(delta: i32, size: i32) -> i32 {
    if 2 * i64::from(delta).abs() > i64::from(size) {
        delta - size * delta.signum()
    } else {
        delta
    }
}

fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    Direction::ALL[rng.gen_range(0..N_DIRECTIONS)]
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;
    use crate::state::{GameState, Position};

    fn snapshot(head: (i32, i32), food: (i32, i32), mode: Mode) -> GameState {
        GameState {
            snake: vec![Position::new(head.0, head.1)],
            food: Position::new(food.0, food.1),
            score: 0,
            is_game_over: false,
            is_paused: false,
            mode,
            grid_size: 30,
        }
    }

    #[test]
    fn test_heads_toward_food() {
        let s = snapshot((10, 10), (15, 10), Mode::PassThrough);
        assert_eq!(simulate_move(&s), Direction::Right);

        let s = snapshot((10, 10), (4, 10), Mode::Walls);
        assert_eq!(simulate_move(&s), Direction::Left);

        let s = snapshot((10, 10), (10, 2), Mode::Walls);
        assert_eq!(simulate_move(&s), Direction::Up);

        let s = snapshot((10, 10), (11, 18), Mode::Walls);
        assert_eq!(simulate_move(&s), Direction::Down);
    }

    #[test]
    fn test_ties_go_vertical() {
        let s = snapshot((10, 10), (13, 13), Mode::Walls);
        assert_eq!(simulate_move(&s), Direction::Down);
        let s = snapshot((10, 10), (7, 7), Mode::Walls);
        assert_eq!(simulate_move(&s), Direction::Up);
    }

    #[test]
    fn test_wraps_the_short_way() {
        let s = snapshot((1, 10), (28, 10), Mode::PassThrough);
        assert_eq!(simulate_move(&s), Direction::Left);
        let s = snapshot((28, 10), (1, 10), Mode::PassThrough);
        assert_eq!(simulate_move(&s), Direction::Right);
        let s = snapshot((10, 1), (10, 28), Mode::PassThrough);
        assert_eq!(simulate_move(&s), Direction::Up);

        // walls never wrap
        let s = snapshot((1, 10), (28, 10), Mode::Walls);
        assert_eq!(simulate_move(&s), Direction::Right);
    }

    #[test]
    fn test_exactly_half_does_not_wrap() {
        let s = snapshot((0, 10), (15, 10), Mode::PassThrough);
        assert_eq!(simulate_move(&s), Direction::Right);
        assert_eq!(shortest_wrapped_delta(15, 30), 15);
        assert_eq!(shortest_wrapped_delta(16, 30), -14);
        assert_eq!(shortest_wrapped_delta(-16, 30), 14);
        assert_eq!(shortest_wrapped_delta(8, 15), -7);
    }

    #[test]
    fn test_on_food_is_random_but_seeded() {
        let s = snapshot((10, 10), (10, 10), Mode::PassThrough);
        let a = simulate_move_with_rng(&s, &mut SmallRng::seed_from_u64(3));
        let b = simulate_move_with_rng(&s, &mut SmallRng::seed_from_u64(3));
        assert_eq!(a, b);

        let mut rng = SmallRng::seed_from_u64(11);
        let mut seen = [false; N_DIRECTIONS];
        for _ in 0..200 {
            seen[simulate_move_with_rng(&s, &mut rng).as_index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_runs_on_live_engine() {
        let state = snapshot((10, 10), (15, 10), Mode::PassThrough);
        let g = crate::engine::Game::from_state_with_seed(state, Direction::Up, 1).unwrap();
        assert_eq!(simulate_move(&g), Direction::Right);
    }
}
