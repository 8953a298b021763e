use std::collections::VecDeque;

use rand::Rng;
use tracing::debug;

use crate::state::Position;

/// Where a food drop ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// a cell not covered by the snake
    Free(Position),
    /// every attempt hit the snake; this is the last sample
    Exhausted(Position),
}

impl Placement {
    pub(crate) fn position(self) -> Position {
        match self {
            Placement::Free(p) | Placement::Exhausted(p) => p,
        }
    }
}

/// Samples random cells until one is not covered by `snake`, giving up after
/// `max_attempts` and keeping the last sample. Near-full grids can therefore
/// put food under the snake.
pub(crate) fn place_food<R: Rng + ?Sized>(
    snake: &VecDeque<Position>,
    grid_size: u32,
    max_attempts: u32,
    rng: &mut R,
) -> Placement {
    debug_assert!(grid_size <= i32::MAX as u32);
    let mut attempts = 0;
    loop {
        let food = Position::new(
            rng.gen_range(0..grid_size) as i32,
            rng.gen_range(0..grid_size) as i32,
        );
        attempts += 1;
        if !snake.contains(&food) {
            return Placement::Free(food);
        }
        if attempts >= max_attempts {
            debug!(attempts, snake_len = snake.len(), "no free cell found for food");
            return Placement::Exhausted(food);
        }
    }
}
