use serde::{Deserialize, Serialize};

use super::INITIAL_SNAKE_LENGTH;
use crate::types::Mode;

/// smallest grid that fits the starting snake, which ends `INITIAL_SNAKE_LENGTH - 1`
/// cells left of the centre column
pub const MIN_GRID_SIZE: u32 = 2 * (INITIAL_SNAKE_LENGTH as u32 - 1);

/// largest grid whose cells are all addressable by `i32` coordinates
pub const MAX_GRID_SIZE: u32 = i32::MAX as u32;

/// Configuration for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// cells along each side of the square grid
    pub grid_size: u32,
    /// how the edges of the grid behave
    pub mode: Mode,
    /// points awarded for each food eaten
    pub food_score: u32,
    /// random cells tried before food is allowed to land on the snake
    pub max_food_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 30,
            mode: Mode::PassThrough,
            food_score: 10,
            max_food_attempts: 100,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with the given grid size and mode
    pub fn new(grid_size: u32, mode: Mode) -> Self {
        Self {
            grid_size,
            mode,
            ..Default::default()
        }
    }

    /// the grid size the engine will actually use
    pub(crate) fn effective_grid_size(&self) -> u32 {
        self.grid_size.max(MIN_GRID_SIZE).min(MAX_GRID_SIZE)
    }
}
