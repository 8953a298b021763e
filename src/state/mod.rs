//! the snapshot representation handed to renderers, drivers and score collaborators
use crate::types::{
    FoodGettableGame, HeadGettableGame, Mode, ModeDeterminableGame, ScoreGettableGame,
    SizeDeterminableGame, SnakeBodyGettableGame, VictorDeterminableGame, Vector,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the grid
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
}

impl Position {
    #[allow(missing_docs)]
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    #[allow(missing_docs)]
    pub fn add_vec(&self, v: Vector) -> Position {
        Position {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }

    #[allow(missing_docs)]
    pub fn sub_vec(&self, v: Vector) -> Position {
        Position {
            x: self.x - v.x,
            y: self.y - v.y,
        }
    }

    #[allow(missing_docs)]
    pub fn to_vector(&self) -> Vector {
        Vector {
            x: self.x,
            y: self.y,
        }
    }
}

/// An owned copy of everything an observer may read about a game. Mutating a
/// snapshot never affects the engine it came from.
///
/// The serialized form uses the field names the browser client reads:
/// ```
/// # use snake_game_core::state::GameState;
/// let body = r#"{"snake":[{"x":15,"y":15},{"x":14,"y":15}],"food":{"x":3,"y":4},"score":20,"isGameOver":false,"isPaused":false,"mode":"walls","gridSize":30}"#;
/// let state: GameState = serde_json::from_str(body).unwrap();
/// assert_eq!(state.score, 20);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// segments ordered head first
    pub snake: Vec<Position>,
    #[allow(missing_docs)]
    pub food: Position,
    #[allow(missing_docs)]
    pub score: u32,
    #[allow(missing_docs)]
    pub is_game_over: bool,
    #[allow(missing_docs)]
    pub is_paused: bool,
    #[allow(missing_docs)]
    pub mode: Mode,
    #[allow(missing_docs)]
    pub grid_size: u32,
}

impl GameState {
    /// head of the snake, if the snapshot has one
    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }

    /// number of segments
    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// true when the snapshot carries no segments, which the engine never produces
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    /// serialize this snapshot to the client's json shape
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for y in 0..self.grid_size as i32 {
            for x in 0..self.grid_size as i32 {
                let position = Position { x, y };
                if self.head() == Some(position) {
                    write!(f, "H")?;
                } else if self.snake.contains(&position) {
                    write!(f, "s")?;
                } else if self.food == position {
                    write!(f, "f")?;
                } else {
                    write!(f, ".")?;
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "(score: {} length: {} mode: {}",
            self.score,
            self.snake.len(),
            self.mode
        )?;
        if self.is_paused {
            write!(f, " paused")?;
        }
        if self.is_game_over {
            write!(f, " game over")?;
        }
        write!(f, ")")
    }
}

impl SizeDeterminableGame for GameState {
    fn get_grid_size(&self) -> u32 {
        self.grid_size
    }
}

impl ModeDeterminableGame for GameState {
    fn mode(&self) -> Mode {
        self.mode
    }
}

impl HeadGettableGame for GameState {
    fn get_head(&self) -> Option<Position> {
        self.head()
    }
}

impl FoodGettableGame for GameState {
    fn get_food(&self) -> Position {
        self.food
    }
}

impl SnakeBodyGettableGame for GameState {
    fn get_snake_body_vec(&self) -> Vec<Position> {
        self.snake.clone()
    }

    fn position_is_snake_body(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }
}

impl ScoreGettableGame for GameState {
    fn get_score(&self) -> u32 {
        self.score
    }
}

impl VictorDeterminableGame for GameState {
    fn is_over(&self) -> bool {
        self.is_game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_fixture;

    fn fixture() -> GameState {
        state_fixture(include_str!("../../fixtures/small_walls.json")).unwrap()
    }

    #[test]
    fn test_fixture_loads() {
        let g = fixture();
        eprintln!("{}", g);
        assert_eq!(g.grid_size, 8);
        assert_eq!(g.mode, Mode::Walls);
        assert_eq!(g.head(), Some(Position::new(3, 4)));
        assert_eq!(g.len(), 3);
        assert!(!g.is_over());
    }

    #[test]
    fn test_json_uses_client_field_names() {
        let json = fixture().to_json().unwrap();
        assert!(json.contains("\"isGameOver\":false"));
        assert!(json.contains("\"gridSize\":8"));
        assert!(json.contains("\"mode\":\"walls\""));
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fixture());
    }

    #[test]
    fn test_display_marks_cells() {
        let g = fixture();
        let rendered = g.to_string();
        let rows: Vec<&str> = rendered.lines().skip(1).take(8).collect();
        assert_eq!(rows[4], ". s s H . . . . ");
        assert_eq!(rows[1], ". . . . . . f . ");
        assert!(rendered.ends_with("(score: 0 length: 3 mode: walls)"));
    }

    #[test]
    fn test_in_bounds() {
        let g = fixture();
        assert!(g.in_bounds(Position::new(0, 0)));
        assert!(g.in_bounds(Position::new(7, 7)));
        assert!(!g.in_bounds(Position::new(8, 0)));
        assert!(!g.in_bounds(Position::new(0, -1)));
    }
}
