//! various types that are useful for working with the snake engine
use crate::state::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// the number of directions a snake can move in
pub const N_DIRECTIONS: usize = 4;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    /// x offset
    pub x: i32,
    /// y offset
    pub y: i32,
}

/// Represents a direction of travel on the grid. The grid uses screen coordinates,
/// so `Up` decreases y and `Down` increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl Direction {
    /// every direction, in `as_index` order
    pub const ALL: [Direction; N_DIRECTIONS] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// convert this direction to a unit vector
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::Left => Vector { x: -1, y: 0 },
            Direction::Right => Vector { x: 1, y: 0 },
            Direction::Up => Vector { x: 0, y: -1 },
            Direction::Down => Vector { x: 0, y: 1 },
        }
    }

    /// create a Direction from the given vector, None if it isn't a unit step
    pub fn from_vector(vector: Vector) -> Option<Self> {
        match vector {
            Vector { x: -1, y: 0 } => Some(Self::Left),
            Vector { x: 1, y: 0 } => Some(Self::Right),
            Vector { x: 0, y: -1 } => Some(Self::Up),
            Vector { x: 0, y: 1 } => Some(Self::Down),
            _ => None,
        }
    }

    /// returns a vec of all possible directions
    pub fn all() -> Vec<Direction> {
        Self::ALL.to_vec()
    }

    /// converts this direction to a usize index. indices are the same order as the `Direction::all()` method
    pub fn as_index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// converts a usize index to a direction
    pub fn from_index(index: usize) -> Option<Direction> {
        Self::ALL.get(index).copied()
    }

    /// the direction pointing the other way
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// checks if a given direction is opposite this one. e.g. Up is opposite to Down, but not to Left
    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

/// How the edges of the grid behave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// leaving one edge re-enters from the opposite edge
    #[serde(rename = "pass-through")]
    PassThrough,
    /// leaving the grid ends the game
    #[serde(rename = "walls")]
    Walls,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::PassThrough
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::PassThrough => write!(f, "pass-through"),
            Mode::Walls => write!(f, "walls"),
        }
    }
}

/// a game for which the size of the (square) grid can be determined
pub trait SizeDeterminableGame {
    /// number of cells along each axis
    fn get_grid_size(&self) -> u32;

    /// is this position inside the grid
    fn in_bounds(&self, pos: Position) -> bool {
        let size = self.get_grid_size() as i32;
        pos.x >= 0 && pos.x < size && pos.y >= 0 && pos.y < size
    }
}

/// a game whose boundary mode can be determined
pub trait ModeDeterminableGame {
    #[allow(missing_docs)]
    fn mode(&self) -> Mode;
}

/// A game for which the head of the snake can be got.
pub trait HeadGettableGame {
    /// the head position, None only for a snapshot carrying an empty snake
    fn get_head(&self) -> Option<Position>;
}

/// A game for which the food on the board can be queried
pub trait FoodGettableGame {
    #[allow(missing_docs)]
    fn get_food(&self) -> Position;
}

/// A game where an entire snake body is gettable
pub trait SnakeBodyGettableGame {
    /// return a Vec of the positions for the snake body, in order from head to tail
    fn get_snake_body_vec(&self) -> Vec<Position>;

    /// Check if the given position is covered by any snake segment
    fn position_is_snake_body(&self, pos: Position) -> bool;
}

/// a game that tracks a score
pub trait ScoreGettableGame {
    #[allow(missing_docs)]
    fn get_score(&self) -> u32;
}

/// A game which can tell whether it has reached a terminal state
pub trait VictorDeterminableGame {
    #[allow(missing_docs)]
    fn is_over(&self) -> bool;
}
