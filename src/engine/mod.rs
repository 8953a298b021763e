//! The live engine. A `Game` owns the mutable board and is advanced one tick
//! at a time by whatever driver holds it; observers only ever see
//! [`GameState`] copies.
mod config;
mod food;

pub use config::{GameConfig, MAX_GRID_SIZE, MIN_GRID_SIZE};

use std::collections::VecDeque;
use std::error::Error;

use fxhash::FxHashSet;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::state::{GameState, Position};
use crate::types::{
    Direction, FoodGettableGame, HeadGettableGame, Mode, ModeDeterminableGame, ScoreGettableGame,
    SizeDeterminableGame, SnakeBodyGettableGame, VictorDeterminableGame,
};

/// Length of the snake after a reset
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// What ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// the head left the grid in walls mode
    Wall,
    /// the head moved onto one of the snake's own segments
    SelfCollision,
}

/// A single player snake game.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    snake: VecDeque<Position>,
    food: Position,
    direction: Direction,
    next_direction: Direction,
    score: u32,
    is_game_over: bool,
    is_paused: bool,
    last_collision: Option<CollisionType>,
    rng: SmallRng,
}

impl Game {
    /// a fresh game with default scoring on a `grid_size` square grid
    pub fn new(grid_size: u32, mode: Mode) -> Self {
        Self::with_config(GameConfig::new(grid_size, mode))
    }

    /// a fresh game whose food placement draws from entropy
    pub fn with_config(config: GameConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// a fresh game whose food placement is reproducible from `seed`
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(mut config: GameConfig, rng: SmallRng) -> Self {
        config.grid_size = config.effective_grid_size();
        let mut game = Game {
            config,
            snake: VecDeque::with_capacity(INITIAL_SNAKE_LENGTH),
            food: Position::new(0, 0),
            direction: Direction::Right,
            next_direction: Direction::Right,
            score: 0,
            is_game_over: false,
            is_paused: false,
            last_collision: None,
            rng,
        };
        game.reset();
        game
    }

    /// Builds an engine that resumes from `state`, heading in `direction`. Returns
    /// an error if the snapshot could not have come from an engine.
    pub fn from_state(state: GameState, direction: Direction) -> Result<Self, Box<dyn Error>> {
        Self::from_state_with_rng(state, direction, SmallRng::from_entropy())
    }

    /// Same as `from_state` with reproducible food placement
    pub fn from_state_with_seed(
        state: GameState,
        direction: Direction,
        seed: u64,
    ) -> Result<Self, Box<dyn Error>> {
        Self::from_state_with_rng(state, direction, SmallRng::seed_from_u64(seed))
    }

    fn from_state_with_rng(
        state: GameState,
        direction: Direction,
        rng: SmallRng,
    ) -> Result<Self, Box<dyn Error>> {
        if state.grid_size < MIN_GRID_SIZE {
            return Err(format!("grid size must be at least {}", MIN_GRID_SIZE).into());
        }
        if state.grid_size > MAX_GRID_SIZE {
            return Err(format!("grid size must be at most {}", MAX_GRID_SIZE).into());
        }
        if state.snake.is_empty() {
            return Err("snake has no segments".into());
        }
        if let Some(p) = state.snake.iter().find(|p| !state.in_bounds(**p)) {
            return Err(format!("snake segment {:?} is off the grid", p).into());
        }
        if !state.in_bounds(state.food) {
            return Err(format!("food {:?} is off the grid", state.food).into());
        }
        if !state.is_game_over {
            let mut seen: FxHashSet<Position> =
                FxHashSet::with_capacity_and_hasher(state.snake.len(), Default::default());
            if !state.snake.iter().all(|p| seen.insert(*p)) {
                return Err("snake overlaps itself in a live game".into());
            }
        }

        let config = GameConfig {
            grid_size: state.grid_size,
            mode: state.mode,
            ..Default::default()
        };
        Ok(Game {
            config,
            snake: state.snake.into_iter().collect(),
            food: state.food,
            direction,
            next_direction: direction,
            score: state.score,
            is_game_over: state.is_game_over,
            is_paused: state.is_paused,
            last_collision: None,
            rng,
        })
    }

    /// Re-centers a fresh snake heading right, places food and clears the score and flags
    pub fn reset(&mut self) {
        let center = (self.config.grid_size / 2) as i32;
        self.snake.clear();
        for i in 0..INITIAL_SNAKE_LENGTH as i32 {
            self.snake.push_back(Position::new(center - i, center));
        }
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.food = self.place_food();
        self.score = 0;
        self.is_game_over = false;
        self.is_paused = false;
        self.last_collision = None;
    }

    /// switch boundary handling, discarding the game in progress
    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
        self.reset();
    }

    /// Queues `requested` for the next tick unless it would reverse the direction
    /// that was last applied. Later requests before a tick overwrite earlier ones.
    pub fn change_direction(&mut self, requested: Direction) {
        if !self.direction.is_opposite(&requested) {
            self.next_direction = requested;
        }
    }

    /// flips the pause flag and returns the new value
    pub fn toggle_pause(&mut self) -> bool {
        self.is_paused = !self.is_paused;
        self.is_paused
    }

    /// Advances the game by one tick. Returns false without touching the board if
    /// the game is over or paused, and false when this tick ends the game.
    #[instrument(level = "trace", skip_all)]
    pub fn update(&mut self) -> bool {
        if self.is_game_over || self.is_paused {
            return false;
        }

        self.direction = self.next_direction;
        let mut new_head = self.head().add_vec(self.direction.to_vector());

        match self.config.mode {
            Mode::PassThrough => new_head = self.wrap(new_head),
            Mode::Walls => {
                if !self.in_bounds(new_head) {
                    self.end(CollisionType::Wall);
                    return false;
                }
            }
        }

        // the tail still counts, even though it would move away this tick
        if self.snake.contains(&new_head) {
            self.end(CollisionType::SelfCollision);
            return false;
        }

        self.snake.push_front(new_head);
        if new_head == self.food {
            self.score = self.score.saturating_add(self.config.food_score);
            self.food = self.place_food();
        } else {
            self.snake.pop_back();
        }
        true
    }

    /// an independent snapshot of the current game
    pub fn state(&self) -> GameState {
        GameState {
            snake: self.snake.iter().copied().collect(),
            food: self.food,
            score: self.score,
            is_game_over: self.is_game_over,
            is_paused: self.is_paused,
            mode: self.config.mode,
            grid_size: self.config.grid_size,
        }
    }

    /// overwrite the score, used by drivers that resume someone else's game
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// the direction applied on the last tick
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// the direction that the next tick will apply
    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    #[allow(missing_docs)]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[allow(missing_docs)]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    #[allow(missing_docs)]
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    #[allow(missing_docs)]
    pub fn grid_size(&self) -> u32 {
        self.config.grid_size
    }

    /// why the game ended, None while it is running or if it was loaded already over
    pub fn last_collision(&self) -> Option<CollisionType> {
        self.last_collision
    }

    /// the head, which always exists on a live engine
    pub fn head(&self) -> Position {
        self.snake[0]
    }

    fn wrap(&self, pos: Position) -> Position {
        let size = self.config.grid_size as i32;
        Position::new(pos.x.rem_euclid(size), pos.y.rem_euclid(size))
    }

    fn place_food(&mut self) -> Position {
        food::place_food(
            &self.snake,
            self.config.grid_size,
            self.config.max_food_attempts,
            &mut self.rng,
        )
        .position()
    }

    fn end(&mut self, collision: CollisionType) {
        debug!(?collision, score = self.score, length = self.snake.len(), "game over");
        self.is_game_over = true;
        self.last_collision = Some(collision);
    }
}

impl SizeDeterminableGame for Game {
    fn get_grid_size(&self) -> u32 {
        self.config.grid_size
    }
}

impl ModeDeterminableGame for Game {
    fn mode(&self) -> Mode {
        self.config.mode
    }
}

impl HeadGettableGame for Game {
    fn get_head(&self) -> Option<Position> {
        self.snake.front().copied()
    }
}

impl FoodGettableGame for Game {
    fn get_food(&self) -> Position {
        self.food
    }
}

impl SnakeBodyGettableGame for Game {
    fn get_snake_body_vec(&self) -> Vec<Position> {
        self.snake.iter().copied().collect()
    }

    fn position_is_snake_body(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }
}

impl ScoreGettableGame for Game {
    fn get_score(&self) -> u32 {
        self.score
    }
}

impl VictorDeterminableGame for Game {
    fn is_over(&self) -> bool {
        self.is_game_over
    }
}
