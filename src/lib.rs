#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Engine for a single player grid snake game.
//!
//! A [`engine::Game`] owns the board and advances one cell per call to
//! `update`; it knows nothing about timers, rendering or storage. Drivers read
//! [`state::GameState`] snapshots, steer with `change_direction`, and may use
//! [`heuristic::simulate_move`] to pick directions for bots. The
//! [`watch::WatchSession`] driver combines the two to animate other players'
//! games, and [`leaderboard`] holds finished scores.
//!
//! ```
//! use snake_game_core::engine::Game;
//! use snake_game_core::heuristic::simulate_move;
//! use snake_game_core::types::Mode;
//!
//! let mut game = Game::new(30, Mode::PassThrough);
//! while !game.is_game_over() && game.score() < 30 {
//!     let direction = simulate_move(&game.state());
//!     game.change_direction(direction);
//!     game.update();
//! }
//! ```

use state::GameState;

pub mod engine;
pub mod heuristic;
pub mod leaderboard;
pub mod state;
pub mod types;
pub mod watch;

/// Loads a snapshot from its json form
pub fn state_fixture(state_fixture: &str) -> Result<GameState, serde_json::Error> {
    serde_json::from_str(state_fixture)
}
