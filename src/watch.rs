//! Simulated playback of another player's game. The session is stepped by the
//! caller at [`WATCH_TICK`]; it owns no timers.
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::{Game, GameConfig};
use crate::heuristic::simulate_move_with_rng;
use crate::state::GameState;
use crate::types::{Direction, Mode};

/// tick cadence for a human playing live
pub const LIVE_TICK: Duration = Duration::from_millis(100);

/// tick cadence for watch playback
pub const WATCH_TICK: Duration = Duration::from_millis(150);

/// pause between a watched game ending and the next one starting
pub const RESTART_DELAY: Duration = Duration::from_secs(2);

/// watched games are always played on this grid
pub const WATCH_GRID_SIZE: u32 = 30;

/// scores seeded into restarted games are drawn from this range
const RESTART_SCORE_RANGE: std::ops::Range<u32> = 20..120;

/// The player whose game is being shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchedPlayer {
    #[allow(missing_docs)]
    pub username: String,
    #[allow(missing_docs)]
    pub mode: Mode,
    /// score reported for the player when watching started
    pub current_score: u32,
}

/// What happened on one watch tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchTick {
    /// the snake moved after being steered in this direction
    Continued(Direction),
    /// the game ended on this tick
    GameOver,
    /// waiting out the restart delay; the final waiting tick starts a new game
    Restarting,
}

/// ticks spent in `WatchTick::Restarting` after a game ends
pub fn restart_delay_ticks() -> u32 {
    let tick = WATCH_TICK.as_millis();
    ((RESTART_DELAY.as_millis() + tick - 1) / tick) as u32
}

/// A heuristic driven stand-in for a player's live game
#[derive(Debug)]
pub struct WatchSession {
    player: WatchedPlayer,
    game: Game,
    restart_in: Option<u32>,
    rng: SmallRng,
}

impl WatchSession {
    /// start watching `player`
    pub fn new(player: WatchedPlayer) -> Self {
        Self::with_rng(player, SmallRng::from_entropy())
    }

    /// start watching `player` with every random choice derived from `seed`
    pub fn with_seed(player: WatchedPlayer, seed: u64) -> Self {
        Self::with_rng(player, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(player: WatchedPlayer, mut rng: SmallRng) -> Self {
        let mut game = Game::with_seed(GameConfig::new(WATCH_GRID_SIZE, player.mode), rng.gen());
        game.set_score(player.current_score);
        debug!(username = %player.username, mode = %player.mode, "watch session started");
        WatchSession {
            player,
            game,
            restart_in: None,
            rng,
        }
    }

    /// Steers toward the food and advances the game by one tick, or counts down
    /// toward the next game if the last one has ended.
    pub fn tick(&mut self) -> WatchTick {
        if let Some(remaining) = self.restart_in {
            if remaining <= 1 {
                self.restart();
            } else {
                self.restart_in = Some(remaining - 1);
            }
            return WatchTick::Restarting;
        }

        let direction = simulate_move_with_rng(&self.game, &mut self.rng);
        self.game.change_direction(direction);
        if self.game.update() {
            WatchTick::Continued(direction)
        } else {
            self.restart_in = Some(restart_delay_ticks());
            WatchTick::GameOver
        }
    }

    fn restart(&mut self) {
        self.restart_in = None;
        self.game.reset();
        let score = self.rng.gen_range(RESTART_SCORE_RANGE);
        self.game.set_score(score);
        debug!(username = %self.player.username, score, "watched game restarted");
    }

    #[allow(missing_docs)]
    pub fn state(&self) -> GameState {
        self.game.state()
    }

    #[allow(missing_docs)]
    pub fn player(&self) -> &WatchedPlayer {
        &self.player
    }

    /// true while the session is waiting to start the next game
    pub fn is_restarting(&self) -> bool {
        self.restart_in.is_some()
    }
}
