//! The score collaborator drivers hand finished games to. The engine never
//! calls into this module.
use std::error::Error;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::state::GameState;
use crate::types::Mode;

/// how many entries a leaderboard query returns unless told otherwise
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 50;

/// A submitted score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    /// assigned by the store in submission order, starting at 1
    pub id: u64,
    #[allow(missing_docs)]
    pub username: String,
    #[allow(missing_docs)]
    pub score: u32,
    #[allow(missing_docs)]
    pub mode: Mode,
}

/// Which modes a query covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeFilter {
    #[allow(missing_docs)]
    All,
    #[allow(missing_docs)]
    Only(Mode),
}

impl ModeFilter {
    #[allow(missing_docs)]
    pub fn matches(&self, mode: Mode) -> bool {
        match self {
            ModeFilter::All => true,
            ModeFilter::Only(m) => *m == mode,
        }
    }
}

impl From<Option<Mode>> for ModeFilter {
    fn from(mode: Option<Mode>) -> Self {
        mode.map_or(ModeFilter::All, ModeFilter::Only)
    }
}

/// Somewhere to keep finished scores
pub trait ScoreStore {
    /// record a score and return the stored entry
    fn submit(&mut self, username: &str, score: u32, mode: Mode) -> ScoreEntry;

    /// highest scores first, ties in submission order, at most `limit` entries
    fn leaderboard(&self, filter: ModeFilter, limit: usize) -> Vec<ScoreEntry>;

    /// best score for `username` under `filter`, 0 if they have none
    fn high_score(&self, username: &str, filter: ModeFilter) -> u32;

    /// records the score of a finished game; a snapshot of a game still in play is rejected
    fn submit_final_state(
        &mut self,
        username: &str,
        state: &GameState,
    ) -> Result<ScoreEntry, Box<dyn Error>> {
        if !state.is_game_over {
            return Err("only finished games can be submitted".into());
        }
        Ok(self.submit(username, state.score, state.mode))
    }
}

/// A `ScoreStore` that lives for as long as the value does
#[derive(Debug, Clone, Default)]
pub struct InMemoryScoreStore {
    entries: Vec<ScoreEntry>,
}

impl InMemoryScoreStore {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// number of entries ever submitted
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn submit(&mut self, username: &str, score: u32, mode: Mode) -> ScoreEntry {
        let entry = ScoreEntry {
            id: self.entries.len() as u64 + 1,
            username: username.to_string(),
            score,
            mode,
        };
        self.entries.push(entry.clone());
        entry
    }

    fn leaderboard(&self, filter: ModeFilter, limit: usize) -> Vec<ScoreEntry> {
        self.entries
            .iter()
            .filter(|e| filter.matches(e.mode))
            .sorted_by(|a, b| b.score.cmp(&a.score))
            .take(limit)
            .cloned()
            .collect()
    }

    fn high_score(&self, username: &str, filter: ModeFilter) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.username == username && filter.matches(e.mode))
            .map(|e| e.score)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Game;
    use crate::state::Position;
    use crate::types::Direction;

    fn seeded() -> InMemoryScoreStore {
        let mut store = InMemoryScoreStore::new();
        store.submit("player1", 150, Mode::Walls);
        store.submit("player2", 230, Mode::PassThrough);
        store.submit("speedmaster", 180, Mode::Walls);
        store.submit("player1", 200, Mode::PassThrough);
        store.submit("player2", 120, Mode::Walls);
        store
    }

    #[test]
    fn test_ids_follow_submission_order() {
        let store = seeded();
        assert_eq!(store.len(), 5);
        let ids = store.leaderboard(ModeFilter::All, 10).iter().map(|e| e.id).collect_vec();
        assert_eq!(ids, vec![2, 4, 3, 1, 5]);
    }

    #[test]
    fn test_leaderboard_filters_and_limits() {
        let store = seeded();
        let walls = store.leaderboard(ModeFilter::Only(Mode::Walls), DEFAULT_LEADERBOARD_LIMIT);
        assert_eq!(walls.iter().map(|e| e.score).collect_vec(), vec![180, 150, 120]);
        assert!(walls.iter().all(|e| e.mode == Mode::Walls));

        let top_two = store.leaderboard(ModeFilter::All, 2);
        assert_eq!(
            top_two.iter().map(|e| e.username.as_str()).collect_vec(),
            vec!["player2", "player1"]
        );
        assert!(store.leaderboard(ModeFilter::All, 0).is_empty());
    }

    #[test]
    fn test_ties_keep_submission_order() {
        let mut store = InMemoryScoreStore::new();
        store.submit("a", 50, Mode::Walls);
        store.submit("b", 50, Mode::Walls);
        store.submit("c", 70, Mode::Walls);
        let names = store
            .leaderboard(ModeFilter::All, 10)
            .into_iter()
            .map(|e| e.username)
            .collect_vec();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_high_score() {
        let store = seeded();
        assert_eq!(store.high_score("player1", ModeFilter::All), 200);
        assert_eq!(store.high_score("player1", ModeFilter::Only(Mode::Walls)), 150);
        assert_eq!(store.high_score("nobody", ModeFilter::All), 0);
    }

    #[test]
    fn test_only_finished_games_are_submitted() {
        let mut store = InMemoryScoreStore::new();
        let state = GameState {
            snake: vec![Position::new(7, 3)],
            food: Position::new(0, 0),
            score: 40,
            is_game_over: false,
            is_paused: false,
            mode: Mode::Walls,
            grid_size: 8,
        };
        let mut g = Game::from_state_with_seed(state.clone(), Direction::Right, 1).unwrap();
        assert!(store.submit_final_state("player1", &state).is_err());
        assert!(store.is_empty());

        assert!(!g.update());
        let entry = store.submit_final_state("player1", &g.state()).unwrap();
        assert_eq!(entry.score, 40);
        assert_eq!(entry.mode, Mode::Walls);
        assert_eq!(store.high_score("player1", ModeFilter::from(Some(Mode::Walls))), 40);
    }
}
