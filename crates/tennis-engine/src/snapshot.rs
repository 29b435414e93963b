//! JSON snapshots of a game in progress.
//!
//! A snapshot records both players with their point counts, alongside the
//! structured score and the rendered call at the time it was taken. The
//! file format looks like:
//!
//! ```json
//! {
//!   "players": [
//!     { "name": "Serena", "points": 4 },
//!     { "name": "Venus", "points": 3 }
//!   ],
//!   "score": { "advantage": "one" },
//!   "text": "Advantage Serena"
//! }
//! ```

use crate::{Game, Score, ScoreError};
use serde::{Deserialize, Serialize};
use tennis_core::Player;
use thiserror::Error;

/// Errors that can occur when taking or reading a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Serializable state of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Players indexed by side.
    pub players: [Player; 2],
    /// Structured score.
    pub score: Score,
    /// The call as returned by [`Game::current_score`].
    pub text: String,
}

impl GameSnapshot {
    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Game {
    /// Captures the players and the current score.
    pub fn snapshot(&self) -> Result<GameSnapshot, SnapshotError> {
        let score = self.score()?;
        Ok(GameSnapshot {
            players: self.players().clone(),
            score,
            text: score.text(self.players()),
        })
    }

    /// Resumes a game from a snapshot.
    ///
    /// Only names and point counts are read back; the score is recomputed.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Game {
        let [one, two] = &snapshot.players;
        Game::from_points(one.name(), one.points(), two.name(), two.points())
    }
}
