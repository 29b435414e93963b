//! Structured score and its rendering.

use serde::{Deserialize, Serialize};
use tennis_core::{Player, Point, PointError, Side};
use thiserror::Error;

/// Error type for score computation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// The point counts fell outside every scoring branch.
    ///
    /// Awarding points one at a time from Love-All can never produce this.
    #[error("unreachable score state {one}-{two}")]
    UnreachableState {
        one: u32,
        two: u32,
        #[source]
        source: PointError,
    },
}

/// The score of a game, independent of the players' names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Score {
    /// Level below Forty ("Love-All", "Fifteen-All", "Thirty-All").
    All(Point),
    /// Level at three points or more.
    Deuce,
    /// Unequal, with neither player past Forty.
    Running { one: Point, two: Point },
    /// One point ahead in the game point phase.
    Advantage(Side),
    /// Two or more points ahead in the game point phase.
    Win(Side),
}

impl Score {
    /// Returns the side that has won the game, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            Score::Win(side) => Some(side),
            _ => None,
        }
    }

    /// Returns the same score seen with the two sides swapped.
    pub fn mirrored(self) -> Score {
        match self {
            Score::Running { one, two } => Score::Running { one: two, two: one },
            Score::Advantage(side) => Score::Advantage(side.opposite()),
            Score::Win(side) => Score::Win(side.opposite()),
            level => level,
        }
    }

    /// Renders the call, naming players by their side in `players`.
    pub fn text(self, players: &[Player; 2]) -> String {
        match self {
            Score::All(point) => point.tied_name().to_string(),
            Score::Deuce => "Deuce".to_string(),
            Score::Running { one, two } => format!("{}-{}", one.name(), two.name()),
            Score::Advantage(side) => format!("Advantage {}", players[side.index()].name()),
            Score::Win(side) => format!("Win for {}", players[side.index()].name()),
        }
    }
}
