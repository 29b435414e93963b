//! Single game management with point history.
//!
//! The [`Game`] struct holds the two players and renders the current call.
//! Points are awarded by player name; a name matching neither player is
//! ignored.

use crate::rules::{ScoringRules, StandardScoring};
use crate::{Score, ScoreError};
use std::fmt;
use tennis_core::{Player, Side};

/// A single game of tennis between two named players.
///
/// The score is never stored: every call is derived from the two point
/// counts. A `Game` is not synchronized; callers sharing one across threads
/// must serialize access themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Players indexed by [`Side::index`].
    players: [Player; 2],
    /// Side of every awarded point, in order.
    history: Vec<Side>,
}

impl Game {
    /// Creates a new game at Love-All.
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self::from_points(player_one, 0, player_two, 0)
    }

    /// Creates a game resumed at the given point counts.
    ///
    /// The point history starts empty; only points awarded afterwards are
    /// recorded.
    pub fn from_points(
        player_one: impl Into<String>,
        points_one: u32,
        player_two: impl Into<String>,
        points_two: u32,
    ) -> Self {
        Game {
            players: [
                Player::with_points(player_one, points_one),
                Player::with_points(player_two, points_two),
            ],
            history: Vec::new(),
        }
    }

    /// Returns the player on the given side.
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// Returns both players, indexed by [`Side::index`].
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the points won by the given side.
    pub fn points(&self, side: Side) -> u32 {
        self.player(side).points()
    }

    /// Returns the side of the first player called `name`.
    pub fn side_of(&self, name: &str) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.player(side).name() == name)
    }

    /// Awards one point to the player called `name`.
    ///
    /// Returns the side that won the point, or `None` if no player has that
    /// name, in which case nothing changes. When both players share a name,
    /// player one gets the point.
    pub fn award_point(&mut self, name: &str) -> Option<Side> {
        let Some(side) = self.side_of(name) else {
            tracing::debug!(player = name, "ignoring point for unknown player");
            return None;
        };

        let player = &mut self.players[side.index()];
        player.won_point();
        self.history.push(side);
        tracing::debug!(player = name, %side, points = player.points(), "point awarded");
        Some(side)
    }

    /// Returns the side of every awarded point, in order.
    pub fn point_history(&self) -> &[Side] {
        &self.history
    }

    /// Returns the number of points awarded since the game was created.
    pub fn points_played(&self) -> usize {
        self.history.len()
    }

    /// Returns the structured score.
    pub fn score(&self) -> Result<Score, ScoreError> {
        let (one, two) = (self.points(Side::One), self.points(Side::Two));
        StandardScoring.score(one, two).map_err(|err| {
            tracing::warn!(one, two, "{}", err);
            err
        })
    }

    /// Returns the current call, e.g. "Thirty-Fifteen" or "Advantage Rafa".
    pub fn current_score(&self) -> Result<String, ScoreError> {
        Ok(self.score()?.text(&self.players))
    }

    /// Returns the side with more points, or `None` when level.
    pub fn leader(&self) -> Option<Side> {
        StandardScoring.leader(self.points(Side::One), self.points(Side::Two))
    }

    /// Returns the side that has won the game, if any.
    pub fn winner(&self) -> Option<Side> {
        StandardScoring.winner(self.points(Side::One), self.points(Side::Two))
    }

    /// Returns true if one side has won.
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current_score() {
            Ok(text) => f.write_str(&text),
            Err(err) => write!(f, "{}", err),
        }
    }
}
