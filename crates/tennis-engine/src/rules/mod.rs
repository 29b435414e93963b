//! Scoring rules abstraction.
//!
//! This module provides the [`ScoringRules`] trait which maps the two point
//! counts of a game to a [`Score`]. [`Game`](crate::Game) delegates every
//! scoring decision to [`StandardScoring`].

mod standard;

pub use standard::{StandardScoring, GAME_POINT, WINNING_MARGIN};

use crate::{Score, ScoreError};
use std::cmp::Ordering;
use tennis_core::Side;

/// Trait for turning point counts into a score.
///
/// # Example
///
/// ```
/// use tennis_engine::rules::{ScoringRules, StandardScoring};
/// use tennis_engine::{Score, Side};
///
/// let score = StandardScoring.score(4, 3).unwrap();
/// assert_eq!(score, Score::Advantage(Side::One));
/// assert!(!StandardScoring.is_game_over(4, 3));
/// ```
pub trait ScoringRules {
    /// Returns the score for the given point counts.
    fn score(&self, one: u32, two: u32) -> Result<Score, ScoreError>;

    /// Returns the side with more points, or `None` when level.
    fn leader(&self, one: u32, two: u32) -> Option<Side> {
        match one.cmp(&two) {
            Ordering::Greater => Some(Side::One),
            Ordering::Less => Some(Side::Two),
            Ordering::Equal => None,
        }
    }

    /// Returns the side that has won, if the game is over.
    fn winner(&self, one: u32, two: u32) -> Option<Side> {
        self.score(one, two).ok().and_then(Score::winner)
    }

    /// Returns true if one side has won.
    fn is_game_over(&self, one: u32, two: u32) -> bool {
        self.winner(one, two).is_some()
    }
}
