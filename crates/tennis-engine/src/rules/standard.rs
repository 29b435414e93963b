//! Standard single-game scoring.

use super::ScoringRules;
use crate::{Score, ScoreError};
use tennis_core::{Point, Side};

/// Points a player needs before the game can be decided.
pub const GAME_POINT: u32 = 4;

/// Lead required to win once either player reaches [`GAME_POINT`].
pub const WINNING_MARGIN: u32 = 2;

/// Standard tennis game scoring.
///
/// Branches are checked in order:
/// - Level scores are "Love-All", "Fifteen-All", "Thirty-All", then "Deuce"
/// - Once either player has [`GAME_POINT`] points, a one point lead is
///   advantage and a lead of [`WINNING_MARGIN`] wins
/// - Anything else is called point by point ("Thirty-Fifteen")
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScoring;

impl ScoringRules for StandardScoring {
    fn score(&self, one: u32, two: u32) -> Result<Score, ScoreError> {
        if one == two {
            return Ok(match Point::from_count(one) {
                Some(Point::Forty) | None => Score::Deuce,
                Some(level) => Score::All(level),
            });
        }

        if one >= GAME_POINT || two >= GAME_POINT {
            let leader = if one > two { Side::One } else { Side::Two };
            return Ok(if one.abs_diff(two) < WINNING_MARGIN {
                Score::Advantage(leader)
            } else {
                Score::Win(leader)
            });
        }

        let call = |points: u32| {
            Point::try_from(points)
                .map_err(|source| ScoreError::UnreachableState { one, two, source })
        };
        Ok(Score::Running {
            one: call(one)?,
            two: call(two)?,
        })
    }
}
