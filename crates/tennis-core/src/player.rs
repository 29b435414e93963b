//! A named player and their point count.

use crate::Point;
use serde::{Deserialize, Serialize};

/// A player in a single game.
///
/// The name is fixed at construction; the point count only moves up,
/// one point at a time, through [`Player::won_point`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    points: u32,
}

impl Player {
    /// Creates a player with no points.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_points(name, 0)
    }

    /// Creates a player already holding `points`.
    pub fn with_points(name: impl Into<String>, points: u32) -> Self {
        Player {
            name: name.into(),
            points,
        }
    }

    /// Returns the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of points won so far.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Records one more point for this player.
    pub fn won_point(&mut self) {
        self.points = self.points.saturating_add(1);
    }

    /// Returns the call for the current point count, if it has one.
    pub fn call(&self) -> Option<Point> {
        Point::from_count(self.points)
    }
}
