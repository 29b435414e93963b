//! Called point levels.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when converting a point count into a call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PointError {
    #[error("no call for {0} points: only 0 through 3 are called")]
    OutOfRange(u32),
}

/// The four called point levels below game point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Point {
    Love = 0,
    Fifteen = 1,
    Thirty = 2,
    Forty = 3,
}

impl Point {
    /// All point levels in order.
    pub const ALL: [Point; 4] = [Point::Love, Point::Fifteen, Point::Thirty, Point::Forty];

    /// Returns the call for a raw point count, or `None` past Forty.
    #[inline]
    pub const fn from_count(points: u32) -> Option<Point> {
        match points {
            0 => Some(Point::Love),
            1 => Some(Point::Fifteen),
            2 => Some(Point::Thirty),
            3 => Some(Point::Forty),
            _ => None,
        }
    }

    /// Returns the number of points this call stands for.
    #[inline]
    pub const fn count(self) -> u32 {
        self as u32
    }

    /// Returns the call as spoken for one player ("Love", "Fifteen", ...).
    pub const fn name(self) -> &'static str {
        match self {
            Point::Love => "Love",
            Point::Fifteen => "Fifteen",
            Point::Thirty => "Thirty",
            Point::Forty => "Forty",
        }
    }

    /// Returns the call when both players stand on this level.
    ///
    /// Forty all is called "Deuce".
    pub const fn tied_name(self) -> &'static str {
        match self {
            Point::Love => "Love-All",
            Point::Fifteen => "Fifteen-All",
            Point::Thirty => "Thirty-All",
            Point::Forty => "Deuce",
        }
    }
}

impl TryFrom<u32> for Point {
    type Error = PointError;

    fn try_from(points: u32) -> Result<Self, Self::Error> {
        Point::from_count(points).ok_or(PointError::OutOfRange(points))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
