//! Player side representation.

use serde::{Deserialize, Serialize};

/// Represents the two players in a game, in construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    One = 0,
    Two = 1,
}

impl Side {
    /// Both sides in construction order.
    pub const ALL: [Side; 2] = [Side::One, Side::Two];

    /// Returns the other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Returns the index (0 for One, 1 for Two).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::One => write!(f, "player one"),
            Side::Two => write!(f, "player two"),
        }
    }
}
