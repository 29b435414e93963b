//! Core types for tennis scoring.
//!
//! This crate provides the vocabulary shared by the scoring engine:
//! - [`Side`] for the two players of a game
//! - [`Point`] for the called point levels (Love through Forty)
//! - [`Player`] for a named player and their point count

mod player;
mod point;
mod side;

pub use player::Player;
pub use point::{Point, PointError};
pub use side::Side;
