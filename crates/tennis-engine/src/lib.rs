//! Score tracking for a single game of tennis.
//!
//! This crate provides:
//! - [`Game`] - Two named players and their point counts, rendered as the
//!   umpire's call ("Love-All", "Thirty-Fifteen", "Deuce", "Advantage ...")
//! - [`Score`] - The structured score a call is rendered from
//! - [`ScoringRules`] - Trait mapping two point counts to a [`Score`]
//! - [`GameConfig`] - TOML configuration for setting up a game
//! - [`GameSnapshot`] - Serializable record of a game in progress
//!
//! # Example
//!
//! ```
//! use tennis_engine::Game;
//!
//! let mut game = Game::new("Serena", "Venus");
//! assert_eq!(game.current_score().unwrap(), "Love-All");
//!
//! game.award_point("Serena");
//! assert_eq!(game.current_score().unwrap(), "Fifteen-Love");
//!
//! // Names that match neither player are ignored.
//! game.award_point("Steffi");
//! assert_eq!(game.current_score().unwrap(), "Fifteen-Love");
//! ```
//!
//! Logging goes through [`tracing`]; the embedding application decides
//! whether and where events are recorded.

pub mod config;
mod game;
pub mod rules;
mod score;
pub mod snapshot;

pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use rules::{ScoringRules, StandardScoring};
pub use score::{Score, ScoreError};
pub use snapshot::{GameSnapshot, SnapshotError};
pub use tennis_core::{Player, Point, PointError, Side};
