//! Configuration file loading for setting up a game.
//!
//! This module provides types and functions for loading the player names of
//! a game from TOML files.

use crate::Game;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tennis_core::Side;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A player name is empty or only whitespace.
    #[error("Name for {0} is empty")]
    EmptyName(Side),
    /// Both players have the same name, so points could not be told apart.
    #[error("Both players are named {0}")]
    DuplicateName(String),
}

/// Player names for a new game.
///
/// ```toml
/// player_one = "Serena"
/// player_two = "Venus"
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Name of the first player. Defaults to "player1".
    #[serde(default = "default_player_one")]
    pub player_one: String,
    /// Name of the second player. Defaults to "player2".
    #[serde(default = "default_player_two")]
    pub player_two: String,
}

fn default_player_one() -> String {
    "player1".to_string()
}

fn default_player_two() -> String {
    "player2".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}

impl GameConfig {
    /// Loads the configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration file path, `tennis.toml` in the
    /// current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("tennis.toml")
    }

    /// Checks that both names are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyName`] for a blank name, or
    /// [`ConfigError::DuplicateName`] if both players share a name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_one.trim().is_empty() {
            return Err(ConfigError::EmptyName(Side::One));
        }
        if self.player_two.trim().is_empty() {
            return Err(ConfigError::EmptyName(Side::Two));
        }
        if self.player_one == self.player_two {
            return Err(ConfigError::DuplicateName(self.player_one.clone()));
        }
        Ok(())
    }
}

impl Game {
    /// Creates a new game from validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Game, ConfigError> {
        config.validate()?;
        tracing::info!(
            player_one = %config.player_one,
            player_two = %config.player_two,
            "starting game"
        );
        Ok(Game::new(
            config.player_one.as_str(),
            config.player_two.as_str(),
        ))
    }
}
