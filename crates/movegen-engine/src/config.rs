//! Session configuration.
//!
//! Settings are read from a TOML file. Every field has a default, so an
//! empty file (or a missing one) yields the standard opening with White to
//! move and strict piece letters.

use movegen_core::{BoardError, Color, FenParser, UnknownLetterPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configured start position is not a valid board description.
    #[error("invalid start position: {0}")]
    Board(#[from] BoardError),
}

/// Settings for a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Board description to set up. Defaults to the standard opening.
    #[serde(default = "default_start_position")]
    pub start_position: String,
    /// Side that moves first. Defaults to White.
    #[serde(default = "default_first_to_move")]
    pub first_to_move: Color,
    /// How the board description parser treats unknown piece letters.
    /// Defaults to rejecting them.
    #[serde(default)]
    pub unknown_letters: UnknownLetterPolicy,
}

fn default_start_position() -> String {
    FenParser::STARTPOS.to_string()
}

fn default_first_to_move() -> Color {
    Color::White
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            start_position: default_start_position(),
            first_to_move: default_first_to_move(),
            unknown_letters: UnknownLetterPolicy::default(),
        }
    }
}

impl SessionConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a file, falling back to the defaults when
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if it contains invalid TOML.
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

    /// Returns a board description parser using the configured policy.
    pub fn parser(&self) -> FenParser {
        FenParser::new(self.unknown_letters)
    }
}
