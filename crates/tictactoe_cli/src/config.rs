//! Display configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Board;
use tracing::{debug, info, instrument};

/// Symbols used to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Symbol for a cross mark.
    #[serde(default = "default_cross")]
    cross: String,

    /// Symbol for a circle mark.
    #[serde(default = "default_circle")]
    circle: String,

    /// Symbol for an empty cell.
    #[serde(default = "default_empty")]
    empty: String,
}

fn default_cross() -> String {
    "X".to_string()
}

fn default_circle() -> String {
    "O".to_string()
}

fn default_empty() -> String {
    ".".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cross: default_cross(),
            circle: default_circle(),
            empty: default_empty(),
        }
    }
}

impl DisplayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(cross = %config.cross, circle = %config.circle, "Config loaded");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Draws `board` with these symbols.
    pub fn render(&self, board: &Board) -> String {
        board.render(&self.cross, &self.circle, &self.empty)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
