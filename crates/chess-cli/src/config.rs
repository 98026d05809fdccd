//! Configuration file loading.
//!
//! Settings come from `chess.toml` in the current directory unless another
//! path is given on the command line. Every field is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The log level is not one of trace, debug, info, warn, error.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// How the board is drawn.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Draw pieces with Unicode chess symbols instead of FEN letters.
    #[serde(default = "default_true")]
    pub unicode: bool,
    /// Print "White Home Rank" / "Black Home Rank" beside the board.
    #[serde(default = "default_true")]
    pub rank_labels: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            unicode: true,
            rank_labels: true,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChessConfig {
    /// Maximum level of log events written to stderr. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Position to start from, as FEN. Defaults to the standard layout.
    #[serde(default)]
    pub start_fen: Option<String>,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ChessConfig {
    fn default() -> Self {
        ChessConfig {
            log_level: default_log_level(),
            start_fen: None,
            display: DisplayConfig::default(),
        }
    }
}

impl ChessConfig {
    /// Returns the default path of the configuration file.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses the configured log level.
    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
