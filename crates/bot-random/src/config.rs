//! Configuration loading for bot-random.
//!
//! The only setting is which board representation backs every position.
//! It lives in `config.json` in the working directory.

use chess_engine::BoardKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or writing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read or write the configuration file.
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid JSON for [`EngineConfig`].
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board representation name, "array" or "bitboard".
    /// Defaults to "array" if not specified.
    #[serde(default = "default_board_representation")]
    pub board_representation: String,
}

fn default_board_representation() -> String {
    BoardKind::Array.as_str().to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            board_representation: default_board_representation(),
        }
    }
}

impl EngineConfig {
    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("config.json")
    }

    /// Loads the configuration at `path`, first writing a default file
    /// there if none exists.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: EngineConfig = serde_json::from_str(&content)?;
            tracing::info!(
                "Loaded config from {:?}, board representation '{}'",
                path,
                config.board_representation
            );
            return Ok(config);
        }

        let config = Self::default();
        std::fs::write(path, serde_json::to_string_pretty(&config)?)?;
        tracing::info!("No config found, wrote defaults to {:?}", path);
        Ok(config)
    }

    /// The configured board representation. Unknown names fall back to
    /// the array board.
    pub fn board_kind(&self) -> BoardKind {
        BoardKind::from_name(&self.board_representation).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown board representation '{}', using '{}'",
                self.board_representation,
                BoardKind::Array
            );
            BoardKind::Array
        })
    }
}
