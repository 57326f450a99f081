//! Game configuration: the inclusive range the secret number is drawn from.

use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Inclusive range of secret numbers for a game session.
///
/// Defaults reproduce the classic 1-to-5 game.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GameConfig {
    /// Smallest secret number.
    #[serde(default = "default_min")]
    min: i64,

    /// Largest secret number.
    #[serde(default = "default_max")]
    max: i64,
}

fn default_min() -> i64 {
    1
}

fn default_max() -> i64 {
    5
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration, rejecting an empty range.
    #[instrument]
    pub fn new(min: i64, max: i64) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::new(format!(
                "min ({min}) must not exceed max ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config: {e}")))?;

        info!(min = config.min, max = config.max, "config loaded");
        Self::new(config.min, config.max)
    }

    /// Resolves the effective configuration: the file (if given), then
    /// explicit overrides, then validation.
    #[instrument]
    pub fn resolve(
        path: Option<&Path>,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Self::new(min.unwrap_or(base.min), max.unwrap_or(base.max))
    }

    /// Smallest secret number.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Largest secret number.
    pub fn max(&self) -> i64 {
        self.max
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("invalid configuration: {message}")]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    /// Creates a new configuration error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
