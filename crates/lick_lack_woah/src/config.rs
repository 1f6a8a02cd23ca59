//! Game configuration from an optional TOML file plus CLI overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use lick_lack_rules::Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for one game.
///
/// Every field is optional; the defaults give a coin-flip mark, a
/// fresh random seed and an instant computer opponent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Seed for the game RNG.
    #[serde(default)]
    seed: Option<u64>,

    /// Force the user's mark instead of flipping a coin.
    #[serde(default)]
    user_mark: Option<Mark>,

    /// Milliseconds the computer waits before moving.
    #[serde(default)]
    ai_delay_ms: u64,
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the effective configuration: file first, flags on top.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(seed) = cli.seed {
            config.seed = Some(seed);
        }
        if let Some(mark) = cli.mark {
            config.user_mark = Some(mark);
        }
        if let Some(delay) = cli.ai_delay_ms {
            config.ai_delay_ms = delay;
        }

        Ok(config)
    }

    /// Computer thinking delay.
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
