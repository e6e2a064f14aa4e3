//! File-based configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_gridtoe::Dimension;
use tracing::{debug, info, instrument};

/// Settings read from a TOML file; every field has a default.
///
/// ```toml
/// default_dimension = 5
/// disclosure_delay_ms = 1500
/// log_filter = "strictly_gridtoe=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GridtoeConfig {
    /// Board side length for the first game (3-9).
    #[serde(default = "default_dimension")]
    default_dimension: usize,

    /// Milliseconds between a game ending and its result being shown.
    #[serde(default = "default_disclosure_delay_ms")]
    disclosure_delay_ms: u64,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_dimension() -> usize {
    Dimension::CLASSIC.get()
}

#[instrument]
fn default_disclosure_delay_ms() -> u64 {
    2000
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GridtoeConfig {
    fn default() -> Self {
        Self {
            default_dimension: default_dimension(),
            disclosure_delay_ms: default_disclosure_delay_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl GridtoeConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.dimension()?;
        info!(
            dimension = config.default_dimension,
            delay_ms = config.disclosure_delay_ms,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Overrides the starting dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.default_dimension = dimension;
        self
    }

    /// Overrides the disclosure delay.
    pub fn with_disclosure_delay_ms(mut self, delay_ms: u64) -> Self {
        self.disclosure_delay_ms = delay_ms;
        self
    }

    /// The starting dimension, validated.
    #[instrument(skip(self))]
    pub fn dimension(&self) -> Result<Dimension, ConfigError> {
        Dimension::new(self.default_dimension)
            .map_err(|e| ConfigError::new(format!("Invalid default_dimension: {}", e)))
    }

    /// The disclosure delay as a duration.
    pub fn disclosure_delay(&self) -> Duration {
        Duration::from_millis(self.disclosure_delay_ms)
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
