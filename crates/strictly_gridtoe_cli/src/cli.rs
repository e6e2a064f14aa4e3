//! Command-line interface for strictly_gridtoe.

use crate::config::{ConfigError, GridtoeConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Strictly Gridtoe - N×N tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_gridtoe")]
#[command(about = "Two-player N×N tic-tac-toe with per-size scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length for the first game (3-9)
    #[arg(short, long)]
    pub dimension: Option<usize>,

    /// Milliseconds before a finished game's result is shown
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Print snapshots as JSON lines instead of a drawn board
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Reads the config file (if any) and applies flag overrides.
    #[instrument(skip(self))]
    pub fn load_config(&self) -> Result<GridtoeConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GridtoeConfig::from_file(path)?,
            None => GridtoeConfig::default(),
        };

        if let Some(dimension) = self.dimension {
            config = config.with_dimension(dimension);
        }
        if let Some(delay_ms) = self.delay_ms {
            config = config.with_disclosure_delay_ms(delay_ms);
        }

        config.dimension()?;
        Ok(config)
    }
}
