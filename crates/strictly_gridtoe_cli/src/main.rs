//! Strictly Gridtoe - terminal N×N tic-tac-toe
//!
//! Two players share the keyboard; results and per-size scores are kept
//! for as long as the process runs.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_gridtoe_cli::{App, Cli};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        dimension = *config.default_dimension(),
        delay_ms = *config.disclosure_delay_ms(),
        "Starting Strictly Gridtoe"
    );

    let app = App::from_config(&config, cli.json)?;
    app.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}
