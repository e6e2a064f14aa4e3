//! Strictly Gridtoe terminal front end
//!
//! A thin observer of the [`strictly_gridtoe`] rule engine: it parses line
//! commands, renders snapshots and drives the delayed result disclosure
//! from an async event loop.
//!
//! # Example
//!
//! ```no_run
//! use strictly_gridtoe_cli::{App, GridtoeConfig};
//! use tokio::io::BufReader;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let app = App::from_config(&GridtoeConfig::default(), false)?;
//! app.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod command;
mod config;
pub mod render;

pub use app::{App, Flow};
pub use cli::Cli;
pub use command::{Command, CommandError, HELP};
pub use config::{ConfigError, GridtoeConfig};
