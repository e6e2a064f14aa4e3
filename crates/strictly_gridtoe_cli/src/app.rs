//! Terminal session loop: reads commands, drives the controller, redraws.

use crate::command::{Command, HELP};
use crate::config::{ConfigError, GridtoeConfig};
use crate::render;
use anyhow::Result;
use std::time::Instant;
use strictly_gridtoe::{Dimension, GameController, Rejection, SelectResult};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument};

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop the loop.
    Quit,
}

/// Terminal front end around a [`GameController`].
#[derive(Debug)]
pub struct App {
    controller: GameController,
    json: bool,
}

impl App {
    /// Creates the app from loaded configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GridtoeConfig, json: bool) -> Result<Self, ConfigError> {
        let controller = GameController::new(config.dimension()?, config.disclosure_delay());
        Ok(Self { controller, json })
    }

    /// Returns the controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Current screen, drawn or as a JSON line.
    pub fn view(&self) -> String {
        let snapshot = self.controller.snapshot();
        if self.json {
            json_line(&snapshot)
        } else {
            render::screen(&snapshot)
        }
    }

    /// Applies one command at `now` and returns what to print.
    #[instrument(skip(self, now))]
    pub fn handle(&mut self, command: Command, now: Instant) -> (Flow, String) {
        let text = match command {
            Command::Select(index) => match self.controller.select_cell(index, now) {
                SelectResult::Ignored(Rejection::OutOfRange(_)) => {
                    format!("Cell {} is off the board", index + 1)
                }
                SelectResult::Ignored(Rejection::Occupied(_)) => {
                    format!("Cell {} is already occupied", index + 1)
                }
                SelectResult::Ignored(Rejection::GameOver) => {
                    "Game is over; type `new` to play again".to_string()
                }
                SelectResult::Placed { .. } | SelectResult::Finished(_) => self.view(),
            },
            Command::Size(n) => match self.controller.set_pending_dimension(n) {
                Ok(dimension) => {
                    format!("Next game: {}x{} (type `new` to start)", dimension, dimension)
                }
                Err(e) => {
                    debug!(error = %e, "Size rejected");
                    size_error()
                }
            },
            Command::NewGame => {
                if let Some(outcome) = self.controller.request_new_game() {
                    info!(%outcome, "Previous game scored on new-game request");
                }
                self.view()
            }
            Command::Scores(None) => render::ledger(self.controller.ledger()),
            Command::Scores(Some(n)) => match Dimension::new(n) {
                Ok(dimension) => {
                    render::scores(dimension, &self.controller.scores(dimension))
                }
                Err(_) => size_error(),
            },
            Command::Board => self.view(),
            Command::Help => HELP.to_string(),
            Command::Quit => return (Flow::Quit, "Bye".to_string()),
        };
        (Flow::Continue, text)
    }

    /// Fires the result disclosure if it is due; returns the redraw.
    #[instrument(skip(self, now))]
    pub fn tick(&mut self, now: Instant) -> Option<String> {
        self.controller.poll(now).map(|_| self.view())
    }

    /// Runs until `quit` or end of input.
    ///
    /// A due disclosure is flushed at the top of every iteration and again
    /// before each command is applied, so buffered input never overtakes it.
    /// The timer branch of the `select!` only wakes the loop while idle.
    #[instrument(skip_all)]
    pub async fn run<R, W>(mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Starting terminal session");
        let mut lines = input.lines();
        write_block(&mut output, &self.view()).await?;

        loop {
            self.flush_disclosure(&mut output).await?;

            let deadline = self.controller.next_deadline();
            tokio::select! {
                biased;
                _ = wait_until(deadline) => continue,
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        info!("Input closed");
                        break;
                    };
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.flush_disclosure(&mut output).await?;
                    let (flow, text) = match line.parse::<Command>() {
                        Ok(command) => self.handle(command, now()),
                        Err(e) => (Flow::Continue, format!("{} (type `help`)", e)),
                    };
                    write_block(&mut output, &text).await?;
                    if flow == Flow::Quit {
                        break;
                    }
                }
            }
        }

        output.flush().await?;
        Ok(())
    }

    async fn flush_disclosure<W: AsyncWrite + Unpin>(&mut self, output: &mut W) -> Result<()> {
        if let Some(screen) = self.tick(now()) {
            write_block(output, &screen).await?;
        }
        Ok(())
    }
}

/// Current time on the runtime clock, which tests can pause and advance.
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

/// One JSON line, or a JSON error object if `value` does not serialize.
fn json_line<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
}

fn size_error() -> String {
    format!("Board size must be between {} and {}", Dimension::MIN, Dimension::MAX)
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(due) => tokio::time::sleep_until(tokio::time::Instant::from_std(due)).await,
        None => std::future::pending().await,
    }
}

async fn write_block<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n\n").await?;
    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app(delay_ms: u64) -> App {
        let config = GridtoeConfig::default().with_disclosure_delay_ms(delay_ms);
        App::from_config(&config, false).expect("valid config")
    }

    #[test]
    fn test_select_reports_rejections() {
        let mut app = app(2000);
        let now = Instant::now();
        app.handle(Command::Select(0), now);
        let (_, text) = app.handle(Command::Select(0), now);
        assert_eq!(text, "Cell 1 is already occupied");
        let (_, text) = app.handle(Command::Select(20), now);
        assert_eq!(text, "Cell 21 is off the board");
    }

    #[test]
    fn test_result_appears_after_tick() {
        let mut app = app(2000);
        let now = Instant::now();
        for index in [0, 3, 1, 4] {
            app.handle(Command::Select(index), now);
        }
        let (_, text) = app.handle(Command::Select(2), now);
        assert!(text.ends_with("Game over"));

        assert_eq!(app.tick(now + Duration::from_millis(500)), None);
        let screen = app.tick(now + Duration::from_secs(2)).expect("disclosed");
        assert!(screen.starts_with("Games: 1 (grid 3x3)  X: 1  O: 0"));
        assert!(screen.ends_with("Player X wins"));
    }

    #[test]
    fn test_size_then_new() {
        let mut app = app(2000);
        let now = Instant::now();
        let (_, text) = app.handle(Command::Size(12), now);
        assert_eq!(text, "Board size must be between 3 and 9");
        app.handle(Command::Size(4), now);
        let (_, text) = app.handle(Command::NewGame, now);
        assert!(text.contains("(grid 4x4)"));
        assert_eq!(app.controller().session().dimension().get(), 4);
    }

    #[test]
    fn test_quit() {
        let mut app = app(0);
        assert_eq!(app.handle(Command::Quit, Instant::now()).0, Flow::Quit);
    }

    #[test]
    fn test_json_view() {
        let app = App::from_config(&GridtoeConfig::default(), true).expect("valid config");
        let value: serde_json::Value = serde_json::from_str(&app.view()).expect("json line");
        assert_eq!(value["active_player"], "X");
    }

    #[test]
    fn test_json_error_line_stays_valid() {
        // Tuple keys cannot become JSON object keys.
        let unserializable = std::collections::BTreeMap::from([((1, "\"quoted\""), 0)]);
        let value: serde_json::Value =
            serde_json::from_str(&json_line(&unserializable)).expect("valid json");
        assert!(value["error"].is_string());
    }
}
