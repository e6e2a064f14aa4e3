//! Line commands typed at the prompt.

use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark a cell; holds the 0-based board index.
    Select(usize),
    /// Stage a board size for the next new game.
    Size(usize),
    /// Start a new game on the staged size.
    NewGame,
    /// Show scores for one size, or for every size played.
    Scores(Option<usize>),
    /// Redraw the board.
    Board,
    /// List the commands.
    Help,
    /// Leave.
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}", message)]
pub struct CommandError {
    /// What was wrong with the line.
    pub message: String,
}

impl CommandError {
    /// Creates a new command error.
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Usage text shown by `help`.
pub const HELP: &str = "\
Commands:
  <n> | select <n>   mark cell n (cells are numbered from 1)
  size <n>           use an n×n board (3-9) for the next game
  new                start a new game
  scores [n]         show scores for size n, or for every size played
  board              redraw the board
  help               show this text
  quit               leave";

fn number(word: Option<&str>, what: &str) -> Result<usize, CommandError> {
    let word = word.ok_or_else(|| CommandError::new(format!("Missing {}", what)))?;
    word.parse()
        .map_err(|_| CommandError::new(format!("Not a number: {}", word)))
}

fn cell(word: Option<&str>) -> Result<Command, CommandError> {
    match number(word, "cell number")? {
        0 => Err(CommandError::new("Cells are numbered from 1")),
        label => Ok(Command::Select(label - 1)),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::new("Empty command"));
        };

        let command = match head.to_lowercase().as_str() {
            "select" | "s" => cell(words.next())?,
            "size" => Command::Size(number(words.next(), "board size")?),
            "new" | "n" => Command::NewGame,
            "scores" => match words.next() {
                Some(word) => Command::Scores(Some(number(Some(word), "board size")?)),
                None => Command::Scores(None),
            },
            "board" | "b" => Command::Board,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ if head.chars().all(|c| c.is_ascii_digit()) => cell(Some(head))?,
            other => return Err(CommandError::new(format!("Unknown command: {}", other))),
        };

        if let Some(extra) = words.next() {
            return Err(CommandError::new(format!("Unexpected argument: {}", extra)));
        }
        Ok(command)
    }
}
