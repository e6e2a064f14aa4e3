//! Strictly Gridtoe - N×N tic-tac-toe rule engine
//!
//! A deterministic two-player engine for square boards from 3×3 to 9×9:
//! winning-line generation, move validation, win/draw evaluation, turn
//! alternation and cumulative scores per board dimension.
//!
//! # Architecture
//!
//! - **Rules**: pure win-line generation and win/draw evaluation
//! - **Session**: board, turn and the end-of-game state machine
//! - **Ledger**: per-dimension score counters
//! - **Controller**: command surface for front ends and the delayed,
//!   cancellable result disclosure
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use strictly_gridtoe::{GameController, Outcome, Player};
//!
//! let mut controller = GameController::default();
//! let now = Instant::now();
//! for index in [0, 3, 1, 4, 2] {
//!     controller.select_cell(index, now);
//! }
//! assert!(*controller.snapshot().is_terminal());
//!
//! let outcome = controller.poll(now + Duration::from_secs(2));
//! assert_eq!(outcome, Some(Outcome::Winner(Player::X)));
//! assert_eq!(controller.current_scores().x_wins, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod error;
pub mod invariants;
mod ledger;
mod phases;
pub mod rules;
mod session;
mod snapshot;
mod types;

pub use action::{Rejection, SelectResult};
pub use controller::{GameController, ScheduledDisclosure};
pub use error::DimensionError;
pub use ledger::{GridScores, ScoreLedger};
pub use phases::{EpisodeId, Outcome, Phase, TerminalPhase};
pub use rules::{LineKind, WinCondition, WinConditionSet};
pub use session::GameSession;
pub use snapshot::SessionSnapshot;
pub use types::{Board, Cell, Dimension, Player};
