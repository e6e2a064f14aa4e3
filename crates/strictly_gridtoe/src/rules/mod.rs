//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a board and a dimension's winning lines.
//! Rules are separated from board storage so the session and the
//! invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LineKind, WinCondition, WinConditionSet, check_winner, winning_line};
