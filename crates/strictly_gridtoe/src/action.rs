//! Results of cell selection.
//!
//! Selecting a cell never fails. A move that cannot be played is absorbed
//! and reported as [`SelectResult::Ignored`], with the session untouched.

use crate::{Outcome, Player};
use serde::Serialize;

/// Why a selection was absorbed as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Rejection {
    /// Index is not on the board.
    #[display("Cell {} is off the board", _0)]
    OutOfRange(usize),
    /// Cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),
    /// The game has ended.
    #[display("Game is already over")]
    GameOver,
}

/// What a selection did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SelectResult {
    /// Mark placed; the game continues with the other player.
    Placed {
        /// Cell that was marked.
        index: usize,
        /// Player whose mark was placed.
        player: Player,
    },
    /// Mark placed and the game ended.
    Finished(Outcome),
    /// Nothing changed.
    Ignored(Rejection),
}

impl SelectResult {
    /// Returns true if the selection wrote a mark.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SelectResult::Ignored(_))
    }

    /// The outcome, if this move ended the game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            SelectResult::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }
}
