//! Read-only views handed to presentation layers.

use crate::{Cell, Dimension, GridScores, Player};
use derive_getters::Getters;
use serde::Serialize;

/// Everything a front end needs to draw the current game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct SessionSnapshot {
    /// Side length of the board in play.
    dimension: Dimension,
    /// Cells in row-major order, N² of them.
    board: Vec<Cell>,
    /// Player whose mark the next selection places.
    active_player: Player,
    /// True from the move that ends the game until the next reset.
    is_terminal: bool,
    /// "Player X wins", "Player O wins" or "Draw", once disclosed.
    result_message: Option<String>,
    /// Dimension the next new game will use.
    staged_dimension: Dimension,
    /// Scores for the dimension in play.
    scores: GridScores,
}

impl SessionSnapshot {
    pub(crate) fn new(
        session: &crate::GameSession,
        staged_dimension: Dimension,
        scores: GridScores,
    ) -> Self {
        Self {
            dimension: session.dimension(),
            board: session.board().cells().to_vec(),
            active_player: session.active_player(),
            is_terminal: session.is_terminal(),
            result_message: session.result_message(),
            staged_dimension,
            scores,
        }
    }
}
