//! Draw detection logic.

use super::win::{WinConditionSet, check_winner};
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip_all)]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board on which no line is complete.
///
/// A board whose last move completes a line is a win, never a draw.
#[instrument(skip_all)]
pub fn is_draw(board: &Board, conditions: &WinConditionSet) -> bool {
    is_full(board) && check_winner(board, conditions).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Dimension, Player};

    fn classic(cells: &str) -> Board {
        let cells = cells
            .chars()
            .map(|c| match c {
                'X' => Cell::Occupied(Player::X),
                'O' => Cell::Occupied(Player::O),
                _ => Cell::Empty,
            })
            .collect();
        Board::from_cells(Dimension::CLASSIC, cells).unwrap()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(Dimension::CLASSIC)));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&classic("....X....")));
    }

    #[test]
    fn test_draw_detection() {
        let set = WinConditionSet::generate(Dimension::CLASSIC);
        // X O X / O X X / O X O
        assert!(is_draw(&classic("XOXOXXOXO"), &set));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let set = WinConditionSet::generate(Dimension::CLASSIC);
        // Full board whose diagonal is X.
        assert!(is_full(&classic("XOXOXOOXX")));
        assert!(!is_draw(&classic("XOXOXOOXX"), &set));
    }
}
