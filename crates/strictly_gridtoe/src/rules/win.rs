//! Win-line generation and win detection for N×N boards.

use crate::{Board, Cell, Dimension, Player};
use serde::Serialize;
use tracing::instrument;

/// Which line of the board a [`WinCondition`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineKind {
    /// Row `i`, top to bottom.
    Row(usize),
    /// Column `i`, left to right.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// One winning line: N distinct board indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinCondition {
    kind: LineKind,
    indices: Vec<usize>,
}

impl WinCondition {
    /// The line this condition covers.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Board indices along the line, in order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the player holding every cell of this line, if one does.
    ///
    /// Indices that fall outside `board` never satisfy the line.
    pub fn holder(&self, board: &Board) -> Option<Player> {
        let (first, rest) = self.indices.split_first()?;
        let player = board.get(*first)?.player()?;
        rest.iter()
            .all(|i| board.get(*i) == Some(Cell::Occupied(player)))
            .then_some(player)
    }
}

/// Every winning line for one dimension, in generation order.
///
/// Order: row 0, column 0, row 1, column 1, ... row N-1, column N-1,
/// then the diagonal and the anti-diagonal. Evaluation scans in this
/// order and the first satisfied line decides the reported winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinConditionSet {
    dimension: Dimension,
    conditions: Vec<WinCondition>,
}

impl WinConditionSet {
    /// Generates the 2N + 2 winning lines for `dimension`.
    #[instrument]
    pub fn generate(dimension: Dimension) -> Self {
        let n = dimension.get();
        let mut conditions = Vec::with_capacity(dimension.line_count());

        for i in 0..n {
            conditions.push(WinCondition {
                kind: LineKind::Row(i),
                indices: (0..n).map(|j| i * n + j).collect(),
            });
            conditions.push(WinCondition {
                kind: LineKind::Column(i),
                indices: (0..n).map(|j| j * n + i).collect(),
            });
        }

        conditions.push(WinCondition {
            kind: LineKind::Diagonal,
            indices: (0..n).map(|i| i * n + i).collect(),
        });
        conditions.push(WinCondition {
            kind: LineKind::AntiDiagonal,
            indices: (0..n).map(|i| i * n + (n - 1 - i)).collect(),
        });

        Self {
            dimension,
            conditions,
        }
    }

    /// Dimension these lines were generated for.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// All lines in generation order.
    pub fn conditions(&self) -> &[WinCondition] {
        &self.conditions
    }

    /// Number of lines (always 2N + 2).
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether the set holds no lines.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Returns the first satisfied line in generation order and its holder.
#[instrument(skip_all)]
pub fn winning_line<'a>(
    board: &Board,
    conditions: &'a WinConditionSet,
) -> Option<(&'a WinCondition, Player)> {
    conditions
        .conditions()
        .iter()
        .find_map(|condition| condition.holder(board).map(|player| (condition, player)))
}

/// Checks if there is a winner on the board.
///
/// Returns the holder of the earliest satisfied line, `None` otherwise.
#[instrument(skip_all)]
pub fn check_winner(board: &Board, conditions: &WinConditionSet) -> Option<Player> {
    winning_line(board, conditions).map(|(_, player)| player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn dim(n: usize) -> Dimension {
        Dimension::new(n).unwrap()
    }

    fn board_with(n: usize, marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new(dim(n));
        for (index, player) in marks {
            assert!(board.place(*index, *player));
        }
        board
    }

    #[test]
    fn test_classic_lines_in_generation_order() {
        let set = WinConditionSet::generate(Dimension::CLASSIC);
        let lines: Vec<Vec<usize>> = set
            .conditions()
            .iter()
            .map(|c| c.indices().to_vec())
            .collect();
        assert_eq!(
            lines,
            vec![
                vec![0, 1, 2],
                vec![0, 3, 6],
                vec![3, 4, 5],
                vec![1, 4, 7],
                vec![6, 7, 8],
                vec![2, 5, 8],
                vec![0, 4, 8],
                vec![2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_kinds_follow_indices() {
        let set = WinConditionSet::generate(dim(4));
        assert_eq!(set.conditions()[0].kind(), LineKind::Row(0));
        assert_eq!(set.conditions()[1].kind(), LineKind::Column(0));
        assert_eq!(set.conditions()[7].kind(), LineKind::Column(3));
        assert_eq!(set.conditions()[8].kind(), LineKind::Diagonal);
        assert_eq!(set.conditions()[9].kind(), LineKind::AntiDiagonal);
        assert_eq!(set.conditions()[9].indices(), &[3, 6, 9, 12]);
    }

    #[test]
    fn test_every_dimension_shape() {
        for dimension in Dimension::ALL {
            let n = dimension.get();
            let set = WinConditionSet::generate(dimension);
            assert_eq!(set.len(), 2 * n + 2);

            let distinct: HashSet<&[usize]> =
                set.conditions().iter().map(|c| c.indices()).collect();
            assert_eq!(distinct.len(), 2 * n + 2);

            for condition in set.conditions() {
                let unique: HashSet<usize> = condition.indices().iter().copied().collect();
                assert_eq!(unique.len(), n);
                assert!(condition.indices().iter().all(|i| *i < n * n));
            }
        }
    }

    #[test]
    fn test_rows_and_columns_partition_board() {
        for dimension in Dimension::ALL {
            let n = dimension.get();
            let set = WinConditionSet::generate(dimension);

            let mut rows: Vec<usize> = set
                .conditions()
                .iter()
                .filter(|c| matches!(c.kind(), LineKind::Row(_)))
                .flat_map(|c| c.indices().iter().copied())
                .collect();
            let mut cols: Vec<usize> = set
                .conditions()
                .iter()
                .filter(|c| matches!(c.kind(), LineKind::Column(_)))
                .flat_map(|c| c.indices().iter().copied())
                .collect();
            rows.sort_unstable();
            cols.sort_unstable();

            let all: Vec<usize> = (0..n * n).collect();
            assert_eq!(rows, all);
            assert_eq!(cols, all);
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let set = WinConditionSet::generate(Dimension::CLASSIC);
        assert_eq!(check_winner(&Board::new(Dimension::CLASSIC), &set), None);
    }

    #[test]
    fn test_winner_top_row() {
        let set = WinConditionSet::generate(Dimension::CLASSIC);
        let board = board_with(3, &[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(check_winner(&board, &set), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal_large_board() {
        let set = WinConditionSet::generate(dim(5));
        let marks: Vec<_> = [4, 8, 12, 16, 20].iter().map(|i| (*i, Player::O)).collect();
        let board = board_with(5, &marks);
        let (line, player) = winning_line(&board, &set).unwrap();
        assert_eq!(player, Player::O);
        assert_eq!(line.kind(), LineKind::AntiDiagonal);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let set = WinConditionSet::generate(dim(4));
        let board = board_with(4, &[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(check_winner(&board, &set), None);
    }

    #[test]
    fn test_mixed_line_not_a_win() {
        let set = WinConditionSet::generate(Dimension::CLASSIC);
        let board = board_with(3, &[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(check_winner(&board, &set), None);
    }

    #[test]
    fn test_earliest_line_reported() {
        // X completes row 0 and column 0 at once; row 0 comes first.
        let set = WinConditionSet::generate(Dimension::CLASSIC);
        let board = board_with(
            3,
            &[
                (0, Player::X),
                (1, Player::X),
                (2, Player::X),
                (3, Player::X),
                (6, Player::X),
            ],
        );
        let (line, _) = winning_line(&board, &set).unwrap();
        assert_eq!(line.kind(), LineKind::Row(0));
    }

    #[test]
    fn test_mismatched_board_is_never_a_win() {
        let set = WinConditionSet::generate(dim(4));
        let board = board_with(3, &[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(check_winner(&board, &set), None);
    }
}
