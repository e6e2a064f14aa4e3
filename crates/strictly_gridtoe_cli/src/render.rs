//! Plain-text rendering of session snapshots.

use strictly_gridtoe::{Cell, Dimension, GridScores, Player, ScoreLedger, SessionSnapshot};

/// Draws the board; empty cells show their 1-based number.
///
/// ```text
/// X|2|3
/// -+-+-
/// 4|O|6
/// -+-+-
/// 7|8|9
/// ```
pub fn board(snapshot: &SessionSnapshot) -> String {
    let n = snapshot.dimension().get();
    let width = (n * n).to_string().len();
    let separator = vec!["-".repeat(width); n].join("+");

    snapshot
        .board()
        .chunks(n)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let label = match cell {
                        Cell::Empty => (row * n + col + 1).to_string(),
                        Cell::Occupied(player) => player.to_string(),
                    };
                    format!("{:>width$}", label)
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", separator))
}

/// One-line score summary for a dimension.
pub fn scores(dimension: Dimension, scores: &GridScores) -> String {
    format!(
        "Games: {} (grid {}x{})  X: {}  O: {}",
        scores.total_games, dimension, dimension, scores.x_wins, scores.o_wins
    )
}

/// Score lines for every dimension in the ledger.
pub fn ledger(ledger: &ScoreLedger) -> String {
    if ledger.is_empty() {
        return "No games finished yet".to_string();
    }
    ledger
        .iter()
        .map(|(dimension, entry)| scores(dimension, &entry))
        .collect::<Vec<_>>()
        .join("\n")
}

fn turn(player: Player) -> String {
    format!("Turn: Player {}", player)
}

/// Full screen: scores, board, then the turn or the result.
pub fn screen(snapshot: &SessionSnapshot) -> String {
    let status = match snapshot.result_message() {
        Some(message) => message.clone(),
        None if *snapshot.is_terminal() => "Game over".to_string(),
        None => turn(*snapshot.active_player()),
    };

    let mut out = format!(
        "{}\n\n{}\n\n{}",
        scores(*snapshot.dimension(), snapshot.scores()),
        board(snapshot),
        status
    );
    if snapshot.staged_dimension() != snapshot.dimension() {
        out.push_str(&format!(
            "\n(next game: {}x{})",
            snapshot.staged_dimension(),
            snapshot.staged_dimension()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use strictly_gridtoe::GameController;

    #[test]
    fn test_empty_classic_board() {
        let controller = GameController::default();
        assert_eq!(board(&controller.snapshot()), "1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_marks_replace_numbers() {
        let mut controller = GameController::default();
        let now = Instant::now();
        controller.select_cell(0, now);
        controller.select_cell(4, now);
        assert_eq!(board(&controller.snapshot()), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_wide_labels_padded() {
        let mut controller = GameController::default();
        controller.set_pending_dimension(4).unwrap();
        controller.request_new_game();
        let drawn = board(&controller.snapshot());
        assert!(drawn.starts_with(" 1| 2| 3| 4\n--+--+--+--\n"));
        assert!(drawn.ends_with("13|14|15|16"));
    }

    #[test]
    fn test_screen_shows_turn_and_staged_size() {
        let mut controller = GameController::default();
        controller.set_pending_dimension(5).unwrap();
        let drawn = screen(&controller.snapshot());
        assert!(drawn.starts_with("Games: 0 (grid 3x3)  X: 0  O: 0"));
        assert!(drawn.contains("Turn: Player X"));
        assert!(drawn.ends_with("(next game: 5x5)"));
    }

    #[test]
    fn test_ledger_listing() {
        assert_eq!(ledger(&ScoreLedger::new()), "No games finished yet");
    }
}
