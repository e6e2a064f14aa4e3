//! Terminal consistency invariant: the phase matches what the board shows.

use super::Invariant;
use crate::rules::{check_winner, is_full};
use crate::{GameSession, Outcome, Phase};

/// Invariant: a session is terminal exactly when its board is decided.
///
/// A decided board has a completed line or no empty cell. A terminal
/// session's outcome is the one the board shows.
pub struct TerminalConsistentInvariant;

impl Invariant<GameSession> for TerminalConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let shown = match check_winner(session.board(), session.win_conditions()) {
            Some(winner) => Some(Outcome::Winner(winner)),
            None if is_full(session.board()) => Some(Outcome::Draw),
            None => None,
        };

        match session.phase() {
            Phase::AwaitingMove => shown.is_none(),
            Phase::Terminal(terminal) => shown == Some(terminal.outcome()),
        }
    }

    fn description() -> &'static str {
        "Session is terminal exactly when the board shows a win or draw"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dimension, Phase, Player, TerminalPhase};

    #[test]
    fn test_holds_through_a_game() {
        let mut session = GameSession::new(Dimension::CLASSIC);
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            session.select_cell(index);
            assert!(TerminalConsistentInvariant::holds(&session));
        }
        assert_eq!(session.pending_outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_unreported_win_violates() {
        let mut session = GameSession::new(Dimension::CLASSIC);
        for index in [0, 3, 1, 4, 2] {
            session.select_cell(index);
        }
        session.phase = Phase::AwaitingMove;
        assert!(!TerminalConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_wrong_outcome_violates() {
        let mut session = GameSession::new(Dimension::CLASSIC);
        for index in [0, 3, 1, 4, 2] {
            session.select_cell(index);
        }
        session.phase = Phase::Terminal(TerminalPhase::Pending(Outcome::Winner(Player::O)));
        assert!(!TerminalConsistentInvariant::holds(&session));
    }
}
