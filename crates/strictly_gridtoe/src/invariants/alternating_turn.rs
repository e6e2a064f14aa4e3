//! Alternating turn invariant: X moves first and turns alternate.

use super::Invariant;
use crate::{GameSession, Player};

/// Invariant: mark counts agree with the active player.
///
/// While awaiting a move, X and O counts are equal when X is to move and X
/// leads by one when O is to move. After the final move the active player
/// is the one who made it.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let x = session.board().count(Player::X);
        let o = session.board().count(Player::O);

        let x_moved_last = match session.active_player() {
            Player::X => session.is_terminal(),
            Player::O => !session.is_terminal(),
        };

        if x_moved_last { x == o + 1 } else { x == o }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
