//! Session phases and game outcomes.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Sub-phase of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalPhase {
    /// Outcome known, not yet scored or shown.
    Pending(Outcome),
    /// Outcome scored and visible.
    Resolved(Outcome),
}

impl TerminalPhase {
    /// The outcome, whichever sub-phase holds it.
    pub fn outcome(&self) -> Outcome {
        match self {
            TerminalPhase::Pending(outcome) | TerminalPhase::Resolved(outcome) => *outcome,
        }
    }
}

/// Where a session sits in its move/end-of-game cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting moves.
    #[default]
    AwaitingMove,
    /// Game over; no further moves accepted.
    Terminal(TerminalPhase),
}

impl Phase {
    /// Returns true once the game has ended, pending or resolved.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Terminal(_))
    }

    /// The outcome waiting for disclosure, if any.
    pub fn pending_outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Terminal(TerminalPhase::Pending(outcome)) => Some(*outcome),
            _ => None,
        }
    }

    /// The disclosed outcome, if any.
    pub fn resolved_outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Terminal(TerminalPhase::Resolved(outcome)) => Some(*outcome),
            _ => None,
        }
    }
}

/// Identifies one game on a board, from reset to reset.
///
/// Disclosures carry the episode that produced them so a stale timer can
/// never commit into a later game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("episode {}", _0)]
pub struct EpisodeId(u64);

impl EpisodeId {
    /// The episode after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Winner(Player::X).to_string(), "Player X wins");
        assert_eq!(Outcome::Winner(Player::O).to_string(), "Player O wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_phase_queries() {
        let pending = Phase::Terminal(TerminalPhase::Pending(Outcome::Draw));
        assert!(pending.is_terminal());
        assert_eq!(pending.pending_outcome(), Some(Outcome::Draw));
        assert_eq!(pending.resolved_outcome(), None);

        let resolved = Phase::Terminal(TerminalPhase::Resolved(Outcome::Winner(Player::O)));
        assert_eq!(resolved.pending_outcome(), None);
        assert_eq!(resolved.resolved_outcome(), Some(Outcome::Winner(Player::O)));

        assert!(!Phase::AwaitingMove.is_terminal());
    }

    #[test]
    fn test_episode_ordering() {
        let first = EpisodeId::default();
        assert!(first.next() > first);
    }
}
