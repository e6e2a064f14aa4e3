//! Cumulative per-dimension scores.

use crate::{Dimension, Outcome, Player};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Win and game counters for one board dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridScores {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Games completed, draws included.
    pub total_games: u32,
}

impl GridScores {
    /// Games that ended without a winner.
    pub fn draws(&self) -> u32 {
        self.total_games
            .saturating_sub(self.x_wins.saturating_add(self.o_wins))
    }

    /// Wins credited to `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Counters after one more game ending in `outcome`.
    fn record(self, outcome: Outcome) -> Self {
        let mut next = self;
        match outcome {
            Outcome::Winner(Player::X) => next.x_wins += 1,
            Outcome::Winner(Player::O) => next.o_wins += 1,
            Outcome::Draw => {}
        }
        next.total_games += 1;
        next
    }
}

/// Scores for every dimension played since the process started.
///
/// Entries appear on the first completed game in a dimension; reading an
/// unplayed dimension yields zeros without creating anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreLedger {
    entries: BTreeMap<Dimension, GridScores>,
}

impl ScoreLedger {
    /// Creates an empty ledger.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores for `dimension`, zero if no game finished there yet.
    pub fn get(&self, dimension: Dimension) -> GridScores {
        self.entries.get(&dimension).copied().unwrap_or_default()
    }

    /// Records one completed game and returns the updated entry.
    ///
    /// Called once per finished game, at disclosure. The entry is read,
    /// updated and written back as a whole.
    #[instrument(skip(self))]
    pub fn commit(&mut self, dimension: Dimension, outcome: Outcome) -> GridScores {
        let updated = self.get(dimension).record(outcome);
        self.entries.insert(dimension, updated);
        info!(
            %dimension,
            x_wins = updated.x_wins,
            o_wins = updated.o_wins,
            total_games = updated.total_games,
            "Score committed"
        );
        updated
    }

    /// Played dimensions and their scores, smallest dimension first.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, GridScores)> + '_ {
        self.entries.iter().map(|(d, s)| (*d, *s))
    }

    /// Number of dimensions with at least one completed game.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no game has completed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dim(n: usize) -> Dimension {
        Dimension::new(n).unwrap()
    }

    #[test]
    fn test_get_absent_is_zero_and_does_not_insert() {
        let ledger = ScoreLedger::new();
        assert_eq!(ledger.get(dim(5)), GridScores::default());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_commit_win() {
        let mut ledger = ScoreLedger::new();
        let scores = ledger.commit(dim(3), Outcome::Winner(Player::X));
        assert_eq!(
            scores,
            GridScores {
                x_wins: 1,
                o_wins: 0,
                total_games: 1
            }
        );
        assert_eq!(ledger.get(dim(3)), scores);
    }

    #[test]
    fn test_commit_draw_only_counts_game() {
        let mut ledger = ScoreLedger::new();
        ledger.commit(dim(4), Outcome::Winner(Player::O));
        let scores = ledger.commit(dim(4), Outcome::Draw);
        assert_eq!(scores.o_wins, 1);
        assert_eq!(scores.x_wins, 0);
        assert_eq!(scores.total_games, 2);
        assert_eq!(scores.draws(), 1);
    }

    #[test]
    fn test_each_player_credited() {
        use strum::IntoEnumIterator;

        let mut ledger = ScoreLedger::new();
        for player in Player::iter() {
            ledger.commit(dim(5), Outcome::Winner(player));
        }
        let scores = ledger.get(dim(5));
        for player in Player::iter() {
            assert_eq!(scores.wins(player), 1);
        }
        assert_eq!(scores.total_games, 2);
        assert_eq!(scores.draws(), 0);
    }

    #[test]
    fn test_dimensions_are_independent() {
        let mut ledger = ScoreLedger::new();
        ledger.commit(dim(3), Outcome::Winner(Player::X));
        ledger.commit(dim(7), Outcome::Winner(Player::O));

        assert_eq!(ledger.get(dim(3)).wins(Player::X), 1);
        assert_eq!(ledger.get(dim(3)).wins(Player::O), 0);
        assert_eq!(ledger.get(dim(7)).wins(Player::O), 1);
        assert_eq!(ledger.len(), 2);

        let order: Vec<usize> = ledger.iter().map(|(d, _)| d.get()).collect();
        assert_eq!(order, vec![3, 7]);
    }
}
