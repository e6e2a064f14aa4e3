//! Game session: the board, whose turn it is, and the end-of-game cycle.
//!
//! A session moves through three phases:
//!
//! - `AwaitingMove` accepts [`GameSession::select_cell`].
//! - `Terminal/Pending` is entered synchronously by the move that ends the
//!   game. Further selections are ignored from that instant on.
//! - `Terminal/Resolved` is entered by [`GameSession::resolve`], which scores
//!   the game in the ledger and makes the result message visible.
//!
//! Timing of the pending-to-resolved step belongs to the caller; see
//! [`crate::GameController`].

use crate::invariants::assert_invariants;
use crate::rules::{WinConditionSet, is_full, winning_line};
use crate::{
    Board, Dimension, EpisodeId, Outcome, Phase, Player, Rejection, ScoreLedger, SelectResult,
    TerminalPhase,
};
use tracing::{debug, info, instrument, warn};

/// The single live game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) win_conditions: WinConditionSet,
    pub(crate) active_player: Player,
    pub(crate) phase: Phase,
    episode: EpisodeId,
}

impl GameSession {
    /// Creates a session with an empty board, X to move.
    #[instrument]
    pub fn new(dimension: Dimension) -> Self {
        info!(%dimension, "Creating new game session");
        Self {
            board: Board::new(dimension),
            win_conditions: WinConditionSet::generate(dimension),
            active_player: Player::X,
            phase: Phase::AwaitingMove,
            episode: EpisodeId::default(),
        }
    }

    /// Side length of the current board.
    pub fn dimension(&self) -> Dimension {
        self.board.dimension()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Winning lines for the current dimension.
    pub fn win_conditions(&self) -> &WinConditionSet {
        &self.win_conditions
    }

    /// Player whose mark the next accepted selection places.
    ///
    /// Unchanged by the move that ends a game.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true from the instant a game ends until the next reset.
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Outcome decided but not yet disclosed.
    pub fn pending_outcome(&self) -> Option<Outcome> {
        self.phase.pending_outcome()
    }

    /// Current game's identity; changes on every reset.
    pub fn episode(&self) -> EpisodeId {
        self.episode
    }

    /// Human-readable result, present only once the game is resolved.
    pub fn result_message(&self) -> Option<String> {
        self.phase.resolved_outcome().map(|outcome| outcome.to_string())
    }

    /// Places the active player's mark at `index`.
    ///
    /// Off-board indices, occupied cells and any call after the game ended
    /// are ignored and leave the session unchanged. A win is checked before
    /// a full board, so a filling move that completes a line is a win.
    #[instrument(skip(self), fields(player = %self.active_player, episode = %self.episode))]
    pub fn select_cell(&mut self, index: usize) -> SelectResult {
        if let Some(rejection) = self.rejection(index) {
            debug!(%rejection, "Selection ignored");
            return SelectResult::Ignored(rejection);
        }

        let player = self.active_player;
        self.board.place(index, player);

        let result = if let Some((line, winner)) = winning_line(&self.board, &self.win_conditions)
        {
            info!(%winner, line = ?line.kind(), "Game won");
            self.finish(Outcome::Winner(winner))
        } else if is_full(&self.board) {
            info!("Game drawn");
            self.finish(Outcome::Draw)
        } else {
            self.active_player = player.opponent();
            SelectResult::Placed { index, player }
        };

        assert_invariants(self);
        result
    }

    /// Scores the pending outcome and makes it visible.
    ///
    /// Returns the outcome it committed; `None` (and no ledger change) when
    /// nothing is pending.
    #[instrument(skip(self, ledger), fields(episode = %self.episode))]
    pub fn resolve(&mut self, ledger: &mut ScoreLedger) -> Option<Outcome> {
        let outcome = self.pending_outcome()?;
        ledger.commit(self.dimension(), outcome);
        self.phase = Phase::Terminal(TerminalPhase::Resolved(outcome));
        info!(%outcome, "Result disclosed");
        Some(outcome)
    }

    /// Starts a new game on `dimension`.
    ///
    /// A game still pending disclosure is scored first, in the dimension it
    /// was played in; its outcome is returned. A different dimension
    /// rebuilds the board and winning lines, the same dimension just clears
    /// the board. X moves first either way.
    #[instrument(skip(self, ledger), fields(current = %self.dimension()))]
    pub fn request_new_game(
        &mut self,
        dimension: Dimension,
        ledger: &mut ScoreLedger,
    ) -> Option<Outcome> {
        let flushed = self.resolve(ledger);
        if let Some(outcome) = flushed {
            warn!(%outcome, "New game requested before disclosure; scored early");
        }

        if dimension != self.dimension() {
            info!(from = %self.dimension(), to = %dimension, "Switching dimension");
            self.board = Board::new(dimension);
            self.win_conditions = WinConditionSet::generate(dimension);
        } else {
            info!(%dimension, "Resetting board");
            self.board.clear();
        }

        self.active_player = Player::X;
        self.phase = Phase::AwaitingMove;
        self.episode = self.episode.next();
        flushed
    }

    fn rejection(&self, index: usize) -> Option<Rejection> {
        if self.is_terminal() {
            Some(Rejection::GameOver)
        } else if index >= self.board.cells().len() {
            Some(Rejection::OutOfRange(index))
        } else if !self.board.is_empty(index) {
            Some(Rejection::Occupied(index))
        } else {
            None
        }
    }

    fn finish(&mut self, outcome: Outcome) -> SelectResult {
        self.phase = Phase::Terminal(TerminalPhase::Pending(outcome));
        SelectResult::Finished(outcome)
    }
}
