//! Command surface for front ends, plus the delayed result disclosure.
//!
//! A finished game stays `Terminal/Pending` for a fixed delay before it is
//! scored and its result shown. The controller holds that delay as a
//! cancellable schedule; hosts drive it by calling [`GameController::poll`]
//! at or after [`GameController::next_deadline`].
//!
//! Requesting a new game while a disclosure is scheduled cancels the timer
//! and scores the finished game at once, in the dimension it was played in.

use crate::{
    Dimension, DimensionError, EpisodeId, GameSession, GridScores, Outcome, ScoreLedger,
    SelectResult, SessionSnapshot,
};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// A result disclosure waiting for its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledDisclosure {
    /// Game the disclosure belongs to.
    pub episode: EpisodeId,
    /// Outcome that will be scored.
    pub outcome: Outcome,
    /// Earliest instant the disclosure may fire.
    pub due: Instant,
}

/// Owns the live session, the process-wide score ledger, the staged
/// dimension and the pending disclosure timer.
#[derive(Debug, Clone)]
pub struct GameController {
    session: GameSession,
    ledger: ScoreLedger,
    staged_dimension: Dimension,
    disclosure_delay: Duration,
    scheduled: Option<ScheduledDisclosure>,
}

impl GameController {
    /// Delay between a game ending and its result being disclosed.
    pub const DEFAULT_DISCLOSURE_DELAY: Duration = Duration::from_secs(2);

    /// Creates a controller with a fresh game on `dimension`.
    #[instrument]
    pub fn new(dimension: Dimension, disclosure_delay: Duration) -> Self {
        info!("Creating game controller");
        Self {
            session: GameSession::new(dimension),
            ledger: ScoreLedger::new(),
            staged_dimension: dimension,
            disclosure_delay,
            scheduled: None,
        }
    }

    /// Returns the live session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the score ledger.
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Dimension the next [`GameController::request_new_game`] applies.
    pub fn staged_dimension(&self) -> Dimension {
        self.staged_dimension
    }

    /// Configured disclosure delay.
    pub fn disclosure_delay(&self) -> Duration {
        self.disclosure_delay
    }

    /// The disclosure currently scheduled, if any.
    pub fn scheduled(&self) -> Option<&ScheduledDisclosure> {
        self.scheduled.as_ref()
    }

    /// When the scheduled disclosure becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduled.map(|s| s.due)
    }

    /// Plays the active player's mark at `index`.
    ///
    /// A game-ending move schedules disclosure at `now + disclosure_delay`.
    #[instrument(skip(self, now))]
    pub fn select_cell(&mut self, index: usize, now: Instant) -> SelectResult {
        let result = self.session.select_cell(index);
        if let SelectResult::Finished(outcome) = result {
            let due = now + self.disclosure_delay;
            debug!(
                %outcome,
                delay_ms = self.disclosure_delay.as_millis() as u64,
                "Disclosure scheduled"
            );
            self.scheduled = Some(ScheduledDisclosure {
                episode: self.session.episode(),
                outcome,
                due,
            });
        }
        result
    }

    /// Stages the dimension for the next new game.
    ///
    /// Nothing else changes until [`GameController::request_new_game`].
    #[track_caller]
    #[instrument(skip(self))]
    pub fn set_pending_dimension(&mut self, n: usize) -> Result<Dimension, DimensionError> {
        let dimension = Dimension::new(n)?;
        debug!(%dimension, "Dimension staged");
        self.staged_dimension = dimension;
        Ok(dimension)
    }

    /// Starts a new game on the staged dimension.
    ///
    /// Returns the outcome of a finished game that was still awaiting
    /// disclosure and got scored by this call.
    #[instrument(skip(self), fields(staged = %self.staged_dimension))]
    pub fn request_new_game(&mut self) -> Option<Outcome> {
        if let Some(cancelled) = self.cancel_disclosure() {
            warn!(outcome = %cancelled.outcome, "Disclosure timer cancelled by new game");
        }
        self.session
            .request_new_game(self.staged_dimension, &mut self.ledger)
    }

    /// Fires the scheduled disclosure if it is due at `now`.
    ///
    /// Returns the outcome that was scored.
    #[instrument(skip(self, now))]
    pub fn poll(&mut self, now: Instant) -> Option<Outcome> {
        let scheduled = self.scheduled.filter(|s| now >= s.due)?;
        self.scheduled = None;

        if scheduled.episode != self.session.episode() {
            warn!(episode = %scheduled.episode, "Stale disclosure dropped");
            return None;
        }
        self.session.resolve(&mut self.ledger)
    }

    /// Cancels the disclosure timer without scoring.
    ///
    /// The finished game stays pending; the next new-game request scores it.
    #[instrument(skip(self))]
    pub fn cancel_disclosure(&mut self) -> Option<ScheduledDisclosure> {
        self.scheduled.take()
    }

    /// Scores for `dimension`, zero if nothing finished there.
    pub fn scores(&self, dimension: Dimension) -> GridScores {
        self.ledger.get(dimension)
    }

    /// Scores for the dimension in play.
    pub fn current_scores(&self) -> GridScores {
        self.scores(self.session.dimension())
    }

    /// Read-only view of the current game.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(&self.session, self.staged_dimension, self.current_scores())
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(Dimension::CLASSIC, Self::DEFAULT_DISCLOSURE_DELAY)
    }
}
