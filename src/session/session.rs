//! One playthrough: a deck plus move counting, scoring, and timing.
//!
//! Time is sampled only at lifecycle boundaries. While running, the session
//! remembers when the current interval began; `pause`, `abort`, and the
//! final match fold that interval into `elapsed_ms`.

use super::error::SessionError;
use super::state::{SessionState, SessionSummary};
use crate::cards::CardStatus;
use crate::core::{Clock, RandomSource, Rank, ScoringConfig, SessionId};
use crate::deck::{Deck, FlipOutcome};
use crate::history::{HistoryRecord, HistoryStore};

type FinishedCallback = Box<dyn FnMut(&HistoryRecord)>;

/// A single game session.
///
/// Owns its deck exclusively. Generic over the clock and the history sink
/// so hosts and tests can inject their own.
pub struct Session<C: Clock, H: HistoryStore> {
    id: SessionId,
    deck: Deck,
    moves: u32,
    score: u8,
    elapsed_ms: u64,
    /// Start of the current running interval.
    running_since: Option<u64>,
    state: SessionState,
    scoring: ScoringConfig,
    clock: C,
    history: H,
    on_finished: Option<FinishedCallback>,
}

impl<C: Clock, H: HistoryStore> Session<C, H> {
    /// Create a session with a freshly shuffled deck.
    pub fn new(id: SessionId, rng: &mut impl RandomSource, clock: C, history: H) -> Self {
        Self::with_deck(id, Deck::shuffled(rng), clock, history)
    }

    /// Create a session around an existing deck (fixed layouts, replays).
    #[must_use]
    pub fn with_deck(id: SessionId, deck: Deck, clock: C, history: H) -> Self {
        let scoring = ScoringConfig::default();
        Self {
            id,
            deck,
            moves: 0,
            score: ScoringConfig::MAX_SCORE,
            elapsed_ms: 0,
            running_since: None,
            state: SessionState::Created,
            scoring,
            clock,
            history,
            on_finished: None,
        }
    }

    /// Use different star thresholds.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self.score = scoring.score_for(self.moves);
        self
    }

    /// Register a callback run once, after the record is stored, when the
    /// last pair is matched. Replaces any earlier callback.
    pub fn on_finished(&mut self, callback: impl FnMut(&HistoryRecord) + 'static) {
        self.on_finished = Some(Box::new(callback));
    }

    // === Lifecycle ===

    /// Start the clock for the first time.
    pub fn start(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Created => {
                self.begin_interval();
                tracing::info!(session = %self.id, "session started");
                Ok(())
            }
            SessionState::Running => Err(SessionError::AlreadyRunning),
            SessionState::Paused => Err(SessionError::AlreadyStarted),
            SessionState::Finished | SessionState::Aborted => Err(SessionError::Closed),
        }
    }

    /// Stop the clock, keeping the time accrued so far.
    pub fn pause(&mut self) -> Result<(), SessionError> {
        if !self.state.is_running() {
            return Err(SessionError::NotStarted);
        }
        self.end_interval();
        self.state = SessionState::Paused;
        tracing::info!(session = %self.id, elapsed_ms = self.elapsed_ms, "session paused");
        Ok(())
    }

    /// Restart the clock after a pause. Moves, score and time carry over.
    pub fn resume(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Paused => {
                self.begin_interval();
                tracing::info!(session = %self.id, "session resumed");
                Ok(())
            }
            SessionState::Running => Err(SessionError::AlreadyRunning),
            SessionState::Created => Err(SessionError::NotStarted),
            SessionState::Finished | SessionState::Aborted => Err(SessionError::Closed),
        }
    }

    /// Stop early. Nothing is recorded and the board is left as it is.
    pub fn abort(&mut self) -> Result<(), SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::Closed);
        }
        if self.state.is_running() {
            self.end_interval();
        }
        self.state = SessionState::Aborted;
        tracing::info!(
            session = %self.id,
            moves = self.moves,
            remaining = self.deck.remaining(),
            "session aborted"
        );
        Ok(())
    }

    // === Play ===

    /// Flip the card at `position`.
    ///
    /// Every accepted flip is one move. Rejected flips change nothing.
    /// Matching the last pair finishes the session.
    pub fn flip(&mut self, position: usize) -> Result<FlipOutcome, SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::Closed);
        }

        let outcome = self.deck.flip_at(position)?;
        self.moves += 1;
        self.score = self.scoring.score_for(self.moves);

        if self.deck.is_complete() {
            self.finish();
        }

        Ok(outcome)
    }

    fn finish(&mut self) {
        if self.state.is_running() {
            self.end_interval();
        }
        self.state = SessionState::Finished;

        let record = self.record_unchecked();
        tracing::info!(
            session = %self.id,
            moves = record.moves,
            score = record.score,
            elapsed_ms = record.elapsed_ms,
            "session finished"
        );

        self.history.append(&record);
        if let Some(mut callback) = self.on_finished.take() {
            callback(&record);
        }
    }

    // === Time ===

    fn begin_interval(&mut self) {
        self.running_since = Some(self.clock.now_ms());
        self.state = SessionState::Running;
    }

    fn end_interval(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.elapsed_ms += self.clock.now_ms().saturating_sub(since);
        }
    }

    /// Accrued time plus the interval in progress.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        let live = self
            .running_since
            .map_or(0, |since| self.clock.now_ms().saturating_sub(since));
        self.elapsed_ms + live
    }

    // === Queries ===

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.remaining()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    #[must_use]
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Status of the card at `position`, if in range.
    #[must_use]
    pub fn card_status(&self, position: usize) -> Option<CardStatus> {
        self.deck.card(position).map(|c| c.status())
    }

    /// Rank of the card at `position`, only while its face is visible.
    #[must_use]
    pub fn rank_at(&self, position: usize) -> Option<Rank> {
        self.deck
            .card(position)
            .filter(|c| c.status().is_face_up())
            .map(|c| c.rank())
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id,
            moves: self.moves,
            score: self.score,
            elapsed_ms: self.elapsed_ms(),
            remaining: self.deck.remaining(),
            finished: self.is_finished(),
        }
    }

    /// The record emitted at completion, once finished.
    #[must_use]
    pub fn record(&self) -> Option<HistoryRecord> {
        self.is_finished().then(|| self.record_unchecked())
    }

    fn record_unchecked(&self) -> HistoryRecord {
        HistoryRecord {
            session_id: self.id,
            moves: self.moves,
            score: self.score,
            elapsed_ms: self.elapsed_ms,
        }
    }
}

impl<C: Clock, H: HistoryStore> std::fmt::Debug for Session<C, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("moves", &self.moves)
            .field("score", &self.score)
            .field("elapsed_ms", &self.elapsed_ms)
            .field("remaining", &self.deck.remaining())
            .finish_non_exhaustive()
    }
}
