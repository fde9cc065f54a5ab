//! Errors surfaced by session operations.
//!
//! None of these end the session: the operation is rejected, state is left
//! as it was, and the caller decides whether to show or ignore the error.

use thiserror::Error;

use crate::deck::DeckError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The flip itself was rejected by the deck.
    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error("session is already running")]
    AlreadyRunning,

    #[error("session is not running")]
    NotStarted,

    #[error("session was already started; resume it instead")]
    AlreadyStarted,

    #[error("session has finished or been aborted")]
    Closed,
}

impl SessionError {
    /// Rejected flip (bad position, card not face down, buffer full).
    ///
    /// A UI can drop these silently, e.g. a click on a matched card.
    #[must_use]
    pub const fn is_rejected_flip(&self) -> bool {
        matches!(self, SessionError::Deck(_))
    }

    /// Misordered start/pause/resume/abort call.
    #[must_use]
    pub const fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            SessionError::AlreadyRunning
                | SessionError::NotStarted
                | SessionError::AlreadyStarted
                | SessionError::Closed
        )
    }
}
