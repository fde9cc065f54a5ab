//! A single card and its face-down / face-up / matched lifecycle.
//!
//! ```text
//!            reveal             resolve_match
//!   Hidden ─────────> Revealed ───────────────> Matched
//!     ^                  │
//!     └──────────────────┘
//!       resolve_mismatch
//! ```
//!
//! `Matched` is terminal. Transitions are crate-private: only the deck
//! moves cards between states.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Rank;

/// Where a card is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    /// Face down.
    Hidden,
    /// Face up, waiting for the match to resolve.
    Revealed,
    /// Face up permanently.
    Matched,
}

impl CardStatus {
    /// Is the card's face visible?
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        matches!(self, CardStatus::Revealed | CardStatus::Matched)
    }
}

/// Transition that a card was asked to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardTransition {
    Reveal,
    ResolveMatch,
    ResolveMismatch,
}

impl std::fmt::Display for CardTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardTransition::Reveal => "reveal",
            CardTransition::ResolveMatch => "resolve match",
            CardTransition::ResolveMismatch => "resolve mismatch",
        };
        f.write_str(name)
    }
}

/// Errors raised by card transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("cannot {transition} a card that is {status:?}")]
    InvalidTransition {
        status: CardStatus,
        transition: CardTransition,
    },
}

/// A card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    status: CardStatus,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank) -> Self {
        Self {
            rank,
            status: CardStatus::Hidden,
        }
    }

    /// The pair this card belongs to.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn status(&self) -> CardStatus {
        self.status
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self.status, CardStatus::Matched)
    }

    /// Hidden -> Revealed.
    pub(crate) fn reveal(&mut self) -> Result<(), CardError> {
        self.transition(CardStatus::Hidden, CardStatus::Revealed, CardTransition::Reveal)
    }

    /// Revealed -> Matched.
    pub(crate) fn resolve_match(&mut self) -> Result<(), CardError> {
        self.transition(CardStatus::Revealed, CardStatus::Matched, CardTransition::ResolveMatch)
    }

    /// Revealed -> Hidden.
    pub(crate) fn resolve_mismatch(&mut self) -> Result<(), CardError> {
        self.transition(CardStatus::Revealed, CardStatus::Hidden, CardTransition::ResolveMismatch)
    }

    fn transition(
        &mut self,
        from: CardStatus,
        to: CardStatus,
        transition: CardTransition,
    ) -> Result<(), CardError> {
        if self.status != from {
            return Err(CardError::InvalidTransition {
                status: self.status,
                transition,
            });
        }
        self.status = to;
        Ok(())
    }
}
