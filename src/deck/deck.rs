//! The board: sixteen cards, a revealed buffer, and the match protocol.
//!
//! ## Match protocol
//!
//! 1. `flip_at(a)` reveals card `a` and returns `Pending`.
//! 2. `flip_at(b)` reveals card `b` and resolves the pair in the same call:
//!    equal ranks become `Matched` (and `remaining` drops by 2), unequal
//!    ranks go back to `Hidden`. The buffer is empty again afterwards.
//!
//! Every rejected flip leaves the deck untouched.

use smallvec::SmallVec;
use thiserror::Error;

use super::outcome::FlipOutcome;
use crate::cards::{Card, CardError, CardStatus};
use crate::core::{RandomSource, Rank, DECK_SIZE, RANK_COUNT};

/// Errors raised by the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("position {position} is outside 0..{}", DECK_SIZE)]
    InvalidPosition { position: usize },

    #[error("two cards are already waiting to be resolved")]
    AlreadyPendingMatch,

    #[error(transparent)]
    InvalidTransition(#[from] CardError),

    #[error("deck layout must hold every rank exactly twice")]
    InvalidLayout,

    #[error("cannot shuffle a deck that is already in play")]
    InPlay,
}

/// Ordered board of [`DECK_SIZE`] cards.
///
/// Card identity is position. Invariants:
/// - each rank appears on exactly two cards
/// - at most two cards are in the revealed buffer
/// - `remaining` is even and equals the number of unmatched cards
#[derive(Clone, Debug)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    revealed: SmallVec<[usize; 2]>,
    remaining: usize,
}

impl Deck {
    /// Create an unshuffled deck: ranks `1, 1, 2, 2, ..., 8, 8`.
    #[must_use]
    pub fn ordered() -> Self {
        let cards = std::array::from_fn(|i| {
            let rank = Rank::new((i / 2 + 1) as u8).unwrap_or_else(|| unreachable!("i < DECK_SIZE"));
            Card::new(rank)
        });
        Self {
            cards,
            revealed: SmallVec::new(),
            remaining: DECK_SIZE,
        }
    }

    /// Create a freshly shuffled deck.
    #[must_use]
    pub fn shuffled(rng: &mut impl RandomSource) -> Self {
        let mut deck = Self::ordered();
        deck.shuffle_cards(rng);
        deck
    }

    /// Create a deck with a fixed layout.
    ///
    /// Fails with `InvalidLayout` unless every rank appears exactly twice.
    pub fn from_ranks(ranks: [Rank; DECK_SIZE]) -> Result<Self, DeckError> {
        let mut counts = [0usize; RANK_COUNT];
        for rank in ranks {
            counts[rank.get() as usize - 1] += 1;
        }
        if counts.iter().any(|&c| c != 2) {
            return Err(DeckError::InvalidLayout);
        }

        Ok(Self {
            cards: ranks.map(Card::new),
            revealed: SmallVec::new(),
            remaining: DECK_SIZE,
        })
    }

    /// Reshuffle a deck that has not been played yet.
    ///
    /// Fails with `InPlay` once any card has been flipped.
    pub fn shuffle(&mut self, rng: &mut impl RandomSource) -> Result<(), DeckError> {
        let untouched = self.revealed.is_empty()
            && self.cards.iter().all(|c| c.status() == CardStatus::Hidden);
        if !untouched {
            return Err(DeckError::InPlay);
        }
        self.shuffle_cards(rng);
        Ok(())
    }

    /// Fisher-Yates from the last position down.
    ///
    /// Draws are reduced modulo the bound, so a source that overshoots
    /// still yields a permutation.
    fn shuffle_cards(&mut self, rng: &mut impl RandomSource) {
        for i in (1..DECK_SIZE).rev() {
            let j = rng.next_int(i + 1) % (i + 1);
            self.cards.swap(i, j);
        }
    }

    /// Flip the card at `position` face up.
    ///
    /// The second flip of a pair resolves the match before returning.
    pub fn flip_at(&mut self, position: usize) -> Result<FlipOutcome, DeckError> {
        if position >= DECK_SIZE {
            return Err(DeckError::InvalidPosition { position });
        }
        if self.revealed.len() >= 2 {
            return Err(DeckError::AlreadyPendingMatch);
        }

        self.cards[position].reveal()?;
        self.revealed.push(position);
        tracing::debug!(position, rank = self.cards[position].rank().get(), "card revealed");

        if self.revealed.len() < 2 {
            return Ok(FlipOutcome::Pending { position });
        }

        self.resolve_pair()
    }

    fn resolve_pair(&mut self) -> Result<FlipOutcome, DeckError> {
        let positions = [self.revealed[0], self.revealed[1]];
        let ranks = positions.map(|p| self.cards[p].rank());

        let outcome = if ranks[0] == ranks[1] {
            for p in positions {
                self.cards[p].resolve_match()?;
            }
            self.remaining -= 2;
            tracing::debug!(?positions, rank = ranks[0].get(), remaining = self.remaining, "pair matched");
            FlipOutcome::Matched {
                positions,
                rank: ranks[0],
            }
        } else {
            for p in positions {
                self.cards[p].resolve_mismatch()?;
            }
            tracing::debug!(?positions, "pair mismatched");
            FlipOutcome::Mismatched { positions, ranks }
        };

        self.revealed.clear();
        Ok(outcome)
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at a position, if in range.
    #[must_use]
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Positions currently face up and unresolved.
    #[must_use]
    pub fn revealed(&self) -> &[usize] {
        &self.revealed
    }

    /// Number of cards not yet matched.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// True once every card is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}
