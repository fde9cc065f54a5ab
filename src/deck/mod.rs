//! Deck: the fixed board and the two-card match protocol.
//!
//! ## Example
//!
//! ```
//! use pairs_match::core::GameRng;
//! use pairs_match::deck::{Deck, FlipOutcome};
//!
//! let mut deck = Deck::shuffled(&mut GameRng::new(42));
//! assert!(matches!(deck.flip_at(0), Ok(FlipOutcome::Pending { position: 0 })));
//!
//! // Second flip resolves immediately, whatever the ranks were.
//! let outcome = deck.flip_at(1).unwrap();
//! assert!(outcome.resolved_positions().is_some());
//! assert!(deck.revealed().is_empty());
//! ```

#[allow(clippy::module_inception)]
mod deck;
mod outcome;

pub use deck::{Deck, DeckError};
pub use outcome::FlipOutcome;
