//! # pairs-match
//!
//! Engine for a pairs-matching card game: sixteen face-down cards, eight
//! pairs, flip two at a time. Matches stay face up, mismatches flip back.
//!
//! ## Design Principles
//!
//! 1. **Injected collaborators**: Randomness, time, and history storage are
//!    traits the host supplies. Deals and timings are reproducible in tests.
//!
//! 2. **Invariants live in the deck**: The second flip of a pair resolves in
//!    the same call, so there is never a third face-up unresolved card.
//!
//! 3. **Errors leave state untouched**: Every rejected operation returns an
//!    error and changes nothing.
//!
//! ## Modules
//!
//! - `core`: Ranks, session ids, RNG, clocks, scoring configuration
//! - `cards`: Card lifecycle (Hidden, Revealed, Matched)
//! - `deck`: The board and the match protocol
//! - `session`: Moves, score, elapsed time, completion
//! - `history`: Finished-session records and stores
//!
//! ## Example
//!
//! ```
//! use pairs_match::{Deck, InMemoryHistory, ManualClock, Session, SessionId};
//!
//! let history = InMemoryHistory::new();
//! let mut session = Session::with_deck(SessionId::new(1), Deck::ordered(), ManualClock::new(), history.clone());
//!
//! // Ordered deck: positions 2k and 2k+1 share a rank.
//! for pair in 0..8 {
//!     session.flip(pair * 2).unwrap();
//!     session.flip(pair * 2 + 1).unwrap();
//! }
//!
//! assert!(session.is_finished());
//! assert_eq!(history.last().unwrap().moves, 16);
//! ```

pub mod cards;
pub mod core;
pub mod deck;
pub mod history;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Clock, GameRng, GameRngState, ManualClock, RandomSource, Rank, ScoringConfig, SessionId,
    SessionIdGenerator, SystemClock, DECK_SIZE, RANK_COUNT,
};

pub use crate::cards::{Card, CardError, CardStatus};

pub use crate::deck::{Deck, DeckError, FlipOutcome};

pub use crate::session::{Session, SessionError, SessionState, SessionSummary};

pub use crate::history::{FileHistory, HistoryError, HistoryRecord, HistoryStore, InMemoryHistory, NoHistory};
