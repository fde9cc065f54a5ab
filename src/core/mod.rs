//! Core types: ranks, session ids, randomness, clocks, scoring configuration.
//!
//! Everything here is a leaf: the deck and session build on these, and hosts
//! inject the [`RandomSource`] and [`Clock`] implementations they want.

pub mod clock;
pub mod config;
pub mod ids;
pub mod rng;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ScoringConfig;
pub use ids::{Rank, SessionId, SessionIdGenerator, DECK_SIZE, RANK_COUNT};
pub use rng::{GameRng, GameRngState, RandomSource};
