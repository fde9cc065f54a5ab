//! Identifiers: card ranks and session ids.
//!
//! ## Board layout
//!
//! The board is fixed at [`DECK_SIZE`] cards. Each of the [`RANK_COUNT`]
//! ranks appears on exactly two cards. A card's identity is its position
//! (`0..DECK_SIZE`), which never changes after the deal.
//!
//! ```
//! use pairs_match::core::{Rank, RANK_COUNT};
//!
//! let first = Rank::new(1).unwrap();
//! assert_eq!(first.get(), 1);
//! assert!(Rank::new(0).is_none());
//! assert!(Rank::new(RANK_COUNT as u8 + 1).is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Number of distinct ranks on the board.
pub const RANK_COUNT: usize = 8;

/// Number of cards on the board (two per rank).
pub const DECK_SIZE: usize = RANK_COUNT * 2;

/// Which of the pairs a card belongs to, in `1..=RANK_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// Create a rank, rejecting values outside `1..=RANK_COUNT`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value as usize <= RANK_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterate over every rank in ascending order.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=RANK_COUNT as u8).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {} outside 1..={}", value, RANK_COUNT))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rank({})", self.0)
    }
}

/// Identifier of one playthrough.
///
/// Allocated by the host through [`SessionIdGenerator`]; sessions never
/// pick their own id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Create a session ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Host-owned session id counter. Ids start at 1.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionIdGenerator {
    next: u64,
}

impl SessionIdGenerator {
    /// Create a generator whose first id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Resume numbering after a previously issued id.
    #[must_use]
    pub fn after(last: SessionId) -> Self {
        Self {
            next: last.0.saturating_add(1),
        }
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> SessionId {
        let id = SessionId(self.next);
        self.next += 1;
        id
    }
}

impl Default for SessionIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_bounds() {
        assert!(Rank::new(0).is_none());
        assert_eq!(Rank::new(1).map(Rank::get), Some(1));
        assert_eq!(Rank::new(8).map(Rank::get), Some(8));
        assert!(Rank::new(9).is_none());
    }

    #[test]
    fn test_rank_all() {
        let ranks: Vec<u8> = Rank::all().map(Rank::get).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(DECK_SIZE, 16);
    }

    #[test]
    fn test_rank_serde_rejects_out_of_range() {
        let rank: Rank = serde_json::from_str("3").unwrap();
        assert_eq!(rank.get(), 3);
        assert!(serde_json::from_str::<Rank>("9").is_err());
    }

    #[test]
    fn test_session_id_generator() {
        let mut ids = SessionIdGenerator::new();
        assert_eq!(ids.next_id(), SessionId(1));
        assert_eq!(ids.next_id(), SessionId(2));

        let mut resumed = SessionIdGenerator::after(SessionId(41));
        assert_eq!(resumed.next_id(), SessionId(42));
    }

    #[test]
    fn test_independent_generators() {
        let mut a = SessionIdGenerator::new();
        let mut b = SessionIdGenerator::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), SessionId(1));
    }
}
