//! Finished-session summary.

use serde::{Deserialize, Serialize};

use crate::core::SessionId;

/// Immutable summary of a finished session, handed to a
/// [`HistoryStore`](super::HistoryStore) exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Session that produced the record.
    pub session_id: SessionId,
    /// Accepted flips.
    pub moves: u32,
    /// Stars, 1 to 3.
    pub score: u8,
    /// Time spent running, in milliseconds.
    pub elapsed_ms: u64,
}
