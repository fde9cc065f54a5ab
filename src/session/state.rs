//! Session lifecycle state and the read-only summary.

use serde::{Deserialize, Serialize};

use crate::core::SessionId;

/// Where a session is in its lifecycle.
///
/// ```text
/// Created ──start──> Running <──pause/resume──> Paused
///    │                  │                          │
///    │                  └── last pair matched ──> Finished
///    └──────────── abort (any non-terminal) ────> Aborted
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    Created,
    Running,
    Paused,
    /// Every pair matched; the history record has been emitted.
    Finished,
    /// Stopped early by the caller; nothing was recorded.
    Aborted,
}

impl SessionState {
    /// Finished or aborted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, SessionState::Finished | SessionState::Aborted)
    }

    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, SessionState::Running)
    }
}

/// Point-in-time view of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub moves: u32,
    pub score: u8,
    /// Includes the interval currently running, if any.
    pub elapsed_ms: u64,
    /// Cards not yet matched.
    pub remaining: usize,
    pub finished: bool,
}
