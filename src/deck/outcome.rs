//! Results of a flip.

use serde::{Deserialize, Serialize};

use crate::core::Rank;

/// What a successful flip did.
///
/// The second flip of a pair resolves in the same call, so callers never
/// observe two unresolved face-up cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// First card of a pair is face up; waiting for the second.
    Pending { position: usize },

    /// The two cards share a rank and stay face up.
    Matched { positions: [usize; 2], rank: Rank },

    /// The ranks differ; both cards went back face down.
    Mismatched {
        positions: [usize; 2],
        ranks: [Rank; 2],
    },
}

impl FlipOutcome {
    /// Size of the revealed buffer right after the flip (1 or 2).
    #[must_use]
    pub const fn revealed_count(&self) -> usize {
        match self {
            FlipOutcome::Pending { .. } => 1,
            FlipOutcome::Matched { .. } | FlipOutcome::Mismatched { .. } => 2,
        }
    }

    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, FlipOutcome::Matched { .. })
    }

    /// The pair of positions that was resolved, if any.
    #[must_use]
    pub const fn resolved_positions(&self) -> Option<[usize; 2]> {
        match self {
            FlipOutcome::Pending { .. } => None,
            FlipOutcome::Matched { positions, .. } | FlipOutcome::Mismatched { positions, .. } => {
                Some(*positions)
            }
        }
    }
}
