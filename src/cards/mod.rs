//! Card system: a rank plus a three-state lifecycle.
//!
//! ## Key Types
//!
//! - `Card`: A single card on the board
//! - `CardStatus`: Hidden, Revealed, or Matched
//! - `CardError`: Raised when a transition is illegal from the current status

pub mod card;

pub use card::{Card, CardError, CardStatus, CardTransition};
