//! Sessions: one playthrough from deal to completion or abort.
//!
//! ## Example
//!
//! ```
//! use pairs_match::core::{GameRng, ManualClock, SessionIdGenerator};
//! use pairs_match::history::InMemoryHistory;
//! use pairs_match::session::Session;
//!
//! let mut ids = SessionIdGenerator::new();
//! let clock = ManualClock::new();
//! let history = InMemoryHistory::new();
//!
//! let mut session = Session::new(ids.next_id(), &mut GameRng::new(7), clock.clone(), history.clone());
//! session.start().unwrap();
//! clock.advance(1_500);
//!
//! session.flip(0).unwrap();
//! assert_eq!(session.moves(), 1);
//! assert_eq!(session.summary().elapsed_ms, 1_500);
//! ```

mod error;
#[allow(clippy::module_inception)]
mod session;
mod state;

pub use error::SessionError;
pub use session::Session;
pub use state::{SessionState, SessionSummary};
