//! Session history: the record a finished session emits and where it goes.
//!
//! The session only knows the [`HistoryStore`] trait. Two stores ship with
//! the crate:
//!
//! - [`InMemoryHistory`]: shared, snapshot-able, for hosts and tests
//! - [`FileHistory`]: length-prefixed bincode records in one append-only file

mod file;
mod record;
mod store;

pub use file::{load_all, FileHistory, HistoryError};
pub use record::HistoryRecord;
pub use store::{HistoryStore, InMemoryHistory, NoHistory};
