//! History store contract and the in-memory implementation.

use std::cell::RefCell;
use std::rc::Rc;

use im::Vector;

use super::record::HistoryRecord;

/// Sink for finished-session records.
///
/// Appends are fire-and-forget: a store that cannot persist a record logs
/// the failure itself, the session never sees it.
pub trait HistoryStore {
    /// Record one finished session.
    fn append(&mut self, record: &HistoryRecord);
}

impl<H: HistoryStore + ?Sized> HistoryStore for Box<H> {
    fn append(&mut self, record: &HistoryRecord) {
        (**self).append(record);
    }
}

impl<H: HistoryStore + ?Sized> HistoryStore for &mut H {
    fn append(&mut self, record: &HistoryRecord) {
        (**self).append(record);
    }
}

/// Discards every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHistory;

impl HistoryStore for NoHistory {
    fn append(&mut self, _record: &HistoryRecord) {}
}

/// In-memory history.
///
/// Clones share the same records, so a host can keep one handle and give
/// another to a session. Snapshots are O(1) thanks to `im::Vector`.
#[derive(Clone, Debug, Default)]
pub struct InMemoryHistory {
    records: Rc<RefCell<Vector<HistoryRecord>>>,
}

impl InMemoryHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the records appended so far, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vector<HistoryRecord> {
        self.records.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Most recent record.
    #[must_use]
    pub fn last(&self) -> Option<HistoryRecord> {
        self.records.borrow().last().copied()
    }

    /// Fewest moves; ties go to the faster, then the earlier session.
    #[must_use]
    pub fn best_by_moves(&self) -> Option<HistoryRecord> {
        self.records
            .borrow()
            .iter()
            .min_by_key(|r| (r.moves, r.elapsed_ms, r.session_id))
            .copied()
    }
}

impl HistoryStore for InMemoryHistory {
    fn append(&mut self, record: &HistoryRecord) {
        self.records.borrow_mut().push_back(*record);
    }
}
