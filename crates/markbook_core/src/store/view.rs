//! Read-only roster view for presentation code.
//!
//! # Responsibility
//! - Expose position lookups and full listings without mutation rights.
//!
//! # Invariants
//! - No caching: a view borrows the live sequence, so every call reflects the
//!   store's current state. Callers re-query after any mutation.

use crate::model::student::StudentRecord;
use crate::store::{StoreError, StoreResult};

/// Borrowed, read-only window over the roster's current order.
#[derive(Debug, Clone, Copy)]
pub struct RosterView<'a> {
    records: &'a [StudentRecord],
}

impl<'a> RosterView<'a> {
    pub(crate) fn new(records: &'a [StudentRecord]) -> Self {
        Self { records }
    }

    /// All records in current display order.
    pub fn all(&self) -> &'a [StudentRecord] {
        self.records
    }

    /// The record at `index`, or `IndexOutOfRange`.
    pub fn at(&self, index: usize) -> StoreResult<&'a StudentRecord> {
        self.records.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
