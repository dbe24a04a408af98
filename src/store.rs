//! Append-only in-memory store of recognition records.

use crate::types::{CallerId, Recognition};
use parking_lot::RwLock;

/// The single source of truth for which recognitions exist.
///
/// Append-only: records are never mutated or removed. All state is
/// process-lifetime; construct one instance per process (or per test) and
/// inject it where needed.
pub struct RecognitionStore {
    records: RwLock<Vec<Recognition>>,
}

impl RecognitionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-seeded with existing records, in order.
    pub fn seeded(records: impl IntoIterator<Item = Recognition>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
        }
    }

    /// Append a record. Serialized with respect to all other appends;
    /// readers never observe a partially-appended record.
    pub fn append(&self, record: Recognition) {
        self.records.write().push(record);
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> Vec<Recognition> {
        self.records.read().clone()
    }

    /// Records addressed to the given recipient, in insertion order.
    pub fn find_by_recipient(&self, recipient: &CallerId) -> Vec<Recognition> {
        self.records
            .read()
            .iter()
            .filter(|r| &r.recipient_id == recipient)
            .cloned()
            .collect()
    }

    /// Highest record id currently in the store, if any.
    pub fn max_id(&self) -> Option<u64> {
        self.records.read().iter().map(|r| r.id.0).max()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for RecognitionStore {
    fn default() -> Self {
        Self::new()
    }
}
