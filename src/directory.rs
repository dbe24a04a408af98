//! Identity resolution against a caller directory.
//!
//! The engine trusts an already-resolved identity; the directory only maps
//! an opaque identifier to a caller record. Any lookup structure satisfying
//! [`Directory`] is conformant (in-memory map, remote service, ...).

use crate::types::{Caller, CallerId};
use std::collections::HashMap;

/// Resolves opaque caller identifiers to caller records.
pub trait Directory: Send + Sync {
    /// Look up a caller by id. `None` means the id is unknown.
    fn resolve(&self, id: &CallerId) -> Option<Caller>;

    /// All known callers, in a stable order.
    fn list(&self) -> Vec<Caller>;
}

/// In-memory directory backed by a hash map.
pub struct StaticDirectory {
    callers: HashMap<CallerId, Caller>,
}

impl StaticDirectory {
    pub fn new(callers: impl IntoIterator<Item = Caller>) -> Self {
        Self {
            callers: callers
                .into_iter()
                .map(|c| (c.id.clone(), c))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.callers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callers.is_empty()
    }
}

impl Directory for StaticDirectory {
    fn resolve(&self, id: &CallerId) -> Option<Caller> {
        self.callers.get(id).cloned()
    }

    fn list(&self) -> Vec<Caller> {
        let mut all: Vec<Caller> = self.callers.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }
}
