use std::collections::HashMap;

use crate::domain::Company;

/// Page responses keyed by their exact query string.
///
/// Lives for the whole session and is never evicted. Only non-empty batches are
/// stored, so a hit can always be appended without an exhaustion check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseCache {
    entries: HashMap<String, Vec<Company>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&[Company]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Remember `batch` under `key`; empty batches are ignored
    pub fn insert(&mut self, key: String, batch: &[Company]) {
        if batch.is_empty() {
            return;
        }
        self.entries.insert(key, batch.to_vec());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
