use crate::error::StoreError;
use crate::filter::filter;
use crate::schema::{ApplicationRecord, Query};
use crate::validate::ValidRecord;

/// Insertion-ordered, append-only collection of validated records.
///
/// The store does no locking of its own. Callers sharing it across threads
/// must serialize writers, e.g. by holding it behind a `RwLock`.
#[derive(Debug, Default, Clone)]
pub struct Store {
    records: Vec<ApplicationRecord>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` unless its title is already taken.
    ///
    /// Only the title is checked; every other field may repeat freely.
    pub fn insert(&mut self, record: ValidRecord) -> Result<(), StoreError> {
        if self.contains_title(&record.title) {
            tracing::info!(title = %record.title, "rejected duplicate title");
            return Err(StoreError::Conflict {
                title: record.into_inner().title,
            });
        }
        let record = record.into_inner();
        tracing::info!(title = %record.title, total = self.records.len() + 1, "record added");
        self.records.push(record);
        Ok(())
    }

    /// Stored records matching `query`, in insertion order.
    pub fn search(&self, query: &Query) -> Vec<&ApplicationRecord> {
        let matches = filter(&self.records, query);
        tracing::debug!(
            scanned = self.records.len(),
            matched = matches.len(),
            "search finished"
        );
        matches
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.records.iter().any(|r| r.title == title)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ApplicationRecord> {
        self.records.iter()
    }
}
