//! Storage adapter trait and the in-memory default.
//!
//! The search layer never owns records itself: it asks a [`StorageAdapter`]
//! to select, add, and annotate them. Implement the trait over a real
//! database to search it; [`MemoryStorage`] is a linear-scan implementation
//! suitable for small collections and tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use orion_search::{Record, StorageAdapter};
//!
//! struct SqliteStorage { conn: rusqlite::Connection }
//!
//! impl StorageAdapter for SqliteStorage {
//!     fn select(&self, field: &str, value: Option<&str>, range: Option<Range<usize>>)
//!         -> orion_core::Result<Vec<Record>> {
//!         // SELECT rowid, * FROM main WHERE {field} LIKE '%{value}%' ...
//!     }
//!     // ...
//! }
//! ```

use std::collections::BTreeSet;
use std::ops::Range;

use orion_core::{Error, Result};

use crate::record::{FieldValue, Record};
use crate::types::KEYWORDS_FIELD;

/// Operations the search layer needs from a record store.
///
/// Calls are synchronous; an error aborts the operation that issued it.
pub trait StorageAdapter {
    /// Select records whose `field` matches `value`.
    ///
    /// `value = None` selects every record; `range = None` covers every row.
    /// Results are returned in store order.
    fn select(&self, field: &str, value: Option<&str>, range: Option<Range<usize>>)
    -> Result<Vec<Record>>;

    /// Persist new records.
    fn add(&mut self, records: &[Record]) -> Result<()>;

    /// Persist the keyword set computed for `record`.
    ///
    /// The stored row is identified by bag equality with `record`.
    fn write_keywords(&mut self, keywords: &BTreeSet<String>, record: &Record) -> Result<()>;

    /// Number of stored rows.
    fn count(&self) -> Result<usize> {
        Ok(self.select(KEYWORDS_FIELD, None, None)?.len())
    }
}

/// Vec-backed, linear-scan storage.
///
/// # Matching
///
/// - `keywords` field: membership in the record's keyword set; records not
///   yet annotated never match
/// - any other field: the value's lowercased whitespace tokens must contain
///   the selected value exactly (see [`FieldValue::contains_token`])
/// - records lacking the field never match
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    rows: Vec<Record>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored rows, in insertion order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    fn row_matches(row: &Record, field: &str, value: &str) -> bool {
        match row.get(field) {
            Some(FieldValue::TextSet(set)) if field == KEYWORDS_FIELD => set.contains(value),
            Some(_) if field == KEYWORDS_FIELD => false,
            Some(other) => other.contains_token(value),
            None => false,
        }
    }
}

impl From<Vec<Record>> for MemoryStorage {
    fn from(rows: Vec<Record>) -> Self {
        Self { rows }
    }
}

impl FromIterator<Record> for MemoryStorage {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl StorageAdapter for MemoryStorage {
    fn select(
        &self,
        field: &str,
        value: Option<&str>,
        range: Option<Range<usize>>,
    ) -> Result<Vec<Record>> {
        let rows = match range {
            Some(range) => {
                let end = range.end.min(self.rows.len());
                let start = range.start.min(end);
                &self.rows[start..end]
            }
            None => &self.rows[..],
        };

        let selected = match value {
            None => rows.to_vec(),
            Some(value) => rows
                .iter()
                .filter(|row| Self::row_matches(row, field, value))
                .cloned()
                .collect(),
        };
        Ok(selected)
    }

    fn add(&mut self, records: &[Record]) -> Result<()> {
        self.rows.extend_from_slice(records);
        Ok(())
    }

    fn write_keywords(&mut self, keywords: &BTreeSet<String>, record: &Record) -> Result<()> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| **row == *record)
            .ok_or_else(|| Error::record_not_found("write_keywords"))?;
        row.insert(KEYWORDS_FIELD, FieldValue::TextSet(keywords.clone()));
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.rows.len())
    }
}

// ============================================================================
// Tests
// ============================================================================
