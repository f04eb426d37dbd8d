//! Quick search.
//!
//! For every (field, keyword) pair in the query's fields × keywords, asks
//! the store for exact matches and hands each one to the callback right
//! away. Nothing is scored or deduplicated: a record matched by N pairs is
//! delivered N times.

use orion_core::Result;

use crate::query::Query;
use crate::record::Record;
use crate::storage::StorageAdapter;

/// Run a Quick search over `fields`.
///
/// Returns the number of records delivered.
pub fn search<S, F>(storage: &S, query: &Query, fields: &[String], mut deliver: F) -> Result<usize>
where
    S: StorageAdapter + ?Sized,
    F: FnMut(Record),
{
    let mut delivered = 0;
    for field in fields {
        for keyword in query.keywords().keys() {
            for record in storage.select(field, Some(keyword), None)? {
                deliver(record);
                delivered += 1;
            }
        }
    }

    log::debug!(
        "Quick search '{}' over {:?}: {delivered} records",
        query.text(),
        fields
    );
    Ok(delivered)
}

// ============================================================================
// Tests
// ============================================================================
