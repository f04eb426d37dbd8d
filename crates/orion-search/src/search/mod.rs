//! Search strategies.
//!
//! - [`quick`]: exact matches streamed as they are found; unranked, with
//!   duplicates. Meant for search-as-you-type.
//! - [`normal`]: keywords snapped to the vocabulary, filters applied,
//!   records scored, deduplicated, ranked, and post-processed by plugins.

pub mod normal;
pub mod quick;

use crate::query::Query;
use crate::record::Record;

/// Post-processing step applied to Normal search results.
///
/// Plugins run in registration order on the ranked list and may reorder,
/// drop, or add records.
///
/// Any `Fn(Vec<Record>) -> Vec<Record>` is a plugin:
///
/// ```rust
/// use orion_search::{Record, ResultPlugin};
///
/// let top_three = |records: Vec<Record>| records.into_iter().take(3).collect::<Vec<_>>();
/// assert!(top_three.transform(Vec::new()).is_empty());
/// ```
pub trait ResultPlugin {
    /// Transform the result list.
    fn transform(&self, records: Vec<Record>) -> Vec<Record>;
}

impl<F> ResultPlugin for F
where
    F: Fn(Vec<Record>) -> Vec<Record>,
{
    fn transform(&self, records: Vec<Record>) -> Vec<Record> {
        self(records)
    }
}

/// Fields a query searches: its restriction list, or `defaults`.
pub(crate) fn search_fields(query: &Query, defaults: &[String]) -> Vec<String> {
    match query.fields() {
        Some(fields) => fields.to_vec(),
        None => defaults.to_vec(),
    }
}
