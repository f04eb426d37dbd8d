//! Normal search.
//!
//! The full pipeline:
//!
//! 1. **Correction**: each query keyword is replaced by the nearest token in
//!    the keyword cache (Levenshtein distance, first token wins ties), and
//!    carries its weight over to the correction
//! 2. **Filters**: only clauses on accepted fields are kept
//! 3. **Scoring**: for every (field, corrected keyword) pair the store is
//!    asked for matches; a match scores the summed weights of its tokens at
//!    that field that are corrected keywords. A match lacking the field is
//!    excluded
//! 4. **Filtering**: a record is dropped unless every kept clause's field is
//!    text containing the clause value, case-insensitively
//! 5. **Deduplication**: records are unique under bag equality; the first
//!    visit fixes membership, later visits overwrite the score
//! 6. **Ranking**: stable sort by descending score
//! 7. **Plugins**: applied in registration order
//!
//! Results are delivered only after the whole pipeline ran.
//!
//! Correction costs O(cache size × distinct keywords) distance computations
//! per query, which bounds this strategy to small and medium vocabularies.

use std::collections::{BTreeSet, HashMap};

use orion_core::Result;

use crate::cache::KeywordCache;
use crate::query::{Filter, KeywordWeights, Query};
use crate::record::Record;
use crate::search::ResultPlugin;
use crate::storage::StorageAdapter;

/// Snap every keyword to its nearest cached token.
///
/// Keywords collapsing onto the same token add up their weights. With an
/// empty cache the weights are returned unchanged.
pub fn correct_keywords(cache: &KeywordCache, keywords: &KeywordWeights) -> KeywordWeights {
    let mut corrected = KeywordWeights::new();
    for (keyword, weight) in keywords {
        let target = cache.nearest(keyword).unwrap_or(keyword);
        if target != keyword {
            log::debug!("Corrected keyword '{keyword}' to '{target}'");
        }
        *corrected.entry(target.to_string()).or_insert(0.0) += weight;
    }
    corrected
}

/// Keep filter clauses whose field is accepted.
pub fn admissible_filters<'q>(filters: &'q [Filter], accepted: &BTreeSet<String>) -> Vec<&'q Filter> {
    filters
        .iter()
        .filter(|filter| {
            let keep = accepted.contains(&filter.field);
            if !keep {
                log::debug!("Dropped filter on unaccepted field '{}'", filter.field);
            }
            keep
        })
        .collect()
}

/// Sum the weights of the record's tokens at `field` that are keywords.
///
/// Returns `None` when the record has no such field.
pub fn score_record(record: &Record, field: &str, keywords: &KeywordWeights) -> Option<f64> {
    record.get(field).map(|value| {
        value
            .tokens()
            .iter()
            .filter_map(|token| keywords.get(token))
            .sum()
    })
}

/// Check a record against filter clauses.
///
/// A clause fails when its field is absent or not text, or when the text
/// does not contain the clause value, ignoring case.
pub fn passes_filters(record: &Record, filters: &[&Filter]) -> bool {
    filters.iter().all(|filter| {
        record
            .text(&filter.field)
            .is_some_and(|text| text.to_lowercase().contains(&filter.value.to_lowercase()))
    })
}

/// A configured Normal search.
pub struct NormalSearch<'a> {
    cache: &'a KeywordCache,
    accepted_filters: &'a BTreeSet<String>,
    plugins: &'a [Box<dyn ResultPlugin>],
}

impl<'a> NormalSearch<'a> {
    /// Create a Normal search over a keyword cache.
    pub fn new(
        cache: &'a KeywordCache,
        accepted_filters: &'a BTreeSet<String>,
        plugins: &'a [Box<dyn ResultPlugin>],
    ) -> Self {
        Self {
            cache,
            accepted_filters,
            plugins,
        }
    }

    /// Compute the ranked, post-processed result list.
    pub fn collect<S>(&self, storage: &S, query: &Query, fields: &[String]) -> Result<Vec<Record>>
    where
        S: StorageAdapter + ?Sized,
    {
        let keywords = correct_keywords(self.cache, query.keywords());
        let filters = admissible_filters(query.filters(), self.accepted_filters);

        let mut results: Vec<Record> = Vec::new();
        let mut positions: HashMap<Record, usize> = HashMap::new();

        for field in fields {
            for keyword in keywords.keys() {
                for mut record in storage.select(field, Some(keyword), None)? {
                    let Some(score) = score_record(&record, field, &keywords) else {
                        log::debug!("Skipped record without field '{field}'");
                        continue;
                    };
                    if !passes_filters(&record, &filters) {
                        continue;
                    }
                    match positions.get(&record) {
                        Some(&index) => results[index].set_score(score),
                        None => {
                            record.set_score(score);
                            positions.insert(record.clone(), results.len());
                            results.push(record);
                        }
                    }
                }
            }
        }

        results.sort_by(|a, b| b.score().total_cmp(&a.score()));

        let results = self
            .plugins
            .iter()
            .fold(results, |records, plugin| plugin.transform(records));

        log::debug!(
            "Normal search '{}' over {:?}: {} records",
            query.text(),
            fields,
            results.len()
        );
        Ok(results)
    }

    /// Run the search and deliver each result in final order.
    ///
    /// Returns the number of records delivered.
    pub fn search<S, F>(&self, storage: &S, query: &Query, fields: &[String], mut deliver: F) -> Result<usize>
    where
        S: StorageAdapter + ?Sized,
        F: FnMut(Record),
    {
        let results = self.collect(storage, query, fields)?;
        let delivered = results.len();
        results.into_iter().for_each(&mut deliver);
        Ok(delivered)
    }
}

// ============================================================================
// Tests
// ============================================================================
