//! Custom storage adapters plugged into the engine.

use std::collections::BTreeSet;
use std::ops::Range;

use orion_search::{
    Database, Error, FieldSpec, FieldValue, KEYWORDS_FIELD, MemoryStorage, Query, Record, Result,
    SearchEngine, SearchType, StorageAdapter,
};

use crate::common::{BrokenStorage, RecordingStorage, library, plain};

#[test]
fn test_quick_search_propagates_adapter_errors() {
    let engine = SearchEngine::new(Database::new(BrokenStorage::default()));
    let mut delivered = 0;
    let err = engine
        .perform(&Query::new("anything"), SearchType::Quick, |_| delivered += 1)
        .unwrap_err();

    assert!(matches!(err, Error::Adapter { .. }));
    assert!(err.to_string().contains("keywords"));
    assert_eq!(delivered, 0);
}

#[test]
fn test_normal_search_delivers_nothing_on_failure() {
    let engine = SearchEngine::new(Database::new(BrokenStorage::default()));
    let mut delivered = 0;
    let result = engine.perform(&Query::new("anything"), SearchType::Normal, |_| delivered += 1);

    assert!(result.is_err());
    assert_eq!(delivered, 0);
}

#[test]
fn test_advanced_search_is_reserved() {
    let engine = SearchEngine::new(Database::new(BrokenStorage::default()));
    let err = engine
        .perform(&Query::new("anything"), SearchType::Advanced, |_| {})
        .unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
}

#[test]
fn test_engine_issues_selects_per_field_and_keyword() {
    let mut db = Database::new(RecordingStorage::new(library()));
    db.configure(&FieldSpec::new("title")).unwrap();
    db.storage().clear();

    let engine = SearchEngine::new(db);
    let query = Query::parse("random test", &plain()).restrict_to(["title", "author"]);
    let results = engine.collect(&query, SearchType::Normal).unwrap();
    assert_eq!(results.len(), 2);

    let calls = engine.database().storage().calls();
    let pairs: Vec<(String, Option<String>)> = calls
        .into_iter()
        .map(|call| (call.field, call.value))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("title".to_string(), Some("random".to_string())),
            ("title".to_string(), Some("test".to_string())),
            ("author".to_string(), Some("random".to_string())),
            ("author".to_string(), Some("test".to_string())),
        ]
    );
}

/// Adapter relying on the default `count`.
#[derive(Debug, Default)]
struct VecStorage {
    rows: Vec<Record>,
}

impl StorageAdapter for VecStorage {
    fn select(
        &self,
        field: &str,
        value: Option<&str>,
        range: Option<Range<usize>>,
    ) -> Result<Vec<Record>> {
        let matches = self.rows.iter().filter(|record| match value {
            None => true,
            Some(value) => record.get(field).is_some_and(|v| v.contains_token(value)),
        });
        Ok(match range {
            Some(range) => matches
                .skip(range.start)
                .take(range.end.saturating_sub(range.start))
                .cloned()
                .collect(),
            None => matches.cloned().collect(),
        })
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
            .ok_or_else(|| Error::record_not_found("no matching row"))?;
        row.insert(KEYWORDS_FIELD, FieldValue::set(keywords.iter().cloned()));
        Ok(())
    }
}

#[test]
fn test_default_count_selects_everything() {
    let storage = VecStorage {
        rows: library(),
    };
    assert_eq!(storage.count().unwrap(), 4);
}

#[test]
fn test_custom_adapter_round_trip() {
    let mut db = Database::new(VecStorage::default());
    db.add(&library(), &FieldSpec::new("title")).unwrap();
    assert_eq!(db.storage().count().unwrap(), 4);
    assert!(db.keyword_cache().contains("random"));

    let engine = SearchEngine::new(db);
    let results = engine
        .collect(&Query::parse("randon", &plain()), SearchType::Normal)
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].text("title"), Some("Random titles"));
}

/// Adapter ignoring the selected field, as a loose full-text backend might.
struct LooseStorage(MemoryStorage);

impl StorageAdapter for LooseStorage {
    fn select(
        &self,
        field: &str,
        value: Option<&str>,
        range: Option<Range<usize>>,
    ) -> Result<Vec<Record>> {
        let rows = self.0.select(field, None, range)?;
        Ok(match value {
            None => rows,
            Some(value) => rows
                .into_iter()
                .filter(|row| row.values().iter().any(|v| v.contains_token(value)))
                .collect(),
        })
    }

    fn add(&mut self, records: &[Record]) -> Result<()> {
        self.0.add(records)
    }

    fn write_keywords(&mut self, keywords: &BTreeSet<String>, record: &Record) -> Result<()> {
        self.0.write_keywords(keywords, record)
    }
}

#[test]
fn test_rows_lacking_searched_field_are_excluded() {
    let storage = LooseStorage(MemoryStorage::from(vec![
        Record::new().with("title", "rust"),
        Record::new().with("body", "rust without a title"),
    ]));
    let engine = SearchEngine::new(Database::new(storage));
    let query = Query::parse("rust", &plain()).restrict_to(["title"]);

    let mut delivered = Vec::new();
    let count = engine
        .perform(&query, SearchType::Normal, |record| delivered.push(record))
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(delivered[0].text("title"), Some("rust"));
}
