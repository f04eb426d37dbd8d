//! Quick search: exact, unranked, not deduplicated.

use orion_search::{Database, FieldSpec, Query, Record, SearchEngine, SearchType};

use crate::common::{RecordingStorage, configured, library, plain};

#[test]
fn test_quick_finds_exact_tokens() {
    let engine = SearchEngine::new(configured(library()));
    let query = Query::parse("random test", &plain()).restrict_to(["title", "author"]);

    let mut titles = Vec::new();
    engine
        .perform(&query, SearchType::Quick, |record| {
            titles.push(record.text("title").unwrap().to_string())
        })
        .unwrap();

    assert!(titles.contains(&"Just for test".to_string()));
    assert!(titles.contains(&"Random titles".to_string()));
    assert_eq!(titles.len(), 2);
}

#[test]
fn test_quick_delivers_duplicates() {
    let db = configured(vec![
        Record::new().with("title", "Rust in action").with("tag", "rust"),
        Record::new().with("title", "Hello World").with("tag", "greeting"),
    ]);
    let engine = SearchEngine::new(db);
    let query = Query::parse("rust", &plain()).restrict_to(["title", "tag"]);

    let results = engine.collect(&query, SearchType::Quick).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], results[1]);
    assert_eq!(results[0].text("tag"), Some("rust"));
}

#[test]
fn test_quick_selects_every_field_keyword_pair() {
    let mut db = Database::new(RecordingStorage::new(library()));
    db.configure(&FieldSpec::new("title")).unwrap();
    db.storage().clear();

    let engine = SearchEngine::new(db);
    let query = Query::parse("hello random world", &plain()).restrict_to(["title", "author"]);
    engine.perform(&query, SearchType::Quick, |_| {}).unwrap();

    let calls = engine.database().storage().calls();
    assert_eq!(calls.len(), 6);
    assert!(calls.iter().all(|call| call.range.is_none()));
    assert_eq!(calls[0].field, "title");
    assert_eq!(calls[5].field, "author");
}

#[test]
fn test_quick_skips_correction() {
    let engine = SearchEngine::new(configured(library()));
    let results = engine
        .collect(&Query::parse("randon", &plain()), SearchType::Quick)
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_quick_ignores_plugins() {
    let mut engine = SearchEngine::new(configured(library()));
    engine.register(|_: Vec<Record>| Vec::<Record>::new());

    let results = engine
        .collect(&Query::parse("random", &plain()), SearchType::Quick)
        .unwrap();
    assert_eq!(results.len(), 1);
}
