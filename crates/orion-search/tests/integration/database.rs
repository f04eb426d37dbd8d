//! Keyword cache construction through `configure` and `add`.

use orion_search::{
    CONFIGURE_PAGE_SIZE, Database, Error, FieldSpec, KEYWORDS_FIELD, MemoryStorage, Query,
    Record, SearchEngine, SearchType,
};

use crate::common::{BrokenStorage, RecordingStorage, configured, library};

#[test]
fn test_configure_builds_vocabulary() {
    let db = configured(library());
    assert!(db.keyword_cache().contains("random"));
    assert!(db.keyword_cache().contains("titles"));
}

#[test]
fn test_add_extends_vocabulary_without_reconfigure() {
    let mut db = configured(library());
    db.add(
        &[Record::new()
            .with("title", "OrionSearch is awesome")
            .with("author", "github")],
        &FieldSpec::new("title"),
    )
    .unwrap();

    assert!(db.keyword_cache().contains("orionsearch"));
    assert_eq!(db.storage().rows().len(), 5);
}

#[test]
fn test_configure_walks_fixed_windows() {
    let records: Vec<Record> = (0..1500)
        .map(|i| Record::new().with("title", format!("item{i}")).with("id", i))
        .collect();
    let mut db = Database::new(RecordingStorage::new(records));
    db.configure(&FieldSpec::new("title")).unwrap();

    let ranges: Vec<_> = db
        .storage()
        .calls()
        .into_iter()
        .map(|call| {
            assert_eq!(call.field, KEYWORDS_FIELD);
            assert!(call.value.is_none());
            call.range
        })
        .collect();
    assert_eq!(
        ranges,
        vec![Some(0..CONFIGURE_PAGE_SIZE), Some(CONFIGURE_PAGE_SIZE..1500)]
    );
    assert_eq!(db.keyword_cache().len(), 1500);
}

#[test]
fn test_restored_cache_drives_correction() {
    let source = configured(library());
    let snapshot = source.snapshot();

    // A fresh store that only received rows through `add` keeps the old
    // vocabulary for corrections.
    let mut db = Database::with_cache(MemoryStorage::new(), snapshot);
    db.add(&library(), &FieldSpec::new("title")).unwrap();

    let engine = SearchEngine::new(db);
    let results = engine
        .collect(&Query::new("randon"), SearchType::Normal)
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].text("title"), Some("Random titles"));
}

#[test]
fn test_configure_propagates_adapter_errors() {
    let mut db = Database::new(BrokenStorage { rows: 3 });
    let err = db.configure(&FieldSpec::new("title")).unwrap_err();
    assert!(matches!(err, Error::Adapter { .. }));
    assert!(db.keyword_cache().is_empty());
    assert!(db.fields().is_none());
}

#[test]
fn test_add_propagates_adapter_errors() {
    let mut db = Database::new(BrokenStorage::default());
    let err = db
        .add(&library(), &FieldSpec::new("title"))
        .unwrap_err();
    assert!(err.to_string().contains("insert rejected"));
    assert!(db.keyword_cache().is_empty());
}

#[test]
fn test_select_through_database() {
    let db = configured(library());
    let everything = db.select(None, KEYWORDS_FIELD, None).unwrap();
    assert_eq!(everything.len(), 4);

    let authored = db.select(Some("someone"), "author", None).unwrap();
    assert_eq!(authored.len(), 2);
}
