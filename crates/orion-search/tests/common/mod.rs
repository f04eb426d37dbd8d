//! Common fixtures and storage adapters for integration tests.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::ops::Range;

use orion_search::{
    Database, Error, FieldSpec, MemoryStorage, Record, Result, StorageAdapter, Tokenizer,
};

/// Four small records with `title` and `author` text fields.
pub fn library() -> Vec<Record> {
    vec![
        Record::new().with("title", "Hello World").with("author", "Me"),
        Record::new().with("title", "How are you").with("author", "you"),
        Record::new().with("title", "Random titles").with("author", "someone"),
        Record::new().with("title", "Just for test").with("author", "someone else"),
    ]
}

/// An in-memory database over `records`, configured on `title`.
pub fn configured(records: Vec<Record>) -> Database {
    let mut db = Database::new(MemoryStorage::from(records));
    db.configure(&FieldSpec::new("title")).unwrap();
    db
}

/// Tokenizer that keeps every word, for exact keyword assertions.
pub fn plain() -> Tokenizer {
    Tokenizer::without_stopwords()
}

/// One recorded `select` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCall {
    /// Selected field
    pub field: String,
    /// Selected value
    pub value: Option<String>,
    /// Requested row range
    pub range: Option<Range<usize>>,
}

/// Memory storage that records every `select` call.
#[derive(Debug, Default)]
pub struct RecordingStorage {
    inner: MemoryStorage,
    calls: RefCell<Vec<SelectCall>>,
}

impl RecordingStorage {
    /// Wrap the given records.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            inner: MemoryStorage::from(records),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Calls recorded so far.
    pub fn calls(&self) -> Vec<SelectCall> {
        self.calls.borrow().clone()
    }

    /// Forget recorded calls.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl StorageAdapter for RecordingStorage {
    fn select(
        &self,
        field: &str,
        value: Option<&str>,
        range: Option<Range<usize>>,
    ) -> Result<Vec<Record>> {
        self.calls.borrow_mut().push(SelectCall {
            field: field.to_string(),
            value: value.map(str::to_string),
            range: range.clone(),
        });
        self.inner.select(field, value, range)
    }

    fn add(&mut self, records: &[Record]) -> Result<()> {
        self.inner.add(records)
    }

    fn write_keywords(&mut self, keywords: &BTreeSet<String>, record: &Record) -> Result<()> {
        self.inner.write_keywords(keywords, record)
    }

    fn count(&self) -> Result<usize> {
        self.inner.count()
    }
}

/// Storage whose reads and writes fail, as a dropped connection would.
#[derive(Debug, Default)]
pub struct BrokenStorage {
    /// Rows reported by `count`
    pub rows: usize,
}

impl StorageAdapter for BrokenStorage {
    fn select(
        &self,
        field: &str,
        _value: Option<&str>,
        _range: Option<Range<usize>>,
    ) -> Result<Vec<Record>> {
        Err(Error::adapter_with_source(
            format!("select on '{field}' failed"),
            std::io::Error::other("connection reset"),
        ))
    }

    fn add(&mut self, _records: &[Record]) -> Result<()> {
        Err(Error::adapter("insert rejected"))
    }

    fn write_keywords(&mut self, _keywords: &BTreeSet<String>, _record: &Record) -> Result<()> {
        Err(Error::adapter("update rejected"))
    }

    fn count(&self) -> Result<usize> {
        Ok(self.rows)
    }
}
