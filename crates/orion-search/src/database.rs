//! Keyword-cache maintenance over a storage adapter.
//!
//! A [`Database`] pairs a [`StorageAdapter`] with the [`KeywordCache`] built
//! from it. Before any Normal search the store must be configured once:
//!
//! 1. Count the stored rows
//! 2. Walk them in windows of [`CONFIGURE_PAGE_SIZE`]
//! 3. Tokenize each record's main (and secondary) field
//! 4. Union the tokens into the cache and write them to the record's
//!    `keywords` field
//!
//! Records inserted later through [`Database::add`] go through step 3 and 4
//! individually, so the cache never needs a full rebuild.
//!
//! # Example
//!
//! ```rust
//! use orion_search::{Database, FieldSpec, MemoryStorage, Record};
//!
//! let storage = MemoryStorage::from(vec![
//!     Record::new().with("title", "Random titles").with("author", "someone"),
//! ]);
//! let mut db = Database::new(storage);
//! db.configure(&FieldSpec::new("title")).unwrap();
//! assert!(db.keyword_cache().contains("random"));
//! ```
//!
//! # Concurrency
//!
//! The cache is plain owned state. Mutating operations take `&mut self`;
//! callers sharing a database across threads serialize access themselves.

use std::collections::BTreeSet;
use std::ops::Range;

use orion_core::{Error, FieldKind, Result};

use crate::SearchConfig;
use crate::cache::KeywordCache;
use crate::record::Record;
use crate::storage::{MemoryStorage, StorageAdapter};
use crate::tokenizer::Tokenizer;
use crate::types::KEYWORDS_FIELD;

/// Rows processed per window during [`Database::configure`].
pub const CONFIGURE_PAGE_SIZE: usize = 1000;

/// Text fields that feed the keyword cache.
///
/// Both fields must hold `Text` values in every record; anything else is a
/// schema mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Main text field (required).
    pub main: String,
    /// Secondary text field.
    pub secondary: Option<String>,
    /// ISO 639-1 language code used to tokenize both fields. `None` uses
    /// the database's configured language.
    pub language: Option<String>,
}

impl FieldSpec {
    /// Declare `main` as the only text field, in the configured language.
    pub fn new(main: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            secondary: None,
            language: None,
        }
    }

    /// Add a secondary text field.
    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    /// Set the tokenization language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    fn fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.main.as_str()).chain(self.secondary.as_deref())
    }
}

/// Record store plus its keyword cache.
#[derive(Debug)]
pub struct Database<S: StorageAdapter = MemoryStorage> {
    storage: S,
    cache: KeywordCache,
    config: SearchConfig,
    fields: Option<FieldSpec>,
}

impl Database<MemoryStorage> {
    /// Create an empty in-memory database.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }
}

impl<S: StorageAdapter> Database<S> {
    /// Wrap a storage adapter with an empty cache.
    pub fn new(storage: S) -> Self {
        Self::with_cache(storage, KeywordCache::new())
    }

    /// Wrap a storage adapter, restoring a previously saved cache.
    pub fn with_cache(storage: S, cache: impl Into<KeywordCache>) -> Self {
        Self {
            storage,
            cache: cache.into(),
            config: SearchConfig::default(),
            fields: None,
        }
    }

    /// Replace the tokenizer configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Tokenizer configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Underlying storage adapter.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the storage adapter.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Keyword cache.
    pub fn keyword_cache(&self) -> &KeywordCache {
        &self.cache
    }

    /// Copy of the keyword cache, for persistence.
    pub fn snapshot(&self) -> BTreeSet<String> {
        self.cache.snapshot()
    }

    /// Tokenizer for `language` under this database's stopword options.
    ///
    /// `None` uses the configured default language.
    pub fn tokenizer(&self, language: Option<&str>) -> Tokenizer {
        let language = language.unwrap_or(self.config.language.as_str());
        Tokenizer::new(language, &self.config)
    }

    /// Fields given to the last `configure` call.
    pub fn fields(&self) -> Option<&FieldSpec> {
        self.fields.as_ref()
    }

    /// Build the keyword cache from every stored record.
    ///
    /// Must run before any Normal search.
    pub fn configure(&mut self, spec: &FieldSpec) -> Result<()> {
        self.configure_with_progress(spec, |_, _| {})
    }

    /// Build the keyword cache, reporting `(rows processed, total rows)`
    /// after each window.
    ///
    /// # Errors
    ///
    /// Fails on the first schema mismatch or adapter error. Windows already
    /// processed stay in the cache.
    pub fn configure_with_progress<F>(&mut self, spec: &FieldSpec, mut progress: F) -> Result<()>
    where
        F: FnMut(usize, usize),
    {
        let tokenizer = self.tokenizer(spec.language.as_deref());
        let total = self.storage.count()?;
        let before = self.cache.len();

        log::info!(
            "Configuring keyword cache from {total} rows (main: {}, secondary: {:?})",
            spec.main,
            spec.secondary
        );

        let mut start = 0;
        while start < total {
            let end = (start + CONFIGURE_PAGE_SIZE).min(total);
            let window: Range<usize> = start..end;
            let records = self.storage.select(KEYWORDS_FIELD, None, Some(window))?;
            for record in &records {
                self.index_record(record, spec, &tokenizer)?;
            }
            progress(end, total);
            start = end;
        }

        self.fields = Some(spec.clone());
        log::info!(
            "Keyword cache configured: {} tokens ({} new)",
            self.cache.len(),
            self.cache.len() - before
        );
        Ok(())
    }

    /// Persist new records and fold their keywords into the cache.
    pub fn add(&mut self, records: &[Record], spec: &FieldSpec) -> Result<()> {
        self.storage.add(records)?;

        let tokenizer = self.tokenizer(spec.language.as_deref());
        for record in records {
            self.index_record(record, spec, &tokenizer)?;
        }

        log::debug!(
            "Added {} records, cache now holds {} tokens",
            records.len(),
            self.cache.len()
        );
        Ok(())
    }

    /// Select records through the adapter.
    ///
    /// `value = None` selects every record, `range = None` every row.
    pub fn select(
        &self,
        value: Option<&str>,
        field: &str,
        range: Option<Range<usize>>,
    ) -> Result<Vec<Record>> {
        self.storage.select(field, value, range)
    }

    fn index_record(&mut self, record: &Record, spec: &FieldSpec, tokenizer: &Tokenizer) -> Result<()> {
        let mut keywords = BTreeSet::new();
        for field in spec.fields() {
            let value = record.get(field).ok_or_else(|| Error::missing_field(field))?;
            let text = value
                .as_text()
                .ok_or_else(|| Error::schema_mismatch(field, FieldKind::Text, value.kind()))?;
            keywords.extend(tokenizer.tokenize(text));
        }

        self.cache.extend(keywords.iter().cloned());
        self.storage.write_keywords(&keywords, record)
    }
}

// ============================================================================
// Tests
// ============================================================================
