//! Search orchestration.
//!
//! [`SearchEngine`] binds a [`Database`], the set of field names that
//! query filter clauses may target, and the plugins applied to Normal
//! results. [`SearchEngine::perform`] dispatches a query to the strategy
//! named by a [`SearchType`].
//!
//! # Example
//!
//! ```rust
//! use orion_search::{Database, FieldSpec, MemoryStorage, Query, Record, SearchEngine, SearchType};
//!
//! let mut db = Database::new(MemoryStorage::from(vec![
//!     Record::new().with("title", "Hello World").with("author", "Me"),
//!     Record::new().with("title", "Hello World").with("author", "you"),
//! ]));
//! db.configure(&FieldSpec::new("title")).unwrap();
//!
//! let engine = SearchEngine::new(db).with_filters(["author"]);
//! let query = Query::new("World author:me").restrict_to(["title", "author"]);
//!
//! let mut authors = Vec::new();
//! engine
//!     .perform(&query, SearchType::Normal, |record| {
//!         authors.push(record.text("author").unwrap_or_default().to_string())
//!     })
//!     .unwrap();
//! assert_eq!(authors, vec!["Me".to_string()]);
//! ```

use std::collections::BTreeSet;

use orion_core::{Error, Result};

use crate::database::Database;
use crate::query::Query;
use crate::record::Record;
use crate::search::normal::NormalSearch;
use crate::search::{ResultPlugin, quick, search_fields};
use crate::storage::{MemoryStorage, StorageAdapter};
use crate::types::SearchType;

/// Dispatches queries against one database.
pub struct SearchEngine<S: StorageAdapter = MemoryStorage> {
    db: Database<S>,
    filters: BTreeSet<String>,
    plugins: Vec<Box<dyn ResultPlugin>>,
}

impl<S: StorageAdapter> SearchEngine<S> {
    /// Create an engine that accepts no filter clauses.
    pub fn new(db: Database<S>) -> Self {
        Self {
            db,
            filters: BTreeSet::new(),
            plugins: Vec::new(),
        }
    }

    /// Accept filter clauses on the given fields, returning the engine.
    pub fn with_filters<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.add_filters(fields);
        self
    }

    /// Accept filter clauses on additional fields.
    pub fn add_filters<I, F>(&mut self, fields: I)
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.filters.extend(fields.into_iter().map(Into::into));
    }

    /// Fields filter clauses may target.
    pub fn accepted_filters(&self) -> &BTreeSet<String> {
        &self.filters
    }

    /// Parse `text` with the database's language and stopword options, so
    /// queries tokenize the way records were indexed.
    pub fn query(&self, text: &str) -> Query {
        Query::parse_with(text, self.db.config())
    }

    /// Append a plugin to the Normal search pipeline.
    pub fn register<P>(&mut self, plugin: P)
    where
        P: ResultPlugin + 'static,
    {
        self.plugins.push(Box::new(plugin));
    }

    /// Number of registered plugins.
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// The searched database.
    pub fn database(&self) -> &Database<S> {
        &self.db
    }

    /// Mutable access to the database, e.g. to add records.
    pub fn database_mut(&mut self) -> &mut Database<S> {
        &mut self.db
    }

    /// Release the database.
    pub fn into_database(self) -> Database<S> {
        self.db
    }

    /// Run `query` with the given strategy, calling `deliver` once per result.
    ///
    /// Quick delivers while gathering; Normal delivers once ranking and
    /// plugins are done. Normal search expects the database to be
    /// configured first; without a cache keywords are searched uncorrected.
    ///
    /// # Errors
    ///
    /// - `Error::Unsupported` for [`SearchType::Advanced`]
    /// - any adapter error, which aborts the search
    pub fn perform<F>(&self, query: &Query, search_type: SearchType, deliver: F) -> Result<usize>
    where
        F: FnMut(Record),
    {
        let fields = search_fields(query, &self.db.config().default_fields);
        match search_type {
            SearchType::Quick => quick::search(self.db.storage(), query, &fields, deliver),
            SearchType::Normal => {
                NormalSearch::new(self.db.keyword_cache(), &self.filters, &self.plugins)
                    .search(self.db.storage(), query, &fields, deliver)
            }
            SearchType::Advanced => Err(Error::unsupported("advanced search")),
        }
    }

    /// Run `query` and collect the results.
    pub fn collect(&self, query: &Query, search_type: SearchType) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        self.perform(query, search_type, |record| records.push(record))?;
        Ok(records)
    }
}

impl<S: StorageAdapter + std::fmt::Debug> std::fmt::Debug for SearchEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("db", &self.db)
            .field("filters", &self.filters)
            .field("plugin_count", &self.plugins.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
