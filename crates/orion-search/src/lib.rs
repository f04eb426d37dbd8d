//! Embeddable full-text search over pluggable record stores.
//!
//! This crate turns free-text queries, optionally mixed with `field:value`
//! filter clauses, into matches against records held by a caller-supplied
//! store. Storage is delegated to a [`StorageAdapter`]; the crate keeps a
//! vocabulary of known keywords next to it and runs one of two strategies.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      orion-search                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SearchEngine (filters, plugins, dispatch by SearchType)    │
//! │  ├── Quick  (exact, streamed, unranked, duplicates)         │
//! │  └── Normal (corrected, filtered, scored, ranked)           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Query (filter clauses + keyword weights)                   │
//! │  Tokenizer / StopwordFilter                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Database (KeywordCache + configure/add)                    │
//! │  StorageAdapter trait                                       │
//! │  └── MemoryStorage (linear scan default)                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use orion_search::{Database, FieldSpec, MemoryStorage, Query, Record, SearchEngine, SearchType};
//!
//! let mut db = Database::new(MemoryStorage::from(vec![
//!     Record::new().with("title", "Roses are red").with("type", "poem"),
//!     Record::new().with("title", "Red dwarf stars").with("type", "article"),
//! ]));
//! db.configure(&FieldSpec::new("title")).unwrap();
//!
//! let engine = SearchEngine::new(db).with_filters(["type"]);
//! let query = Query::new("roses red type:poem");
//!
//! let mut titles = Vec::new();
//! engine
//!     .perform(&query, SearchType::Normal, |record| {
//!         titles.push(record.text("title").unwrap_or_default().to_string())
//!     })
//!     .unwrap();
//! assert_eq!(titles, vec!["Roses are red".to_string()]);
//! ```
//!
//! # Concurrency
//!
//! Everything is synchronous. Configuring, adding and searching against the
//! same database must be serialized by the caller.

pub mod cache;
pub mod database;
pub mod engine;
pub mod query;
pub mod record;
pub mod search;
pub mod stopwords;
pub mod storage;
pub mod tokenizer;
pub mod types;

// Re-exports
pub use cache::KeywordCache;
pub use database::{CONFIGURE_PAGE_SIZE, Database, FieldSpec};
pub use engine::SearchEngine;
pub use query::{Filter, KeywordWeights, Query};
pub use record::{FieldValue, Record};
pub use search::ResultPlugin;
pub use storage::{MemoryStorage, StorageAdapter};
pub use tokenizer::Tokenizer;
pub use types::{KEYWORDS_FIELD, SearchConfig, SearchType};

pub use orion_core::{Error, FieldKind, Result};
