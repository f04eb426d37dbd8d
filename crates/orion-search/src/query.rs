//! Query parsing.
//!
//! A [`Query`] splits raw query text into two parts:
//!
//! - **Filters**: `field:value` clauses (no whitespace around the colon),
//!   kept in order of appearance, duplicates allowed
//! - **Keywords**: the remaining text, tokenized and weighted by intra-query
//!   term frequency (`count / total`), so weights over distinct tokens sum to 1
//!
//! Filter clauses are removed from the text before tokenization and never
//! contribute keywords.
//!
//! # Example
//!
//! ```rust
//! use orion_search::Query;
//!
//! let query = Query::new("Rust search author:arthur");
//! assert_eq!(query.filters()[0].field, "author");
//! assert_eq!(query.filters()[0].value, "arthur");
//! assert_eq!(query.keywords().len(), 2);
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tokenizer::Tokenizer;
use crate::types::SearchConfig;

/// Distinct token → weight.
pub type KeywordWeights = BTreeMap<String, f64>;

#[allow(clippy::expect_used)]
static FILTER_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+:\S+").expect("filter clause pattern is valid"));

/// A `field:value` clause extracted from query text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter {
    /// Field name, as written.
    pub field: String,
    /// Expected value, as written.
    pub value: String,
}

impl Filter {
    /// Create a filter.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A parsed search query.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    text: String,
    language: String,
    fields: Option<Vec<String>>,
    filters: Vec<Filter>,
    keywords: KeywordWeights,
}

impl Query {
    /// Parse an English query with default tokenizer options.
    pub fn new(text: &str) -> Self {
        Self::parse(text, &Tokenizer::default())
    }

    /// Parse a query written in `language` with default tokenizer options.
    pub fn with_language(text: &str, language: &str) -> Self {
        Self::parse(text, &Tokenizer::for_language(language))
    }

    /// Parse a query with the language and stopword options of `config`.
    pub fn parse_with(text: &str, config: &SearchConfig) -> Self {
        Self::parse(text, &Tokenizer::new(&config.language, config))
    }

    /// Parse a query with an explicit tokenizer.
    pub fn parse(text: &str, tokenizer: &Tokenizer) -> Self {
        let (filters, remainder) = extract_filters(text);
        let keywords = weigh_keywords(&tokenizer.tokenize(&remainder));

        Self {
            text: text.to_string(),
            language: tokenizer.language().to_string(),
            fields: None,
            filters,
            keywords,
        }
    }

    /// Restrict the query to the given fields.
    ///
    /// Duplicate field names are dropped; the first occurrence keeps its
    /// position.
    pub fn restrict_to<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for field in fields {
            let field = field.into();
            if !unique.contains(&field) {
                unique.push(field);
            }
        }
        self.fields = Some(unique);
        self
    }

    /// Original query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Language the query was tokenized with.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Field restriction, if any.
    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }

    /// Filter clauses in order of appearance.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Keyword weights.
    pub fn keywords(&self) -> &KeywordWeights {
        &self.keywords
    }
}

/// Split `text` into filter clauses and the text left once they are removed.
pub fn extract_filters(text: &str) -> (Vec<Filter>, String) {
    let filters = FILTER_CLAUSE
        .find_iter(text)
        .filter_map(|m| m.as_str().split_once(':'))
        .map(|(field, value)| Filter::new(field, value))
        .collect();
    let remainder = FILTER_CLAUSE.replace_all(text, "").into_owned();
    (filters, remainder)
}

/// Weigh tokens by term frequency.
///
/// Returns an empty map for an empty token list.
pub fn weigh_keywords(tokens: &[String]) -> KeywordWeights {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_default() += 1;
    }

    let total = tokens.len() as f64;
    counts
        .into_iter()
        .map(|(token, count)| (token, count as f64 / total))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
