//! Record representation.
//!
//! A [`Record`] is one row of the searched store: a mapping from field name
//! to a typed [`FieldValue`], a relevance score written by Normal search,
//! and optional main/secondary field designations.
//!
//! # Identity
//!
//! Two records are equal when their values form the same multiset, whatever
//! the keys those values sit under. `{"a": "x", "b": "y"}` equals
//! `{"c": "y", "d": "x"}`. Stores use this relation to find a record handed
//! back to them, and Normal search uses it to deduplicate results.
//!
//! # Example
//!
//! ```rust
//! use orion_search::Record;
//!
//! let mut record = Record::new()
//!     .with("title", "Hello World")
//!     .with("author", "Me")
//!     .with("year", 2019);
//!
//! assert!(record.set_main("title"));
//! assert!(!record.set_secondary("content"));
//! assert_eq!(record.keys().len(), 3);
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use orion_core::FieldKind;
use serde::{Deserialize, Serialize};

/// A typed field value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single text value.
    Text(String),
    /// A set of text values (e.g. the `keywords` field).
    TextSet(BTreeSet<String>),
    /// A signed integer.
    Integer(i64),
    /// A boolean flag.
    Boolean(bool),
}

impl FieldValue {
    /// Build a text-set value.
    pub fn set<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::TextSet(items.into_iter().map(Into::into).collect())
    }

    /// Kind of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::TextSet(_) => FieldKind::TextSet,
            FieldValue::Integer(_) => FieldKind::Integer,
            FieldValue::Boolean(_) => FieldKind::Boolean,
        }
    }

    /// The text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The set, if this is a text-set value.
    pub fn as_text_set(&self) -> Option<&BTreeSet<String>> {
        match self {
            FieldValue::TextSet(set) => Some(set),
            _ => None,
        }
    }

    /// Match tokens of this value.
    ///
    /// Text is lowercased and split on whitespace without further
    /// normalization; set members are taken as-is; scalars yield their
    /// display form.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            FieldValue::Text(text) => text
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            FieldValue::TextSet(set) => set.iter().cloned().collect(),
            scalar => vec![scalar.to_string()],
        }
    }

    /// Check whether `token` is one of this value's match tokens.
    pub fn contains_token(&self, token: &str) -> bool {
        match self {
            FieldValue::TextSet(set) => set.contains(token),
            other => other.tokens().iter().any(|t| t == token),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::TextSet(set) => {
                let joined: Vec<&str> = set.iter().map(String::as_str).collect();
                f.write_str(&joined.join(" "))
            }
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<BTreeSet<String>> for FieldValue {
    fn from(value: BTreeSet<String>) -> Self {
        FieldValue::TextSet(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

/// One row of a searched store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    data: BTreeMap<String, FieldValue>,
    #[serde(default)]
    score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    secondary: Option<String>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, returning the record.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.data.insert(key.into(), value.into())
    }

    /// Value of a field.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.data.get(key)
    }

    /// Text of a field, if present and textual.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    /// Underlying field map.
    pub fn data(&self) -> &BTreeMap<String, FieldValue> {
        &self.data
    }

    /// Field names.
    pub fn keys(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).collect()
    }

    /// Field values.
    pub fn values(&self) -> Vec<&FieldValue> {
        self.data.values().collect()
    }

    /// Relevance score from the last Normal search that visited this record.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub(crate) fn set_score(&mut self, score: f64) {
        self.score = score;
    }

    /// Designated main field.
    pub fn main(&self) -> Option<&str> {
        self.main.as_deref()
    }

    /// Designate `key` as the main field.
    ///
    /// Returns `false`, leaving the designation unchanged, when the record
    /// has no such field.
    pub fn set_main(&mut self, key: &str) -> bool {
        if self.data.contains_key(key) {
            self.main = Some(key.to_string());
            true
        } else {
            false
        }
    }

    /// Designated secondary field.
    pub fn secondary(&self) -> Option<&str> {
        self.secondary.as_deref()
    }

    /// Designate `key` as the secondary field.
    ///
    /// Returns `false`, leaving the designation unchanged, when the record
    /// has no such field.
    pub fn set_secondary(&mut self, key: &str) -> bool {
        if self.data.contains_key(key) {
            self.secondary = Some(key.to_string());
            true
        } else {
            false
        }
    }

    /// Values sorted, so equal multisets compare element-wise.
    fn value_bag(&self) -> Vec<&FieldValue> {
        let mut bag = self.values();
        bag.sort();
        bag
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len() && self.value_bag() == other.value_bag()
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value_bag().hash(state);
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

// ============================================================================
// Tests
// ============================================================================
