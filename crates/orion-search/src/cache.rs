//! Keyword vocabulary cache.
//!
//! The cache is the set of every token seen in the main and secondary
//! fields of configured or added records. It only grows. Normal search
//! snaps each query keyword to its nearest cached token, which is what
//! makes typos recoverable.
//!
//! Callers persist the cache between sessions: take a [`snapshot`] and
//! seed a new store with it through `Database::with_cache`. The serialized
//! form is a plain array of strings.
//!
//! [`snapshot`]: KeywordCache::snapshot

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Monotonically growing token set.
///
/// Iteration order is lexicographic, which fixes how distance ties are
/// broken in [`nearest`](KeywordCache::nearest).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordCache {
    tokens: BTreeSet<String>,
}

impl KeywordCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token; returns `true` if it was not cached yet.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        self.tokens.insert(token.into())
    }

    /// Check whether a token is cached.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of cached tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over cached tokens in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Copy of the cached tokens, for persistence.
    pub fn snapshot(&self) -> BTreeSet<String> {
        self.tokens.clone()
    }

    /// Cached token closest to `keyword` by Levenshtein distance.
    ///
    /// The first token in iteration order wins ties. Returns `None` for an
    /// empty cache. Runs in O(cache size) distance computations.
    pub fn nearest(&self, keyword: &str) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for token in self.iter() {
            let distance = strsim::levenshtein(keyword, token);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((token, distance));
                if distance == 0 {
                    break;
                }
            }
        }
        best.map(|(token, _)| token)
    }
}

impl From<BTreeSet<String>> for KeywordCache {
    fn from(tokens: BTreeSet<String>) -> Self {
        Self { tokens }
    }
}

impl<S: Into<String>> Extend<S> for KeywordCache {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.tokens.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordCache {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut cache = Self::new();
        cache.extend(iter);
        cache
    }
}

// ============================================================================
// Tests
// ============================================================================
