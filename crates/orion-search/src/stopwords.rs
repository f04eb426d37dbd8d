//! Stopword filtering for tokenized text.
//!
//! Stopword tables come from the `stop-words` crate, keyed by ISO 639-1
//! language code. On top of the table the filter supports:
//!
//! - Allowlist: Words to preserve even if they're stopwords
//! - Custom stopwords: Additional words to filter
//! - Graceful fallback: If all tokens are filtered, the original tokens are kept
//!
//! Tokens reaching the filter are already lowercased and diacritic-folded,
//! so every comparison here is against normalized words.
//!
//! # Example
//!
//! ```rust
//! use orion_search::stopwords::StopwordFilter;
//! use orion_search::SearchConfig;
//!
//! let filter = StopwordFilter::new("en", &SearchConfig::default());
//!
//! let tokens = vec!["what".to_string(), "is".to_string(), "a".to_string(), "cadence".to_string()];
//! assert_eq!(filter.filter_tokens(tokens), vec!["cadence".to_string()]);
//! ```

use std::collections::HashSet;

use orion_core::normalize_text;

use crate::SearchConfig;

/// Stopword filter for one language.
///
/// Removes common words while preserving allowlisted terms.
pub struct StopwordFilter {
    language: String,
    stopwords: HashSet<String>,
    allowlist: HashSet<String>,
    enabled: bool,
}

impl StopwordFilter {
    /// Create a stopword filter for `language` from configuration.
    ///
    /// Languages without a table get an empty stopword set; custom
    /// stopwords from the configuration still apply.
    pub fn new(language: &str, config: &SearchConfig) -> Self {
        let code = language.to_ascii_lowercase();
        let mut stopwords: HashSet<String> = match stop_words::lookup(&code) {
            Some(words) => words.iter().map(|s| normalize_text(s)).collect(),
            None => {
                log::debug!("No stopword table for language '{language}'");
                HashSet::new()
            }
        };

        for word in &config.custom_stopwords {
            stopwords.insert(normalize_text(word));
        }

        let allowlist: HashSet<String> =
            config.allowlist.iter().map(|w| normalize_text(w)).collect();

        Self {
            language: language.to_string(),
            stopwords,
            allowlist,
            enabled: config.stopwords_enabled,
        }
    }

    /// Create a disabled filter (passes all tokens through).
    pub fn disabled() -> Self {
        Self {
            language: String::new(),
            stopwords: HashSet::new(),
            allowlist: HashSet::new(),
            enabled: false,
        }
    }

    /// Remove stopwords from a token list, preserving order.
    ///
    /// If every token is a stopword, the input is returned unchanged so a
    /// non-empty text never tokenizes to nothing.
    pub fn filter_tokens(&self, tokens: Vec<String>) -> Vec<String> {
        if !self.enabled {
            return tokens;
        }

        let filtered: Vec<String> = tokens
            .iter()
            .filter(|token| !self.is_stopword(token))
            .cloned()
            .collect();

        if filtered.is_empty() {
            tokens
        } else {
            filtered
        }
    }

    /// Check if a normalized word is a stopword.
    ///
    /// Returns `false` if the word is in the allowlist.
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.allowlist.contains(word) {
            return false;
        }
        self.stopwords.contains(word)
    }

    /// Language code this filter was built for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the number of stopwords in the filter.
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if filtering is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl std::fmt::Debug for StopwordFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopwordFilter")
            .field("language", &self.language)
            .field("enabled", &self.enabled)
            .field("stopword_count", &self.stopwords.len())
            .field("allowlist_count", &self.allowlist.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
