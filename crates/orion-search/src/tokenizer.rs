//! Language-aware tokenization.
//!
//! The tokenizer turns text into an ordered list of normalized tokens:
//! lowercased, diacritics folded, punctuation stripped, split on
//! whitespace, with stopwords for the language removed. Stopword removal
//! never empties a non-empty token list.

use orion_core::split_tokens;

use crate::SearchConfig;
use crate::stopwords::StopwordFilter;

/// Tokenizer bound to one language.
#[derive(Debug)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
}

impl Tokenizer {
    /// Create a tokenizer for `language` using configured stopword options.
    pub fn new(language: &str, config: &SearchConfig) -> Self {
        Self {
            stopwords: StopwordFilter::new(language, config),
        }
    }

    /// Create a tokenizer for `language` with default options.
    pub fn for_language(language: &str) -> Self {
        Self::new(language, &SearchConfig::default())
    }

    /// Create a tokenizer that keeps every token.
    pub fn without_stopwords() -> Self {
        Self {
            stopwords: StopwordFilter::disabled(),
        }
    }

    /// Language code of the stopword table in use.
    pub fn language(&self) -> &str {
        self.stopwords.language()
    }

    /// Tokenize `text`.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.stopwords.filter_tokens(split_tokens(text))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::for_language("en")
    }
}

// ============================================================================
// Tests
// ============================================================================
