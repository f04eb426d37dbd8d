//! Common types for the search crate.
//!
//! These types are shared by the query parser, the database, and both
//! search strategies.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use orion_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Name of the field holding each record's keyword set.
pub const KEYWORDS_FIELD: &str = "keywords";

/// Search strategy.
///
/// Controls how `SearchEngine::perform` executes a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Exact matches, streamed unranked and without deduplication.
    Quick,
    /// Typo-corrected, filtered, scored, ranked and deduplicated matches.
    #[default]
    Normal,
    /// Machine-learning search. Reserved; always reports `Unsupported`.
    Advanced,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchType::Quick => "quick",
            SearchType::Normal => "normal",
            SearchType::Advanced => "advanced",
        };
        f.write_str(name)
    }
}

impl FromStr for SearchType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick" => Ok(SearchType::Quick),
            "normal" => Ok(SearchType::Normal),
            "advanced" => Ok(SearchType::Advanced),
            other => Err(Error::config(format!("unknown search type '{other}'"))),
        }
    }
}

/// Search configuration.
///
/// Controls tokenization and the default field list for searches. Every
/// field has a default, so an empty TOML document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// ISO 639-1 code of the default language.
    #[serde(default = "default_language")]
    pub language: String,

    /// Enable stopword filtering.
    #[serde(default = "default_true")]
    pub stopwords_enabled: bool,

    /// Custom stopwords to add.
    #[serde(default)]
    pub custom_stopwords: Vec<String>,

    /// Words to preserve (not filter as stopwords).
    #[serde(default)]
    pub allowlist: Vec<String>,

    /// Fields searched when a query carries no field restriction.
    #[serde(default = "default_fields")]
    pub default_fields: Vec<String>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

fn default_fields() -> Vec<String> {
    vec![KEYWORDS_FIELD.to_string()]
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            stopwords_enabled: default_true(),
            custom_stopwords: Vec::new(),
            allowlist: Vec::new(),
            default_fields: default_fields(),
        }
    }
}

impl SearchConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read and `Error::Config`
    /// if it is not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded search configuration from {}", path.display());
        Ok(config)
    }

    /// Serialize the configuration to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
