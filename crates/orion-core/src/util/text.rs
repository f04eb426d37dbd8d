//! Text normalization utilities.
//!
//! Provides the character-level normalization applied before tokenizing
//! record fields and queries: lowercasing, diacritic folding, and removal
//! of everything that is not a word character, digit, or whitespace.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold diacritics by decomposing to NFD and dropping combining marks.
///
/// # Examples
///
/// ```
/// use orion_core::util::text::fold_diacritics;
///
/// assert_eq!(fold_diacritics("café"), "cafe");
/// assert_eq!(fold_diacritics("Ångström"), "Angstrom");
/// ```
pub fn fold_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Normalize text for tokenization.
///
/// Performs the following transformations:
/// 1. Converts to lowercase
/// 2. Folds diacritics
/// 3. Strips characters that are not alphanumeric, `_`, or whitespace
///
/// Whitespace is kept as-is; use [`split_tokens`] to collapse runs.
///
/// # Examples
///
/// ```
/// use orion_core::util::text::normalize_text;
///
/// assert_eq!(normalize_text("Hello, World!"), "hello world");
/// assert_eq!(normalize_text("Crème brûlée"), "creme brulee");
/// ```
pub fn normalize_text(text: &str) -> String {
    fold_diacritics(&text.to_lowercase())
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Normalize text and split it on whitespace runs.
///
/// Empty fragments never appear in the output.
pub fn split_tokens(text: &str) -> Vec<String> {
    normalize_text(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
