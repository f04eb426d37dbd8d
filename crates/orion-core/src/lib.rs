//! OrionSearch core: shared errors and text utilities.
//!
//! This crate provides the foundational types used across all OrionSearch
//! crates. It has no internal OrionSearch dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: Text normalization helpers

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, FieldKind, Result};

pub use util::text::{fold_diacritics, normalize_text, split_tokens};
