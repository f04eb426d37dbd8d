//! Utility modules shared by the search crates.
//!
//! # Modules
//!
//! - [`text`]: Lowercasing, diacritic folding and punctuation stripping

pub mod text;
