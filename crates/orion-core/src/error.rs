//! Error types for OrionSearch.

use std::fmt;

/// The kind of value a record field holds.
///
/// Used to describe schema mismatches: a field declared as text that turns
/// out to hold a set or a scalar is reported with both kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A single text value.
    Text,
    /// A set of text values.
    TextSet,
    /// A signed integer.
    Integer,
    /// A boolean flag.
    Boolean,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "text",
            FieldKind::TextSet => "text set",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while configuring a store or running a search.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A field holds a value of a different kind than the one declared.
    #[error("Schema mismatch on field '{field}': expected {expected}, found {found}")]
    SchemaMismatch {
        /// Field whose value had the wrong kind
        field: String,
        /// Kind declared for the field
        expected: FieldKind,
        /// Kind actually found in the record
        found: FieldKind,
    },

    /// A field declared as main or secondary is absent from a record.
    #[error("Missing field '{field}'")]
    MissingField {
        /// Name of the absent field
        field: String,
    },

    /// A record handed back to the store could not be located.
    #[error("Record not found: {context}")]
    RecordNotFound {
        /// Operation that was looking for the record
        context: String,
    },

    /// A storage adapter operation failed.
    #[error("Adapter error: {message}")]
    Adapter {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The requested operation exists as an extension point only.
    #[error("Not supported: {0}")]
    Unsupported(String),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type alias for OrionSearch operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error comes from a violated field-type contract.
    ///
    /// Schema errors abort `configure`, `add` and searches; the store never
    /// coerces values at runtime.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Error::SchemaMismatch { .. } | Error::MissingField { .. }
        )
    }

    /// Creates a schema mismatch error.
    pub fn schema_mismatch<S: Into<String>>(field: S, expected: FieldKind, found: FieldKind) -> Self {
        Error::SchemaMismatch {
            field: field.into(),
            expected,
            found,
        }
    }

    /// Creates a missing field error.
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        Error::MissingField {
            field: field.into(),
        }
    }

    /// Creates a record-not-found error.
    pub fn record_not_found<S: Into<String>>(context: S) -> Self {
        Error::RecordNotFound {
            context: context.into(),
        }
    }

    /// Creates a new adapter error with a message.
    pub fn adapter<S: Into<String>>(message: S) -> Self {
        Error::Adapter {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new adapter error with a message and source error.
    pub fn adapter_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Adapter {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an unsupported-operation error.
    pub fn unsupported<S: Into<String>>(what: S) -> Self {
        Error::Unsupported(what.into())
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
