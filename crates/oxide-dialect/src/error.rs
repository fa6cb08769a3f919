//! Error types for dialects and field converters.

use thiserror::Error;

/// Boxed error kept as the cause of a [`DialectError::DataAccess`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Dialect and conversion errors.
#[derive(Debug, Error)]
pub enum DialectError {
    /// A textual default value could not be parsed for the field.
    #[error("invalid default '{value}' for field '{field}': {message}")]
    Format {
        /// Name of the field the default belongs to.
        field: String,
        /// The offending literal.
        value: String,
        /// What was wrong with it.
        message: String,
    },

    /// The requested feature is not supported by the dialect or converter.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Reading or writing a column value failed.
    #[error("data access error: {message}")]
    DataAccess {
        /// Description of the failed operation.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<BoxError>,
    },

    /// The value handed to a converter has the wrong kind.
    #[error("field '{field}' expects a {expected} value, got {found}")]
    TypeMismatch {
        /// Name of the field being converted.
        field: String,
        /// Expected value kind.
        expected: &'static str,
        /// Actual value kind.
        found: &'static str,
    },

    /// A result column index was past the end of the row.
    #[error("column {column} out of range (row has {count} columns)")]
    ColumnOutOfRange {
        /// Requested column, zero-based.
        column: usize,
        /// Number of columns in the row.
        count: usize,
    },

    /// The connection URL could not be split into its segments.
    #[error("invalid database url: {0}")]
    InvalidUrl(String),

    /// No registered dialect recognized the connection URL.
    #[error("no dialect registered for database url: {0}")]
    UnknownUrl(String),

    /// Configuration file could not be parsed.
    #[error("invalid dialect configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error while reading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DialectError {
    /// Builds a [`DialectError::DataAccess`] wrapping `source`.
    pub fn data_access(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::DataAccess {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Result type alias for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
