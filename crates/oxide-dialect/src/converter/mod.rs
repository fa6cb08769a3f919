//! Field converters.
//!
//! A converter bridges one logical field kind to the representation a
//! database stores it as: it encodes application values into statement
//! arguments, parses textual defaults, and decodes result columns.
//! Dialects pick a converter per [`SqlType`] through
//! [`Dialect::field_converter`](crate::Dialect::field_converter).

mod boolean;
mod standard;

pub use boolean::BooleanNumberConverter;
pub use standard::{StandardConverter, standard_converter};

use core::fmt;

use crate::error::{DialectError, Result};
use crate::field::FieldType;
use crate::results::DatabaseResults;
use crate::sql_type::SqlType;
use crate::value::{FieldValue, SqlValue};

/// Encode/decode strategy for one logical field kind.
///
/// Converters are stateless and shared as `'static` instances.
pub trait FieldConverter: fmt::Debug + Send + Sync {
    /// The SQL kind the converted value is bound as.
    fn sql_type(&self) -> SqlType;

    /// Converts an application value into a statement argument.
    fn to_sql_arg(&self, field: &FieldType, value: &FieldValue) -> Result<SqlValue>;

    /// Parses the textual default configured on a field.
    fn parse_default(&self, field: &FieldType, default: &str) -> Result<SqlValue>;

    /// Reads the field's value from a result column.
    fn result_to_value(
        &self,
        field: &FieldType,
        results: &dyn DatabaseResults,
        column: usize,
    ) -> Result<FieldValue>;

    /// Whether the column must be read through the streaming API.
    ///
    /// Stream-typed columns cannot be compared in a WHERE clause without
    /// special handling by the caller.
    fn is_stream_type(&self) -> bool {
        false
    }
}

/// Builds the error for a value of the wrong kind.
pub fn type_mismatch(field: &FieldType, expected: &'static str, found: &FieldValue) -> DialectError {
    DialectError::TypeMismatch {
        field: field.name.clone(),
        expected,
        found: found.kind(),
    }
}

/// Builds the error for an unparsable default literal.
pub fn invalid_default(
    field: &FieldType,
    default: &str,
    message: impl Into<String>,
) -> DialectError {
    DialectError::Format {
        field: field.name.clone(),
        value: default.to_string(),
        message: message.into(),
    }
}
