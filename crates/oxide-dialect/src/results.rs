//! Access to the columns of a result row.

use std::io::{Cursor, Read};

use crate::error::{DialectError, Result};
use crate::value::SqlValue;

/// Typed, nullable access to the columns of the current result row.
///
/// Column indexes are zero-based. A getter returns `Ok(None)` for SQL NULL.
pub trait DatabaseResults {
    /// Number of columns in the row.
    fn column_count(&self) -> usize;

    /// Reads a boolean column.
    fn get_bool(&self, column: usize) -> Result<Option<bool>>;

    /// Reads an integer column.
    fn get_int(&self, column: usize) -> Result<Option<i64>>;

    /// Reads a floating point column.
    fn get_float(&self, column: usize) -> Result<Option<f64>>;

    /// Reads a text column.
    fn get_string(&self, column: usize) -> Result<Option<String>>;

    /// Reads a binary column into memory.
    fn get_bytes(&self, column: usize) -> Result<Option<Vec<u8>>>;

    /// Opens a large-object column as a stream.
    ///
    /// `None` is a stored NULL.
    fn get_blob_stream(&self, column: usize) -> Result<Option<Box<dyn Read + '_>>>;
}

/// An in-memory result row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueRow {
    values: Vec<SqlValue>,
}

impl ValueRow {
    /// Creates a row from its column values.
    #[must_use]
    pub const fn new(values: Vec<SqlValue>) -> Self {
        Self { values }
    }

    /// Returns the raw value of a column.
    pub fn value(&self, column: usize) -> Result<&SqlValue> {
        self.values
            .get(column)
            .ok_or(DialectError::ColumnOutOfRange {
                column,
                count: self.values.len(),
            })
    }

    fn mismatch(column: usize, expected: &str, found: &SqlValue) -> DialectError {
        DialectError::DataAccess {
            message: format!(
                "column {column} holds a {} value, cannot read it as {expected}",
                found.kind()
            ),
            source: None,
        }
    }
}

impl From<Vec<SqlValue>> for ValueRow {
    fn from(values: Vec<SqlValue>) -> Self {
        Self::new(values)
    }
}

impl DatabaseResults for ValueRow {
    fn column_count(&self) -> usize {
        self.values.len()
    }

    fn get_bool(&self, column: usize) -> Result<Option<bool>> {
        match self.value(column)? {
            SqlValue::Null => Ok(None),
            SqlValue::Bool(b) => Ok(Some(*b)),
            SqlValue::Int(n) => Ok(Some(*n != 0)),
            other => Err(Self::mismatch(column, "boolean", other)),
        }
    }

    fn get_int(&self, column: usize) -> Result<Option<i64>> {
        match self.value(column)? {
            SqlValue::Null => Ok(None),
            SqlValue::Int(n) => Ok(Some(*n)),
            SqlValue::Bool(b) => Ok(Some(i64::from(*b))),
            other => Err(Self::mismatch(column, "integer", other)),
        }
    }

    fn get_float(&self, column: usize) -> Result<Option<f64>> {
        match self.value(column)? {
            SqlValue::Null => Ok(None),
            SqlValue::Float(f) => Ok(Some(*f)),
            #[allow(clippy::cast_precision_loss)]
            SqlValue::Int(n) => Ok(Some(*n as f64)),
            other => Err(Self::mismatch(column, "float", other)),
        }
    }

    fn get_string(&self, column: usize) -> Result<Option<String>> {
        match self.value(column)? {
            SqlValue::Null => Ok(None),
            SqlValue::Text(s) => Ok(Some(s.clone())),
            other => Err(Self::mismatch(column, "text", other)),
        }
    }

    fn get_bytes(&self, column: usize) -> Result<Option<Vec<u8>>> {
        match self.value(column)? {
            SqlValue::Null => Ok(None),
            SqlValue::Blob(b) => Ok(Some(b.clone())),
            other => Err(Self::mismatch(column, "bytes", other)),
        }
    }

    fn get_blob_stream(&self, column: usize) -> Result<Option<Box<dyn Read + '_>>> {
        match self.value(column)? {
            SqlValue::Null => Ok(None),
            SqlValue::Blob(b) => Ok(Some(Box::new(Cursor::new(b.as_slice())))),
            other => Err(Self::mismatch(column, "blob", other)),
        }
    }
}
