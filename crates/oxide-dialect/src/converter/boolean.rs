//! Boolean stored as a number.

use super::{FieldConverter, invalid_default, type_mismatch};
use crate::error::Result;
use crate::field::FieldType;
use crate::results::DatabaseResults;
use crate::sql_type::SqlType;
use crate::value::{FieldValue, SqlValue};

/// Stores booleans as `1`/`0` for databases without a usable boolean column.
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanNumberConverter;

impl BooleanNumberConverter {
    /// Creates a new converter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FieldConverter for BooleanNumberConverter {
    fn sql_type(&self) -> SqlType {
        SqlType::Boolean
    }

    fn to_sql_arg(&self, field: &FieldType, value: &FieldValue) -> Result<SqlValue> {
        match value {
            FieldValue::Null => Ok(SqlValue::Null),
            FieldValue::Bool(b) => Ok(SqlValue::Int(i64::from(*b))),
            other => Err(type_mismatch(field, "boolean", other)),
        }
    }

    fn parse_default(&self, field: &FieldType, default: &str) -> Result<SqlValue> {
        let lower = default.trim().to_ascii_lowercase();
        match lower.as_str() {
            "true" | "1" => Ok(SqlValue::Int(1)),
            "false" | "0" => Ok(SqlValue::Int(0)),
            _ => Err(invalid_default(field, default, "not a boolean")),
        }
    }

    fn result_to_value(
        &self,
        _field: &FieldType,
        results: &dyn DatabaseResults,
        column: usize,
    ) -> Result<FieldValue> {
        Ok(results
            .get_int(column)?
            .map_or(FieldValue::Null, |n| FieldValue::Bool(n != 0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DialectError;
    use crate::results::ValueRow;

    fn field() -> FieldType {
        FieldType::new("active", SqlType::Boolean)
    }

    #[test]
    fn test_encode() {
        let conv = BooleanNumberConverter::new();
        assert_eq!(
            conv.to_sql_arg(&field(), &FieldValue::Bool(true)).unwrap(),
            SqlValue::Int(1)
        );
        assert_eq!(
            conv.to_sql_arg(&field(), &FieldValue::Bool(false)).unwrap(),
            SqlValue::Int(0)
        );
        assert_eq!(
            conv.to_sql_arg(&field(), &FieldValue::Null).unwrap(),
            SqlValue::Null
        );
        assert!(matches!(
            conv.to_sql_arg(&field(), &FieldValue::Int(1)),
            Err(DialectError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_parse_default() {
        let conv = BooleanNumberConverter::new();
        assert_eq!(conv.parse_default(&field(), "TRUE").unwrap(), SqlValue::Int(1));
        assert_eq!(conv.parse_default(&field(), "0").unwrap(), SqlValue::Int(0));
        assert!(matches!(
            conv.parse_default(&field(), "maybe"),
            Err(DialectError::Format { .. })
        ));
    }

    #[test]
    fn test_decode() {
        let conv = BooleanNumberConverter::new();
        let row = ValueRow::new(vec![SqlValue::Int(1), SqlValue::Int(0), SqlValue::Null]);
        assert_eq!(
            conv.result_to_value(&field(), &row, 0).unwrap(),
            FieldValue::Bool(true)
        );
        assert_eq!(
            conv.result_to_value(&field(), &row, 1).unwrap(),
            FieldValue::Bool(false)
        );
        assert_eq!(
            conv.result_to_value(&field(), &row, 2).unwrap(),
            FieldValue::Null
        );
    }
}
