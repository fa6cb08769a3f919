//! Field converters for kinds Derby cannot store natively.

use oxide_dialect::codec;
use oxide_dialect::converter::{invalid_default, type_mismatch};
use oxide_dialect::{
    BooleanNumberConverter, DatabaseResults, DialectError, FieldConverter, FieldType, FieldValue,
    Result, SqlType, SqlValue,
};
use tracing::trace;

/// Shared boolean converter.
pub static BOOLEAN_AS_SMALLINT: BooleanAsSmallint = BooleanAsSmallint;

/// Shared character converter.
pub static CHAR_AS_INTEGER: CharAsInteger = CharAsInteger;

/// Shared serialized-object converter.
pub static OBJECT_AS_BLOB: ObjectAsBlob = ObjectAsBlob;

const NUMERIC_BOOLEAN: BooleanNumberConverter = BooleanNumberConverter::new();

/// Booleans stored in a `SMALLINT` column as `1`/`0`.
///
/// Derby has no boolean column the ORM can use; encoding is the generic
/// numeric strategy.
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanAsSmallint;

impl FieldConverter for BooleanAsSmallint {
    fn sql_type(&self) -> SqlType {
        SqlType::Short
    }

    fn to_sql_arg(&self, field: &FieldType, value: &FieldValue) -> Result<SqlValue> {
        NUMERIC_BOOLEAN.to_sql_arg(field, value)
    }

    fn parse_default(&self, field: &FieldType, default: &str) -> Result<SqlValue> {
        NUMERIC_BOOLEAN.parse_default(field, default)
    }

    fn result_to_value(
        &self,
        field: &FieldType,
        results: &dyn DatabaseResults,
        column: usize,
    ) -> Result<FieldValue> {
        NUMERIC_BOOLEAN.result_to_value(field, results, column)
    }
}

/// Characters stored as their integer code point.
///
/// The Derby driver cannot bind a character to a `CHAR` column.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharAsInteger;

impl FieldConverter for CharAsInteger {
    fn sql_type(&self) -> SqlType {
        SqlType::Integer
    }

    fn to_sql_arg(&self, field: &FieldType, value: &FieldValue) -> Result<SqlValue> {
        match value {
            FieldValue::Null => Ok(SqlValue::Null),
            FieldValue::Char(c) => Ok(SqlValue::Int(i64::from(u32::from(*c)))),
            other => Err(type_mismatch(field, "char", other)),
        }
    }

    fn parse_default(&self, field: &FieldType, default: &str) -> Result<SqlValue> {
        let mut chars = default.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(SqlValue::Int(i64::from(u32::from(c)))),
            _ => Err(invalid_default(
                field,
                default,
                "default must be exactly one character",
            )),
        }
    }

    fn result_to_value(
        &self,
        field: &FieldType,
        results: &dyn DatabaseResults,
        column: usize,
    ) -> Result<FieldValue> {
        let Some(code) = results.get_int(column)? else {
            return Ok(FieldValue::Null);
        };
        u32::try_from(code)
            .ok()
            .and_then(char::from_u32)
            .map(FieldValue::Char)
            .ok_or_else(|| DialectError::DataAccess {
                message: format!(
                    "value {code} of field '{}' is not a valid character",
                    field.name
                ),
                source: None,
            })
    }
}

/// Arbitrary values serialized into a `BLOB` column.
///
/// A `VARBINARY` column would need a fixed size, so the serialized form goes
/// to a large object and is read back through the blob stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectAsBlob;

impl FieldConverter for ObjectAsBlob {
    fn sql_type(&self) -> SqlType {
        SqlType::Blob
    }

    fn to_sql_arg(&self, field: &FieldType, value: &FieldValue) -> Result<SqlValue> {
        if value.is_null() {
            return Ok(SqlValue::Null);
        }
        let bytes = codec::serialize_object(value)?;
        trace!(field = %field.name, bytes = bytes.len(), "Serialized object");
        Ok(SqlValue::Blob(bytes))
    }

    fn parse_default(&self, _field: &FieldType, _default: &str) -> Result<SqlValue> {
        Err(DialectError::Configuration(String::from(
            "default values for serializable types are not supported",
        )))
    }

    fn result_to_value(
        &self,
        _field: &FieldType,
        results: &dyn DatabaseResults,
        column: usize,
    ) -> Result<FieldValue> {
        match results.get_blob_stream(column)? {
            Some(stream) => codec::deserialize_object(stream),
            None => Ok(FieldValue::Null),
        }
    }

    fn is_stream_type(&self) -> bool {
        true
    }
}
