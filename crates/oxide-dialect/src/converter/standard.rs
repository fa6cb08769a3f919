//! Default conversions used when a dialect does not override a kind.

use super::{FieldConverter, invalid_default, type_mismatch};
use crate::codec;
use crate::error::{DialectError, Result};
use crate::field::FieldType;
use crate::results::DatabaseResults;
use crate::sql_type::SqlType;
use crate::value::{FieldValue, SqlValue};

/// The generic converter for one [`SqlType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardConverter {
    sql_type: SqlType,
}

impl StandardConverter {
    /// Creates the converter for `sql_type`.
    #[must_use]
    pub const fn new(sql_type: SqlType) -> Self {
        Self { sql_type }
    }
}

// Indexed by `SqlType as usize`.
static STANDARD_CONVERTERS: [StandardConverter; 13] = [
    StandardConverter::new(SqlType::String),
    StandardConverter::new(SqlType::LongString),
    StandardConverter::new(SqlType::Boolean),
    StandardConverter::new(SqlType::Char),
    StandardConverter::new(SqlType::Byte),
    StandardConverter::new(SqlType::ByteArray),
    StandardConverter::new(SqlType::Short),
    StandardConverter::new(SqlType::Integer),
    StandardConverter::new(SqlType::Long),
    StandardConverter::new(SqlType::Float),
    StandardConverter::new(SqlType::Double),
    StandardConverter::new(SqlType::Serializable),
    StandardConverter::new(SqlType::Blob),
];

/// Returns the shared generic converter for `sql_type`.
#[must_use]
pub fn standard_converter(sql_type: SqlType) -> &'static StandardConverter {
    &STANDARD_CONVERTERS[sql_type as usize]
}

fn integral(value: &FieldValue) -> Option<i64> {
    match value {
        FieldValue::Byte(n) => Some(i64::from(*n)),
        FieldValue::Short(n) => Some(i64::from(*n)),
        FieldValue::Int(n) => Some(i64::from(*n)),
        FieldValue::Long(n) => Some(*n),
        _ => None,
    }
}

fn out_of_range(field: &FieldType, n: i64) -> DialectError {
    DialectError::DataAccess {
        message: format!(
            "value {n} does not fit field '{}' of type {}",
            field.name, field.sql_type
        ),
        source: None,
    }
}

impl StandardConverter {
    fn parse_integer<T>(field: &FieldType, default: &str) -> Result<SqlValue>
    where
        T: core::str::FromStr + Into<i64>,
    {
        default
            .trim()
            .parse::<T>()
            .map(|n| SqlValue::Int(n.into()))
            .map_err(|_| invalid_default(field, default, "not a valid integer"))
    }
}

impl FieldConverter for StandardConverter {
    fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    fn to_sql_arg(&self, field: &FieldType, value: &FieldValue) -> Result<SqlValue> {
        if value.is_null() {
            return Ok(SqlValue::Null);
        }
        match self.sql_type {
            SqlType::String | SqlType::LongString => match value {
                FieldValue::String(s) => Ok(SqlValue::Text(s.clone())),
                other => Err(type_mismatch(field, "string", other)),
            },
            SqlType::Boolean => match value {
                FieldValue::Bool(b) => Ok(SqlValue::Bool(*b)),
                other => Err(type_mismatch(field, "boolean", other)),
            },
            SqlType::Char => match value {
                FieldValue::Char(c) => Ok(SqlValue::Text(c.to_string())),
                other => Err(type_mismatch(field, "char", other)),
            },
            SqlType::Byte | SqlType::Short | SqlType::Integer | SqlType::Long => integral(value)
                .map(SqlValue::Int)
                .ok_or_else(|| type_mismatch(field, "integer", value)),
            SqlType::Float | SqlType::Double => match value {
                FieldValue::Float(f) => Ok(SqlValue::Float(f64::from(*f))),
                FieldValue::Double(f) => Ok(SqlValue::Float(*f)),
                other => Err(type_mismatch(field, "floating point", other)),
            },
            SqlType::ByteArray | SqlType::Blob => match value {
                FieldValue::Bytes(b) => Ok(SqlValue::Blob(b.clone())),
                other => Err(type_mismatch(field, "bytes", other)),
            },
            SqlType::Serializable => codec::serialize_object(value).map(SqlValue::Blob),
        }
    }

    fn parse_default(&self, field: &FieldType, default: &str) -> Result<SqlValue> {
        match self.sql_type {
            SqlType::String | SqlType::LongString => Ok(SqlValue::Text(default.to_string())),
            SqlType::Boolean => match default.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(SqlValue::Bool(true)),
                "false" => Ok(SqlValue::Bool(false)),
                _ => Err(invalid_default(field, default, "not a boolean")),
            },
            SqlType::Char => {
                let mut chars = default.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(SqlValue::Text(c.to_string())),
                    _ => Err(invalid_default(field, default, "must be exactly one character")),
                }
            }
            SqlType::Byte => Self::parse_integer::<i8>(field, default),
            SqlType::Short => Self::parse_integer::<i16>(field, default),
            SqlType::Integer => Self::parse_integer::<i32>(field, default),
            SqlType::Long => Self::parse_integer::<i64>(field, default),
            SqlType::Float | SqlType::Double => match default.trim().parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(SqlValue::Float(f)),
                Ok(_) => Err(invalid_default(field, default, "must be a finite number")),
                Err(_) => Err(invalid_default(field, default, "not a valid number")),
            },
            SqlType::ByteArray | SqlType::Blob => Ok(SqlValue::Blob(default.as_bytes().to_vec())),
            SqlType::Serializable => Err(DialectError::Configuration(String::from(
                "default values for serializable types are not supported",
            ))),
        }
    }

    fn result_to_value(
        &self,
        field: &FieldType,
        results: &dyn DatabaseResults,
        column: usize,
    ) -> Result<FieldValue> {
        let value = match self.sql_type {
            SqlType::String | SqlType::LongString => {
                results.get_string(column)?.map(FieldValue::String)
            }
            SqlType::Boolean => results.get_bool(column)?.map(FieldValue::Bool),
            SqlType::Char => match results.get_string(column)? {
                Some(s) => {
                    let mut chars = s.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Some(FieldValue::Char(c)),
                        _ => {
                            return Err(DialectError::DataAccess {
                                message: format!(
                                    "column {column} holds '{s}', expected a single character"
                                ),
                                source: None,
                            });
                        }
                    }
                }
                None => None,
            },
            SqlType::Byte => match results.get_int(column)? {
                Some(n) => Some(FieldValue::Byte(
                    i8::try_from(n).map_err(|_| out_of_range(field, n))?,
                )),
                None => None,
            },
            SqlType::Short => match results.get_int(column)? {
                Some(n) => Some(FieldValue::Short(
                    i16::try_from(n).map_err(|_| out_of_range(field, n))?,
                )),
                None => None,
            },
            SqlType::Integer => match results.get_int(column)? {
                Some(n) => Some(FieldValue::Int(
                    i32::try_from(n).map_err(|_| out_of_range(field, n))?,
                )),
                None => None,
            },
            SqlType::Long => results.get_int(column)?.map(FieldValue::Long),
            #[allow(clippy::cast_possible_truncation)]
            SqlType::Float => results
                .get_float(column)?
                .map(|f| FieldValue::Float(f as f32)),
            SqlType::Double => results.get_float(column)?.map(FieldValue::Double),
            SqlType::ByteArray | SqlType::Blob => results.get_bytes(column)?.map(FieldValue::Bytes),
            SqlType::Serializable => match results.get_bytes(column)? {
                Some(bytes) => Some(codec::deserialize_object(bytes.as_slice())?),
                None => None,
            },
        };
        Ok(value.unwrap_or(FieldValue::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ValueRow;

    #[test]
    fn test_lookup_matches_kind() {
        for t in SqlType::ALL {
            assert_eq!(standard_converter(t).sql_type(), t);
            assert!(!standard_converter(t).is_stream_type());
        }
    }

    #[test]
    fn test_integer_conversions() {
        let field = FieldType::new("count", SqlType::Short);
        let conv = standard_converter(SqlType::Short);
        assert_eq!(
            conv.to_sql_arg(&field, &FieldValue::Short(12)).unwrap(),
            SqlValue::Int(12)
        );
        assert_eq!(conv.parse_default(&field, "-3").unwrap(), SqlValue::Int(-3));
        assert!(matches!(
            conv.parse_default(&field, "70000"),
            Err(DialectError::Format { .. })
        ));

        let row = ValueRow::new(vec![SqlValue::Int(40_000)]);
        assert!(conv.result_to_value(&field, &row, 0).is_err());
    }

    #[test]
    fn test_float_defaults() {
        let field = FieldType::new("ratio", SqlType::Double);
        let conv = standard_converter(SqlType::Double);
        assert_eq!(
            conv.parse_default(&field, " 0.5 ").unwrap(),
            SqlValue::Float(0.5)
        );
        for bad in ["NaN", "inf", "-infinity", "half"] {
            assert!(matches!(
                conv.parse_default(&field, bad),
                Err(DialectError::Format { .. })
            ));
        }
    }

    #[test]
    fn test_char_conversions() {
        let field = FieldType::new("grade", SqlType::Char);
        let conv = standard_converter(SqlType::Char);
        assert_eq!(
            conv.to_sql_arg(&field, &FieldValue::Char('A')).unwrap(),
            SqlValue::Text(String::from("A"))
        );
        assert!(conv.parse_default(&field, "AB").is_err());
        let row = ValueRow::new(vec![SqlValue::Text(String::from("B"))]);
        assert_eq!(
            conv.result_to_value(&field, &row, 0).unwrap(),
            FieldValue::Char('B')
        );
    }

    #[test]
    fn test_serializable_conversions() {
        let field = FieldType::new("payload", SqlType::Serializable);
        let conv = standard_converter(SqlType::Serializable);
        let value = FieldValue::Object(serde_json::json!({"k": [1, 2]}));
        let arg = conv.to_sql_arg(&field, &value).unwrap();
        let row = ValueRow::new(vec![arg]);
        assert_eq!(conv.result_to_value(&field, &row, 0).unwrap(), value);
        assert!(matches!(
            conv.parse_default(&field, "x"),
            Err(DialectError::Configuration(_))
        ));
    }

    #[test]
    fn test_null_passes_through() {
        for t in SqlType::ALL {
            let field = FieldType::new("f", t);
            let conv = standard_converter(t);
            assert_eq!(
                conv.to_sql_arg(&field, &FieldValue::Null).unwrap(),
                SqlValue::Null
            );
            let row = ValueRow::new(vec![SqlValue::Null]);
            assert_eq!(
                conv.result_to_value(&field, &row, 0).unwrap(),
                FieldValue::Null
            );
        }
    }
}
