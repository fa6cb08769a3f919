//! Logical field kinds.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// The logical kind of a persisted field, independent of how a given
/// database spells the column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SqlType {
    /// Bounded text.
    String,
    /// Unbounded text.
    LongString,
    /// Boolean.
    Boolean,
    /// A single character.
    Char,
    /// A single byte.
    Byte,
    /// Raw bytes.
    ByteArray,
    /// 2-byte integer.
    Short,
    /// 4-byte integer.
    Integer,
    /// 8-byte integer.
    Long,
    /// 4-byte float.
    Float,
    /// 8-byte float.
    Double,
    /// Arbitrary value stored in its serialized form.
    Serializable,
    /// Binary large object.
    Blob,
}

impl SqlType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::String,
        Self::LongString,
        Self::Boolean,
        Self::Char,
        Self::Byte,
        Self::ByteArray,
        Self::Short,
        Self::Integer,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Serializable,
        Self::Blob,
    ];

    /// Returns the upper-snake name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::LongString => "LONG_STRING",
            Self::Boolean => "BOOLEAN",
            Self::Char => "CHAR",
            Self::Byte => "BYTE",
            Self::ByteArray => "BYTE_ARRAY",
            Self::Short => "SHORT",
            Self::Integer => "INTEGER",
            Self::Long => "LONG",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Serializable => "SERIALIZABLE",
            Self::Blob => "BLOB",
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`SqlType`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sql type: {0}")]
pub struct ParseSqlTypeError(pub String);

impl FromStr for SqlType {
    type Err = ParseSqlTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParseSqlTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sql_type() {
        assert_eq!("LONG_STRING".parse::<SqlType>(), Ok(SqlType::LongString));
        assert_eq!("byte-array".parse::<SqlType>(), Ok(SqlType::ByteArray));
        assert_eq!(" boolean ".parse::<SqlType>(), Ok(SqlType::Boolean));
        assert!("varchar".parse::<SqlType>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for t in SqlType::ALL {
            assert_eq!(t.to_string().parse::<SqlType>(), Ok(t));
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SqlType::ByteArray).unwrap();
        assert_eq!(json, "\"BYTE_ARRAY\"");
        let t: SqlType = serde_json::from_str("\"SERIALIZABLE\"").unwrap();
        assert_eq!(t, SqlType::Serializable);
    }
}
