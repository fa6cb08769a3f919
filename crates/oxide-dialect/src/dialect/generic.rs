//! Generic SQL dialect.

use super::Dialect;

/// A generic SQL dialect with no database-specific overrides.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn driver_name(&self) -> &'static str {
        "generic"
    }

    fn url_portion(&self) -> &'static str {
        "generic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldType;
    use crate::sql_type::SqlType;

    #[test]
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert_eq!(dialect.identifier_quote(), '"');
        assert_eq!(dialect.ping_statement(), "SELECT 1");
        assert!(dialect.supports_limit());
        assert!(!dialect.identifiers_are_case_folded());
        assert!(dialect.matches_url("jdbc:generic:x", "generic"));
        assert!(!dialect.matches_url("jdbc:derby:x", "derby"));
    }

    #[test]
    fn test_generic_column_types() {
        let dialect = GenericDialect::new();
        let ty = |t: SqlType| dialect.column_type(&FieldType::new("f", t));
        assert_eq!(ty(SqlType::String), "VARCHAR(255)");
        assert_eq!(ty(SqlType::LongString), "TEXT");
        assert_eq!(ty(SqlType::Boolean), "BOOLEAN");
        assert_eq!(ty(SqlType::Char), "CHAR");
        assert_eq!(ty(SqlType::Byte), "TINYINT");
        assert_eq!(ty(SqlType::ByteArray), "BLOB");
        assert_eq!(ty(SqlType::Short), "SMALLINT");
        assert_eq!(ty(SqlType::Integer), "INTEGER");
        assert_eq!(ty(SqlType::Long), "BIGINT");
        assert_eq!(ty(SqlType::Float), "FLOAT");
        assert_eq!(ty(SqlType::Double), "DOUBLE PRECISION");
        assert_eq!(ty(SqlType::Serializable), "BLOB");
        assert_eq!(ty(SqlType::Blob), "BLOB");
        assert_eq!(
            dialect.column_type(&FieldType::new("f", SqlType::String).width(40)),
            "VARCHAR(40)"
        );
    }
}
