//! Derby embedded dialect implementation.

use oxide_dialect::{
    DEFAULT_VARCHAR_WIDTH, Dialect, DialectConfig, EntityNameCase, FieldConverter, FieldType,
    Result, SqlType, TableDdl, standard_converter,
};

use crate::converters::{BOOLEAN_AS_SMALLINT, CHAR_AS_INTEGER, OBJECT_AS_BLOB};

/// Driver segment of Derby connection URLs.
pub const DATABASE_URL_PORTION: &str = "derby";

const DRIVER_CLASS_NAME: &str = "org.apache.derby.jdbc.EmbeddedDriver";
const DATABASE_NAME: &str = "Derby";

/// Returns the segment after `scheme:derby:`, if there is one.
///
/// Trailing empty segments are not counted, so `jdbc:derby:` has no
/// subname while `jdbc:derby::memory` has an empty one.
pub(crate) fn subname(url: &str) -> Option<&str> {
    url.trim_end_matches(':').split(':').nth(2)
}

/// Derby dialect for embedded databases (`jdbc:derby:sample`).
///
/// URLs of the form `jdbc:derby://host/db` belong to
/// [`DerbyClientServerDialect`](crate::DerbyClientServerDialect).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerbyEmbeddedDialect {
    entity_name_case: EntityNameCase,
    default_varchar_width: u32,
}

impl DerbyEmbeddedDialect {
    /// Creates a new Derby dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entity_name_case: EntityNameCase::Upper,
            default_varchar_width: DEFAULT_VARCHAR_WIDTH,
        }
    }

    /// Applies the settings present in `config`.
    #[must_use]
    pub const fn with_config(mut self, config: &DialectConfig) -> Self {
        if let Some(case) = config.entity_name_case {
            self.entity_name_case = case;
        }
        if let Some(width) = config.default_varchar_width {
            self.default_varchar_width = width;
        }
        self
    }
}

impl Default for DerbyEmbeddedDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for DerbyEmbeddedDialect {
    fn name(&self) -> &'static str {
        DATABASE_NAME
    }

    fn driver_name(&self) -> &'static str {
        DRIVER_CLASS_NAME
    }

    fn url_portion(&self) -> &'static str {
        DATABASE_URL_PORTION
    }

    fn matches_url(&self, url: &str, db_type_part: &str) -> bool {
        if db_type_part != DATABASE_URL_PORTION {
            return false;
        }
        // jdbc:derby:sample;create=true
        subname(url).is_some_and(|s| !s.starts_with("//"))
    }

    fn default_varchar_width(&self) -> u32 {
        self.default_varchar_width
    }

    fn long_string_type(&self, _width: u32) -> String {
        String::from("LONG VARCHAR")
    }

    fn boolean_type(&self, _width: u32) -> String {
        // neither CHAR FOR BIT DATA nor CHAR(1) work with the driver
        String::from("SMALLINT")
    }

    fn char_type(&self, _width: u32) -> String {
        String::from("SMALLINT")
    }

    fn byte_type(&self, _width: u32) -> String {
        String::from("SMALLINT")
    }

    fn byte_array_type(&self, _width: u32) -> String {
        // width is not part of the LONG VARCHAR FOR BIT DATA type
        String::from("LONG VARCHAR FOR BIT DATA")
    }

    fn supports_limit(&self) -> bool {
        false
    }

    fn offset_clause(&self, offset: u64) -> String {
        format!("OFFSET {offset} ROWS ")
    }

    fn generated_id_clause(&self, field: &FieldType, ddl: &mut TableDdl) -> Result<String> {
        let mut sql = String::from("GENERATED BY DEFAULT AS IDENTITY ");
        sql.push_str(&self.configure_id(field, ddl));
        Ok(sql)
    }

    fn quote_identifier(&self, name: &str) -> String {
        format!("\"{name}\"")
    }

    fn ping_statement(&self) -> &'static str {
        "SELECT 1 FROM SYSIBM.SYSDUMMY1"
    }

    fn entity_name_case(&self) -> EntityNameCase {
        self.entity_name_case
    }

    fn field_converter(&self, sql_type: SqlType) -> &'static dyn FieldConverter {
        match sql_type {
            SqlType::Boolean => &BOOLEAN_AS_SMALLINT,
            SqlType::Char => &CHAR_AS_INTEGER,
            SqlType::Serializable => &OBJECT_AS_BLOB,
            other => standard_converter(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derby_dialect() {
        let dialect = DerbyEmbeddedDialect::new();
        assert_eq!(dialect.name(), "Derby");
        assert_eq!(dialect.driver_name(), "org.apache.derby.jdbc.EmbeddedDriver");
        assert_eq!(dialect.ping_statement(), "SELECT 1 FROM SYSIBM.SYSDUMMY1");
        assert!(!dialect.supports_limit());
        assert!(dialect.supports_offset());
        assert!(dialect.identifiers_are_case_folded());
    }

    #[test]
    fn test_subname() {
        assert_eq!(subname("jdbc:derby:sample"), Some("sample"));
        assert_eq!(subname("jdbc:derby://localhost:1527/db"), Some("//localhost"));
        assert_eq!(subname("jdbc:derby::memory"), Some(""));
        assert_eq!(subname("jdbc:derby:sample:"), Some("sample"));
        assert_eq!(subname("jdbc:derby:"), None);
        assert_eq!(subname("jdbc:derby:::"), None);
        assert_eq!(subname("jdbc:derby"), None);
    }

    #[test]
    fn test_with_config() {
        let config = DialectConfig {
            entity_name_case: Some(EntityNameCase::Lower),
            default_varchar_width: Some(100),
        };
        let dialect = DerbyEmbeddedDialect::new().with_config(&config);
        assert_eq!(dialect.entity_name_case(), EntityNameCase::Lower);
        assert_eq!(
            dialect.column_type(&FieldType::new("f", SqlType::String)),
            "VARCHAR(100)"
        );

        let unchanged = DerbyEmbeddedDialect::new().with_config(&DialectConfig::default());
        assert_eq!(unchanged, DerbyEmbeddedDialect::new());
    }
}
