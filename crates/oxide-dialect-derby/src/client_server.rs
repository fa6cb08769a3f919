//! Derby network client dialect.

use oxide_dialect::{
    Dialect, DialectConfig, EntityNameCase, FieldConverter, FieldType, Result, SqlType, TableDdl,
};

use crate::dialect::{DATABASE_URL_PORTION, DerbyEmbeddedDialect, subname};

const DRIVER_CLASS_NAME: &str = "org.apache.derby.jdbc.ClientDriver";
const DATABASE_NAME: &str = "Derby Client/Server";

/// Derby dialect for databases reached through the network server
/// (`jdbc:derby://localhost:1527/db`).
///
/// SQL generation and conversions are those of the embedded engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerbyClientServerDialect {
    inner: DerbyEmbeddedDialect,
}

impl DerbyClientServerDialect {
    /// Creates a new Derby client/server dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: DerbyEmbeddedDialect::new(),
        }
    }

    /// Applies the settings present in `config`.
    #[must_use]
    pub const fn with_config(self, config: &DialectConfig) -> Self {
        Self {
            inner: self.inner.with_config(config),
        }
    }
}

impl Dialect for DerbyClientServerDialect {
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
        // jdbc:derby://localhost:1527/sample
        subname(url).is_some_and(|s| s.starts_with("//"))
    }

    fn default_varchar_width(&self) -> u32 {
        self.inner.default_varchar_width()
    }

    fn long_string_type(&self, width: u32) -> String {
        self.inner.long_string_type(width)
    }

    fn boolean_type(&self, width: u32) -> String {
        self.inner.boolean_type(width)
    }

    fn char_type(&self, width: u32) -> String {
        self.inner.char_type(width)
    }

    fn byte_type(&self, width: u32) -> String {
        self.inner.byte_type(width)
    }

    fn byte_array_type(&self, width: u32) -> String {
        self.inner.byte_array_type(width)
    }

    fn supports_limit(&self) -> bool {
        self.inner.supports_limit()
    }

    fn offset_clause(&self, offset: u64) -> String {
        self.inner.offset_clause(offset)
    }

    fn generated_id_clause(&self, field: &FieldType, ddl: &mut TableDdl) -> Result<String> {
        self.inner.generated_id_clause(field, ddl)
    }

    fn quote_identifier(&self, name: &str) -> String {
        self.inner.quote_identifier(name)
    }

    fn ping_statement(&self) -> &'static str {
        self.inner.ping_statement()
    }

    fn entity_name_case(&self) -> EntityNameCase {
        self.inner.entity_name_case()
    }

    fn field_converter(&self, sql_type: SqlType) -> &'static dyn FieldConverter {
        self.inner.field_converter(sql_type)
    }
}
