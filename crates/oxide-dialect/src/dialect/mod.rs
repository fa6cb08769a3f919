//! SQL Dialect support.
//!
//! Different databases spell column types, pagination and generated keys
//! differently. The [`Dialect`] trait carries the generic behaviour in its
//! provided methods; a concrete database overrides only the hooks where it
//! deviates.

mod generic;

pub use generic::GenericDialect;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::converter::{FieldConverter, standard_converter};
use crate::error::{DialectError, Result};
use crate::field::{FieldType, TableDefinition};
use crate::sql_type::SqlType;

/// Width used for `VARCHAR` columns that do not set one.
pub const DEFAULT_VARCHAR_WIDTH: u32 = 255;

/// How a database folds unquoted identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityNameCase {
    /// Identifiers are folded to upper case.
    Upper,
    /// Identifiers are folded to lower case.
    Lower,
    /// Identifiers are compared as written.
    #[default]
    Preserve,
}

impl EntityNameCase {
    /// Applies the folding to `name`.
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Upper => name.to_uppercase(),
            Self::Lower => name.to_lowercase(),
            Self::Preserve => name.to_string(),
        }
    }
}

/// Pieces of a CREATE TABLE collected while rendering its columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDdl {
    /// Statements to run before the CREATE TABLE.
    pub statements_before: Vec<String>,
    /// Primary key columns, unquoted.
    pub primary_keys: Vec<String>,
    /// Table-level clauses appended after the columns.
    pub additional_args: Vec<String>,
    /// Statements to run after the CREATE TABLE.
    pub queries_after: Vec<String>,
}

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: core::fmt::Debug + Send + Sync {
    /// Returns the display name of the database.
    fn name(&self) -> &'static str;

    /// Returns the identifier of the driver this dialect talks to.
    fn driver_name(&self) -> &'static str;

    /// Returns the driver segment of connection URLs for this database
    /// (`derby` in `jdbc:derby:db`).
    fn url_portion(&self) -> &'static str;

    /// Returns whether `url` is handled by this dialect.
    ///
    /// `db_type_part` is the second colon-delimited segment of `url`.
    fn matches_url(&self, _url: &str, db_type_part: &str) -> bool {
        db_type_part == self.url_portion()
    }

    /// Width used for `VARCHAR` columns that do not set one.
    fn default_varchar_width(&self) -> u32 {
        DEFAULT_VARCHAR_WIDTH
    }

    /// Renders the column type of a field.
    fn column_type(&self, field: &FieldType) -> String {
        let width = field.width;
        match field.sql_type {
            SqlType::String => self.string_type(width),
            SqlType::LongString => self.long_string_type(width),
            SqlType::Boolean => self.boolean_type(width),
            SqlType::Char => self.char_type(width),
            SqlType::Byte => self.byte_type(width),
            SqlType::ByteArray => self.byte_array_type(width),
            SqlType::Short => self.short_type(width),
            SqlType::Integer => self.integer_type(width),
            SqlType::Long => self.long_type(width),
            SqlType::Float => self.float_type(width),
            SqlType::Double => self.double_type(width),
            SqlType::Serializable => self.serializable_type(width),
            SqlType::Blob => self.blob_type(width),
        }
    }

    /// Bounded text column.
    fn string_type(&self, width: u32) -> String {
        let width = if width == 0 {
            self.default_varchar_width()
        } else {
            width
        };
        format!("VARCHAR({width})")
    }

    /// Unbounded text column.
    fn long_string_type(&self, _width: u32) -> String {
        String::from("TEXT")
    }

    /// Boolean column.
    fn boolean_type(&self, _width: u32) -> String {
        String::from("BOOLEAN")
    }

    /// Single character column.
    fn char_type(&self, _width: u32) -> String {
        String::from("CHAR")
    }

    /// Single byte column.
    fn byte_type(&self, _width: u32) -> String {
        String::from("TINYINT")
    }

    /// Raw bytes column.
    fn byte_array_type(&self, _width: u32) -> String {
        String::from("BLOB")
    }

    /// 2-byte integer column.
    fn short_type(&self, _width: u32) -> String {
        String::from("SMALLINT")
    }

    /// 4-byte integer column.
    fn integer_type(&self, _width: u32) -> String {
        String::from("INTEGER")
    }

    /// 8-byte integer column.
    fn long_type(&self, _width: u32) -> String {
        String::from("BIGINT")
    }

    /// 4-byte float column.
    fn float_type(&self, _width: u32) -> String {
        String::from("FLOAT")
    }

    /// 8-byte float column.
    fn double_type(&self, _width: u32) -> String {
        String::from("DOUBLE PRECISION")
    }

    /// Serialized object column.
    fn serializable_type(&self, _width: u32) -> String {
        String::from("BLOB")
    }

    /// Binary large object column.
    fn blob_type(&self, _width: u32) -> String {
        String::from("BLOB")
    }

    /// Returns whether a row cap can be expressed in SQL.
    ///
    /// When `false`, callers must cap the rows on the driver side.
    fn supports_limit(&self) -> bool {
        true
    }

    /// Renders the row cap clause.
    fn limit_clause(&self, limit: u64) -> String {
        format!("LIMIT {limit} ")
    }

    /// Returns whether an offset can be expressed in SQL.
    fn supports_offset(&self) -> bool {
        true
    }

    /// Renders the row offset clause.
    fn offset_clause(&self, offset: u64) -> String {
        format!("OFFSET {offset} ")
    }

    /// Appends the pagination clauses this dialect supports to `sql`,
    /// which should end with a space.
    ///
    /// Returns the row cap the caller has to apply itself when the dialect
    /// cannot express `limit` in SQL.
    fn append_pagination(
        &self,
        sql: &mut String,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Option<u64>> {
        let mut row_cap = None;
        if let Some(limit) = limit {
            if self.supports_limit() {
                sql.push_str(&self.limit_clause(limit));
            } else {
                row_cap = Some(limit);
            }
        }
        if let Some(offset) = offset {
            if !self.supports_offset() {
                return Err(DialectError::Configuration(format!(
                    "offset is not supported by {}",
                    self.name()
                )));
            }
            sql.push_str(&self.offset_clause(offset));
        }
        Ok(row_cap)
    }

    /// Renders the clause making the database generate the field's id.
    fn generated_id_clause(&self, field: &FieldType, _ddl: &mut TableDdl) -> Result<String> {
        Err(DialectError::Configuration(format!(
            "generated ids are not supported by {} for field '{}'",
            self.name(),
            field.name
        )))
    }

    /// Registers the field as the table's id.
    ///
    /// The key itself is emitted as a table-level `PRIMARY KEY` clause, so
    /// nothing is rendered inline.
    fn configure_id(&self, field: &FieldType, ddl: &mut TableDdl) -> String {
        ddl.primary_keys.push(field.column_name().to_string());
        String::new()
    }

    /// Returns the identifier quote character.
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Quotes an identifier. Embedded quote characters are not escaped.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        format!("{quote}{name}{quote}")
    }

    /// Statement used to check that a connection is alive.
    fn ping_statement(&self) -> &'static str {
        "SELECT 1"
    }

    /// How the database folds unquoted identifiers.
    fn entity_name_case(&self) -> EntityNameCase {
        EntityNameCase::Preserve
    }

    /// Returns whether identifiers must be folded before comparing them
    /// with catalog metadata.
    fn identifiers_are_case_folded(&self) -> bool {
        self.entity_name_case() != EntityNameCase::Preserve
    }

    /// Folds an identifier the way the database does.
    fn fold_identifier(&self, name: &str) -> String {
        self.entity_name_case().apply(name)
    }

    /// Compares two identifiers after folding.
    fn identifiers_match(&self, a: &str, b: &str) -> bool {
        self.fold_identifier(a) == self.fold_identifier(b)
    }

    /// Returns the converter for fields of the given kind.
    fn field_converter(&self, sql_type: SqlType) -> &'static dyn FieldConverter {
        standard_converter(sql_type)
    }

    /// Renders a column definition for CREATE TABLE.
    fn column_definition(&self, field: &FieldType, ddl: &mut TableDdl) -> Result<String> {
        let mut sql = format!(
            "{} {} ",
            self.quote_identifier(field.column_name()),
            self.column_type(field)
        );

        if field.generated_id {
            sql.push_str(&self.generated_id_clause(field, ddl)?);
        } else if field.id {
            sql.push_str(&self.configure_id(field, ddl));
        }

        // Generated ids take no default and are implicitly NOT NULL.
        if !field.generated_id {
            if let Some(ref default) = field.default {
                let value = self
                    .field_converter(field.sql_type)
                    .parse_default(field, default)?;
                sql.push_str("DEFAULT ");
                sql.push_str(&value.to_sql_inline());
                sql.push(' ');
            }
            if !field.nullable {
                sql.push_str("NOT NULL ");
            }
            if field.unique {
                sql.push_str("UNIQUE ");
            }
        }

        sql.truncate(sql.trim_end().len());
        Ok(sql)
    }

    /// Generates the statements creating `table`, in execution order.
    fn create_table(&self, table: &TableDefinition) -> Result<Vec<String>> {
        if table.fields.is_empty() {
            return Err(DialectError::Configuration(format!(
                "table '{}' has no fields",
                table.name
            )));
        }

        let mut ddl = TableDdl::default();
        let mut parts = Vec::with_capacity(table.fields.len() + 1);
        for field in &table.fields {
            parts.push(self.column_definition(field, &mut ddl)?);
        }

        if !ddl.primary_keys.is_empty() {
            let keys: Vec<String> = ddl
                .primary_keys
                .iter()
                .map(|k| self.quote_identifier(k))
                .collect();
            ddl.additional_args
                .push(format!("PRIMARY KEY ({})", keys.join(", ")));
        }
        parts.append(&mut ddl.additional_args);

        let sql = format!(
            "CREATE TABLE {} ({})",
            self.quote_identifier(&table.name),
            parts.join(", ")
        );
        debug!(dialect = self.name(), table = %table.name, sql = %sql, "Rendered CREATE TABLE");

        let mut statements = ddl.statements_before;
        statements.push(sql);
        statements.append(&mut ddl.queries_after);
        Ok(statements)
    }
}
