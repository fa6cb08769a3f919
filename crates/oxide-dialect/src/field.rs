//! Field and table descriptors.
//!
//! These are the inputs the dialect renders DDL from and the context the
//! field converters report errors against.

use serde::Deserialize;

use crate::sql_type::SqlType;

/// Description of a single persisted field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldType {
    /// Field name.
    pub name: String,
    /// Column name, when it differs from the field name.
    pub column_name: Option<String>,
    /// Logical kind of the field.
    pub sql_type: SqlType,
    /// Column width, `0` for the dialect default.
    pub width: u32,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Whether the column must be unique.
    pub unique: bool,
    /// Whether this is the id column.
    pub id: bool,
    /// Whether the database generates the id.
    pub generated_id: bool,
    /// Textual default value.
    pub default: Option<String>,
}

impl Default for FieldType {
    fn default() -> Self {
        Self {
            name: String::new(),
            column_name: None,
            sql_type: SqlType::String,
            width: 0,
            nullable: true,
            unique: false,
            id: false,
            generated_id: false,
            default: None,
        }
    }
}

impl FieldType {
    /// Creates a nullable field of the given kind.
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            ..Self::default()
        }
    }

    /// Returns the column name, falling back to the field name.
    #[must_use]
    pub fn column_name(&self) -> &str {
        self.column_name.as_deref().unwrap_or(&self.name)
    }

    /// Sets the column name.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.column_name = Some(name.into());
        self
    }

    /// Sets the width.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Marks the column NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Marks the column UNIQUE.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Marks the field as the id column.
    #[must_use]
    pub fn id(mut self) -> Self {
        self.id = true;
        self.nullable = false;
        self
    }

    /// Marks the field as a database-generated id.
    #[must_use]
    pub fn generated_id(mut self) -> Self {
        self.id = true;
        self.generated_id = true;
        self.nullable = false;
        self
    }

    /// Sets the textual default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// A table to create: its name and ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TableDefinition {
    /// Table name.
    pub name: String,
    /// Fields in column order.
    pub fields: Vec<FieldType>,
}

impl TableDefinition {
    /// Creates an empty table definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: FieldType) -> Self {
        self.fields.push(field);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder() {
        let field = FieldType::new("id", SqlType::Long).generated_id();
        assert!(field.id);
        assert!(field.generated_id);
        assert!(!field.nullable);
        assert_eq!(field.column_name(), "id");

        let field = FieldType::new("displayName", SqlType::String)
            .column("display_name")
            .width(80)
            .unique();
        assert_eq!(field.column_name(), "display_name");
        assert_eq!(field.width, 80);
        assert!(field.nullable);
        assert!(field.unique);
    }

    #[test]
    fn test_table_from_json() {
        let table: TableDefinition = serde_json::from_str(
            r#"{
                "name": "accounts",
                "fields": [
                    {"name": "id", "sql_type": "LONG", "id": true, "generated_id": true, "nullable": false},
                    {"name": "active", "sql_type": "BOOLEAN", "default": "true"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(table.name, "accounts");
        assert_eq!(table.fields.len(), 2);
        assert!(table.fields[0].generated_id);
        assert!(table.fields[1].nullable);
        assert_eq!(table.fields[1].default.as_deref(), Some("true"));
    }
}
