#![allow(dead_code)]

use oxide_dialect::{Dialect, FieldType, SqlType, TableDefinition, TableDdl};

/// Renders a single column definition, panicking on error.
pub fn column(dialect: &dyn Dialect, field: &FieldType) -> String {
    let mut ddl = TableDdl::default();
    dialect
        .column_definition(field, &mut ddl)
        .unwrap_or_else(|e| panic!("Failed to render {field:?}\nError: {e}"))
}

/// Renders the statements for `table`, panicking on error.
pub fn create(dialect: &dyn Dialect, table: &TableDefinition) -> Vec<String> {
    dialect
        .create_table(table)
        .unwrap_or_else(|e| panic!("Failed to render table {}\nError: {e}", table.name))
}

/// A table exercising ids, defaults and constraints.
pub fn accounts_table() -> TableDefinition {
    TableDefinition::new("accounts")
        .field(FieldType::new("id", SqlType::Long).id())
        .field(
            FieldType::new("email", SqlType::String)
                .width(120)
                .not_null()
                .unique(),
        )
        .field(FieldType::new("active", SqlType::Boolean).default_value("true"))
        .field(FieldType::new("grade", SqlType::Char).default_value("B"))
}
