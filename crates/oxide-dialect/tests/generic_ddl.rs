//! DDL and pagination rendered through the provided `Dialect` methods.

mod common;
use common::*;

use oxide_dialect::{
    Dialect, DialectError, DialectRegistry, EntityNameCase, FieldType, GenericDialect, SqlType,
    TableDdl, TableDefinition,
};

#[test]
fn test_create_table_generic() {
    let statements = create(&GenericDialect::new(), &accounts_table());
    assert_eq!(
        statements,
        vec![
            "CREATE TABLE \"accounts\" (\
             \"id\" BIGINT NOT NULL, \
             \"email\" VARCHAR(120) NOT NULL UNIQUE, \
             \"active\" BOOLEAN DEFAULT TRUE, \
             \"grade\" CHAR DEFAULT 'B', \
             PRIMARY KEY (\"id\"))"
                .to_string()
        ]
    );
}

#[test]
fn test_column_name_overrides_field_name() {
    let field = FieldType::new("createdBy", SqlType::Integer).column("created_by");
    assert_eq!(column(&GenericDialect::new(), &field), "\"created_by\" INTEGER");
}

#[test]
fn test_generated_id_unsupported_by_default() {
    let table = TableDefinition::new("t").field(FieldType::new("id", SqlType::Long).generated_id());
    let err = GenericDialect::new().create_table(&table).unwrap_err();
    assert!(matches!(err, DialectError::Configuration(_)));
    assert!(err.to_string().contains("generated ids are not supported"));
}

#[test]
fn test_bad_default_is_reported_with_field() {
    let field = FieldType::new("age", SqlType::Integer).default_value("old");
    let mut ddl = TableDdl::default();
    match GenericDialect::new().column_definition(&field, &mut ddl) {
        Err(DialectError::Format { field, value, .. }) => {
            assert_eq!(field, "age");
            assert_eq!(value, "old");
        }
        other => panic!("Expected format error, got {other:?}"),
    }
}

#[test]
fn test_empty_table_is_rejected() {
    let err = GenericDialect::new()
        .create_table(&TableDefinition::new("empty"))
        .unwrap_err();
    assert!(matches!(err, DialectError::Configuration(_)));
}

#[test]
fn test_pagination_generic() {
    let dialect = GenericDialect::new();
    let mut sql = String::from("SELECT * FROM \"accounts\" ");
    let cap = dialect.append_pagination(&mut sql, Some(10), Some(20)).unwrap();
    assert_eq!(sql, "SELECT * FROM \"accounts\" LIMIT 10 OFFSET 20 ");
    assert_eq!(cap, None);
}

/// A dialect overriding a handful of hooks.
#[derive(Debug)]
struct ShoutingDialect;

impl Dialect for ShoutingDialect {
    fn name(&self) -> &'static str {
        "Shouting"
    }

    fn driver_name(&self) -> &'static str {
        "shout.Driver"
    }

    fn url_portion(&self) -> &'static str {
        "shout"
    }

    fn boolean_type(&self, _width: u32) -> String {
        String::from("BIT")
    }

    fn supports_offset(&self) -> bool {
        false
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn entity_name_case(&self) -> EntityNameCase {
        EntityNameCase::Upper
    }
}

#[test]
fn test_overrides_replace_only_their_hook() {
    let dialect = ShoutingDialect;
    assert_eq!(
        column(&dialect, &FieldType::new("on", SqlType::Boolean)),
        "`on` BIT"
    );
    assert_eq!(
        column(&dialect, &FieldType::new("n", SqlType::Long)),
        "`n` BIGINT"
    );
    assert!(dialect.identifiers_are_case_folded());
    assert!(dialect.identifiers_match("accounts", "ACCOUNTS"));
    assert_eq!(dialect.fold_identifier("MixedCase"), "MIXEDCASE");
}

#[test]
fn test_offset_without_support_is_an_error() {
    let mut sql = String::from("SELECT 1 ");
    let err = ShoutingDialect
        .append_pagination(&mut sql, None, Some(3))
        .unwrap_err();
    assert!(matches!(err, DialectError::Configuration(_)));
}

#[test]
fn test_registry_uses_first_match() {
    let mut registry = DialectRegistry::new();
    registry.register(ShoutingDialect).register(GenericDialect::new());
    assert_eq!(registry.resolve("jdbc:shout:mem").unwrap().name(), "Shouting");
    assert_eq!(registry.resolve("jdbc:generic").unwrap().name(), "generic");
    assert_eq!(registry.iter().count(), 2);
}
