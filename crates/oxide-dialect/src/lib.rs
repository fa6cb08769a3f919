//! # oxide-dialect
//!
//! The contract a database dialect implements for the ORM: how column
//! types are spelled, how results are paginated, how identifiers are quoted
//! and folded, how generated keys are declared, and how field values are
//! converted to and from what the database stores.
//!
//! This crate provides:
//! - [`Dialect`], whose provided methods are the generic SQL behaviour;
//!   concrete databases override only where they deviate
//! - [`FieldConverter`] with the generic [`StandardConverter`]s and the
//!   numeric [`BooleanNumberConverter`]
//! - [`DialectRegistry`] to pick a dialect from a `scheme:driver:...`
//!   connection URL
//! - [`DialectConfig`] for per-dialect settings
//!
//! ## Example
//!
//! ```rust
//! use oxide_dialect::{Dialect, FieldType, GenericDialect, SqlType, TableDefinition};
//!
//! let dialect = GenericDialect::new();
//! let table = TableDefinition::new("users")
//!     .field(FieldType::new("id", SqlType::Long).id())
//!     .field(FieldType::new("name", SqlType::String).width(100).not_null());
//!
//! let statements = dialect.create_table(&table).unwrap();
//! assert_eq!(
//!     statements,
//!     vec![
//!         "CREATE TABLE \"users\" (\"id\" BIGINT NOT NULL, \"name\" VARCHAR(100) NOT NULL, PRIMARY KEY (\"id\"))"
//!             .to_string()
//!     ]
//! );
//! ```

pub mod codec;
mod config;
pub mod converter;
pub mod dialect;
mod error;
mod field;
mod registry;
mod results;
mod sql_type;
mod value;

pub use config::DialectConfig;
pub use converter::{
    BooleanNumberConverter, FieldConverter, StandardConverter, standard_converter,
};
pub use dialect::{DEFAULT_VARCHAR_WIDTH, Dialect, EntityNameCase, GenericDialect, TableDdl};
pub use error::{BoxError, DialectError, Result};
pub use field::{FieldType, TableDefinition};
pub use registry::DialectRegistry;
pub use results::{DatabaseResults, ValueRow};
pub use sql_type::{ParseSqlTypeError, SqlType};
pub use value::{FieldValue, SqlValue};
