//! # oxide-dialect-derby
//!
//! Apache Derby dialects for `oxide-dialect`.
//!
//! # How Derby differs from the generic dialect
//!
//! - **No usable boolean column**: booleans, single characters and bytes
//!   are all stored in `SMALLINT` columns. Booleans are written as `1`/`0`
//!   ([`BooleanAsSmallint`]) and characters as their code point
//!   ([`CharAsInteger`]).
//! - **Long types**: unbounded text is `LONG VARCHAR` and raw bytes are
//!   `LONG VARCHAR FOR BIT DATA` (no width). Serialized values go to a
//!   `BLOB` read through the blob stream ([`ObjectAsBlob`]).
//! - **Pagination**: there is no `LIMIT` clause, so row caps must be
//!   applied on the driver side; offsets need the `ROWS` keyword
//!   (`OFFSET 5 ROWS`).
//! - **Identity columns**: generated ids are declared with
//!   `GENERATED BY DEFAULT AS IDENTITY`.
//! - **Identifiers**: quoted with double quotes; unquoted identifiers are
//!   folded to upper case, so names are compared upper-cased against the
//!   catalog.
//! - **Ping**: `SELECT 1 FROM SYSIBM.SYSDUMMY1`, as Derby has no
//!   table-less `SELECT`.
//!
//! ## Example
//!
//! ```rust
//! use oxide_dialect::{Dialect, DialectRegistry};
//! use oxide_dialect_derby::register_dialects;
//!
//! let mut registry = DialectRegistry::new();
//! register_dialects(&mut registry);
//!
//! let dialect = registry.resolve("jdbc:derby:memory:app;create=true").unwrap();
//! assert_eq!(dialect.name(), "Derby");
//!
//! let mut sql = String::from("SELECT * FROM \"ACCOUNTS\" ");
//! let row_cap = dialect.append_pagination(&mut sql, Some(10), Some(5)).unwrap();
//! assert_eq!(sql, "SELECT * FROM \"ACCOUNTS\" OFFSET 5 ROWS ");
//! assert_eq!(row_cap, Some(10));
//! ```

mod client_server;
pub mod converters;
mod dialect;

pub use client_server::DerbyClientServerDialect;
pub use converters::{BooleanAsSmallint, CharAsInteger, ObjectAsBlob};
pub use dialect::{DATABASE_URL_PORTION, DerbyEmbeddedDialect};

use oxide_dialect::{DialectConfig, DialectRegistry};

/// Registers the embedded and client/server Derby dialects.
pub fn register_dialects(registry: &mut DialectRegistry) {
    register_dialects_with(registry, &DialectConfig::default());
}

/// Registers both Derby dialects built with `config`.
pub fn register_dialects_with(registry: &mut DialectRegistry, config: &DialectConfig) {
    registry
        .register(DerbyEmbeddedDialect::new().with_config(config))
        .register(DerbyClientServerDialect::new().with_config(config));
}
