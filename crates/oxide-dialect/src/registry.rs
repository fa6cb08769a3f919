//! Dialect lookup by connection URL.

use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{DialectError, Result};

/// Registered dialects, consulted in registration order.
#[derive(Debug, Default)]
pub struct DialectRegistry {
    dialects: Vec<Box<dyn Dialect>>,
}

impl DialectRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a dialect.
    pub fn register(&mut self, dialect: impl Dialect + 'static) -> &mut Self {
        self.dialects.push(Box::new(dialect));
        self
    }

    /// Returns the number of registered dialects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dialects.len()
    }

    /// Returns whether no dialect is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }

    /// Iterates over the registered dialects.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Dialect + 'static)> {
        self.dialects.iter().map(|d| &**d)
    }

    /// Finds the dialect for a `scheme:driver:...` connection URL.
    ///
    /// The first dialect whose [`Dialect::matches_url`] accepts the URL
    /// wins. The driver segment is matched case-sensitively.
    pub fn resolve(&self, url: &str) -> Result<&dyn Dialect> {
        let mut parts = url.split(':');
        let db_type_part = match (parts.next(), parts.next()) {
            (Some(_), Some(part)) => part,
            _ => return Err(DialectError::InvalidUrl(url.to_string())),
        };

        let dialect = self
            .iter()
            .find(|d| d.matches_url(url, db_type_part))
            .ok_or_else(|| DialectError::UnknownUrl(url.to_string()))?;
        debug!(url = %url, dialect = dialect.name(), "Resolved database dialect");
        Ok(dialect)
    }
}
