//! Per-dialect configuration.

use std::path::Path;

use serde::Deserialize;

use crate::dialect::EntityNameCase;
use crate::error::Result;

/// Settings a dialect can be built with.
///
/// Unset fields keep the dialect's own defaults.
///
/// ```json
/// { "entity_name_case": "upper", "default_varchar_width": 128 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialectConfig {
    /// How unquoted identifiers are folded when compared with metadata.
    pub entity_name_case: Option<EntityNameCase>,
    /// Width for `VARCHAR` columns without an explicit width.
    pub default_varchar_width: Option<u32>,
}

impl DialectConfig {
    /// Parses a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DialectError;

    #[test]
    fn test_parse_config() {
        let config =
            DialectConfig::from_json_str(r#"{"entity_name_case": "lower"}"#).unwrap();
        assert_eq!(config.entity_name_case, Some(EntityNameCase::Lower));
        assert_eq!(config.default_varchar_width, None);

        assert_eq!(
            DialectConfig::from_json_str("{}").unwrap(),
            DialectConfig::default()
        );
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = DialectConfig::from_json_str(r#"{"case": "upper"}"#).unwrap_err();
        assert!(matches!(err, DialectError::Config(_)));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dialect.json");
        std::fs::write(&path, r#"{"default_varchar_width": 64}"#).unwrap();
        let config = DialectConfig::from_path(&path).unwrap();
        assert_eq!(config.default_varchar_width, Some(64));

        let missing = DialectConfig::from_path(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(DialectError::Io(_))));
    }
}
