use serde::{Deserialize, Serialize};

/// Size given to string keys and indexed strings declared without a size.
pub const DEFAULT_INDEXED_STRING_SIZE: u32 = 256;

/// Configuration for the SQL Server dialect.
///
/// Defaults are permissive: identifiers and savepoint names are written as given.
/// Deserializable so it can live inside an application config file; missing
/// keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectConfig {
    /// Reject identifiers containing `"`/NUL and savepoint names that are not
    /// plain identifiers, instead of writing them verbatim.
    pub strict_identifiers: bool,
    /// `nvarchar` size used for primary-key/indexed string columns without an explicit size.
    pub indexed_string_size: u32,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            strict_identifiers: false,
            indexed_string_size: DEFAULT_INDEXED_STRING_SIZE,
        }
    }
}

impl DialectConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable strict identifier and savepoint name validation.
    pub fn strict(mut self) -> Self {
        self.strict_identifiers = true;
        self
    }

    /// Disable strict validation.
    pub fn permissive(mut self) -> Self {
        self.strict_identifiers = false;
        self
    }

    /// Override the implicit size of indexed string columns.
    ///
    /// Values above 4000 make such columns `nvarchar(MAX)`, which SQL Server
    /// cannot index.
    pub fn with_indexed_string_size(mut self, size: u32) -> Self {
        self.indexed_string_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DialectConfig::new();
        assert!(!config.strict_identifiers);
        assert_eq!(config.indexed_string_size, 256);
    }

    #[test]
    fn builder_methods() {
        let config = DialectConfig::new().strict().with_indexed_string_size(450);
        assert!(config.strict_identifiers);
        assert_eq!(config.indexed_string_size, 450);
        assert!(!config.permissive().strict_identifiers);
    }

    #[test]
    fn deserialize_partial() {
        let config: DialectConfig = serde_json::from_str(r#"{"strict_identifiers":true}"#).unwrap();
        assert!(config.strict_identifiers);
        assert_eq!(config.indexed_string_size, DEFAULT_INDEXED_STRING_SIZE);

        let config: DialectConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DialectConfig::default());
    }
}
