//! Registry configuration

use serde::{Deserialize, Serialize};

/// Controls which validators a registry starts with.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::{RegistryConfig, ValidatorRegistry};
///
/// let config = RegistryConfig::from_json_str(r#"{ "exclude": ["isFunction"] }"#).unwrap();
/// let registry = ValidatorRegistry::from_config(&config);
/// assert!(registry.contains("between"));
/// assert!(!registry.contains("isFunction"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Load the built-in catalog
    pub builtins: bool,

    /// Built-in names to leave out
    pub exclude: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            builtins: true,
            exclude: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Configuration for a registry with no validators.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            builtins: false,
            exclude: Vec::new(),
        }
    }

    /// Parses a configuration from JSON text. Missing fields take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `json` is not a valid configuration.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Whether the built-in `name` should be loaded.
    #[must_use]
    pub fn loads(&self, name: &str) -> bool {
        self.builtins && !self.exclude.iter().any(|excluded| excluded == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert!(config.loads("min"));
    }

    #[test]
    fn test_exclude() {
        let config = RegistryConfig::from_json_str(r#"{ "exclude": ["like", "notLike"] }"#).unwrap();
        assert!(config.builtins);
        assert!(!config.loads("like"));
        assert!(config.loads("contain"));
    }

    #[test]
    fn test_empty() {
        let config = RegistryConfig::empty();
        assert!(!config.loads("min"));
        assert_eq!(
            RegistryConfig::from_json_str(r#"{ "builtins": false }"#).unwrap(),
            config
        );
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(RegistryConfig::from_json_str(r#"{ "builtins": "yes" }"#).is_err());
    }
}
