//! Configuration types for tagcase.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::case::Convention;
use crate::types::Severity;

/// Top-level configuration for tagcase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Tag key -> convention identifier (e.g. `json = "camel"`).
    ///
    /// An empty identifier disables the key.
    #[serde(default)]
    pub rules: BTreeMap<String, String>,

    /// Check tag values against the field name instead of against themselves.
    #[serde(default)]
    pub use_field_name: bool,

    /// Severity of convention mismatches (default: error).
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a rule.
    #[must_use]
    pub fn rule(mut self, key: impl Into<String>, convention: impl Into<String>) -> Self {
        self.rules.insert(key.into(), convention.into());
        self
    }

    /// Sets whether expected values come from field names.
    #[must_use]
    pub fn use_field_name(mut self, enabled: bool) -> Self {
        self.use_field_name = enabled;
        self
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns the rules that are switched on, in key order.
    pub fn active_rules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules
            .iter()
            .filter(|(_, convention)| !convention.is_empty())
            .map(|(key, convention)| (key.as_str(), convention.as_str()))
    }

    /// Severity used for convention mismatches.
    #[must_use]
    pub fn mismatch_severity(&self) -> Severity {
        self.severity.unwrap_or(Severity::Error)
    }

    /// Rejects rules naming unknown conventions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownConvention`] for the first offending rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, convention) in self.active_rules() {
            if convention.parse::<Convention>().is_err() {
                return Err(ConfigError::UnknownConvention {
                    key: key.to_string(),
                    convention: convention.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_exclude(),
            respect_gitignore: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_exclude() -> Vec<String> {
    vec!["**/vendor/**".to_string(), "**/testdata/**".to_string()]
}

fn default_true() -> bool {
    true
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A rule names a convention that does not exist.
    #[error("rules.{key}: unsupported case: {convention}")]
    UnknownConvention {
        /// Tag key of the rule.
        key: String,
        /// Offending convention identifier.
        convention: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.rules.is_empty());
        assert!(!config.use_field_name);
        assert_eq!(config.mismatch_severity(), Severity::Error);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
use_field_name = true
severity = "warning"

[analyzer]
root = "./internal"
exclude = ["**/generated/**"]

[rules]
json = "camel"
yaml = "snake"
xml = ""
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./internal"));
        assert_eq!(config.analyzer.exclude, vec!["**/generated/**"]);
        assert!(config.use_field_name);
        assert_eq!(config.mismatch_severity(), Severity::Warning);

        let active: Vec<_> = config.active_rules().collect();
        assert_eq!(active, vec![("json", "camel"), ("yaml", "snake")]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_unknown_convention() {
        let config = Config::new().rule("json", "camel").rule("xml", "bogus");
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "rules.xml: unsupported case: bogus");
    }

    #[test]
    fn validate_ignores_disabled_rules() {
        let config = Config::new().rule("xml", "");
        assert!(config.validate().is_ok());
        assert_eq!(config.active_rules().count(), 0);
    }

    #[test]
    fn parse_error_is_reported() {
        let err = Config::parse("rules = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
