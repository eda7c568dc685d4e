//! Configuration management for Parsebox
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use parsebox::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Server listening on: {}", config.server.bind_addr());
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `PARSEBOX__<section>__<key>`
//!
//! Examples:
//! - `PARSEBOX__SERVER__HOST=0.0.0.0`
//! - `PARSEBOX__SERVER__PORT=9000`
//! - `PARSEBOX__SERVER__DEBUG=true`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/parsebox.toml`.
//! This can be overridden using the `PARSEBOX_CONFIG` environment variable.
//!
//! The extension dispatch table is declared as an array of tables so its
//! declaration order survives loading; that order is what the
//! supported-extensions listing reports.

mod models;
mod sources;
mod validation;

pub use models::{Config, MappingEntry, ServerConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`PARSEBOX__*`)
    /// 2. TOML file (default: `config/parsebox.toml`)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or validation
    /// fails (no mappings, duplicate or non-normalized extensions). Both are
    /// startup-fatal conditions, never surfaced as request errors.
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files.
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_minimal_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[[mappings]]
extension = ".txt"
handler = "text"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.mappings.len(), 1);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_validation_catches_duplicate_extension() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[[mappings]]
extension = ".txt"
handler = "text"

[[mappings]]
extension = ".txt"
handler = "json"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let result = Config::load_from_path(config_path);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::Validation(ValidationError::DuplicateExtension(_))
        ));
    }

    #[test]
    fn test_empty_mapping_table_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("missing.toml");

        let result = Config::load_from_path(config_path);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::Validation(ValidationError::NoMappings)
        ));
    }

    #[test]
    fn test_full_config_example() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[server]
host = "0.0.0.0"
port = 9000
debug = true

[[mappings]]
extension = ".pdf"
handler = "pdf"

[[mappings]]
extension = ".csv"
handler = "csv"

[[mappings]]
extension = ".txt"
handler = "text"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();

        assert_eq!(config.server.bind_addr(), "0.0.0.0:9000");
        assert!(config.server.debug);
        assert_eq!(config.mappings.len(), 3);

        // Declaration order survives loading
        let extensions: Vec<&str> = config
            .mappings
            .iter()
            .map(|m| m.extension.as_str())
            .collect();
        assert_eq!(extensions, vec![".pdf", ".csv", ".txt"]);
    }
}
