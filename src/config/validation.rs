use super::models::Config;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("No extension mappings configured (at least one [[mappings]] entry is required)")]
    NoMappings,

    #[error("Extension '{0}' must be a dot-prefixed suffix like \".txt\"")]
    InvalidExtension(String),

    #[error("Extension '{0}' must be declared lowercase")]
    NotLowercase(String),

    #[error("Extension '{0}' is mapped more than once")]
    DuplicateExtension(String),

    #[error("Mapping for '{0}' has an empty handler identifier")]
    EmptyHandler(String),
}

/// Validate the entire configuration
///
/// The dispatch table performs no normalization at lookup time, so declared
/// keys must already be lowercase and dot-prefixed. Uniqueness guarantees the
/// listing endpoint reports each extension exactly once.
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    if config.mappings.is_empty() {
        return Err(ValidationError::NoMappings);
    }

    let mut seen = HashSet::new();
    for entry in &config.mappings {
        if !entry.extension.starts_with('.') || entry.extension.len() < 2 {
            return Err(ValidationError::InvalidExtension(entry.extension.clone()));
        }
        if entry.extension != entry.extension.to_lowercase() {
            return Err(ValidationError::NotLowercase(entry.extension.clone()));
        }
        if entry.handler.trim().is_empty() {
            return Err(ValidationError::EmptyHandler(entry.extension.clone()));
        }
        if !seen.insert(entry.extension.as_str()) {
            return Err(ValidationError::DuplicateExtension(entry.extension.clone()));
        }
    }

    Ok(())
}
