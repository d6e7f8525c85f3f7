//! Error handling for ModCompat
//!
//! This module defines the error types produced while loading catalogs,
//! settings and preferences. The localization engine itself never returns
//! these to its callers; failures there degrade to safe defaults.

use thiserror::Error;

/// Main error type for ModCompat
#[derive(Error, Debug)]
pub enum ModCompatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings loading error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Fallback language '{0}' is missing from the catalog")]
    MissingFallback(String),

    #[error("Invalid catalog for '{language}': {reason}")]
    InvalidCatalog { language: String, reason: String },

    #[error("Invalid log pattern #{index} for '{language}' ({pattern}): {source}")]
    InvalidPattern {
        language: String,
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

/// Result type alias for ModCompat operations
pub type Result<T> = std::result::Result<T, ModCompatError>;

impl ModCompatError {
    /// Check if the error is recoverable
    ///
    /// Recoverable errors leave the engine usable with a reduced feature set
    /// (for example an unreadable preference file).
    pub fn is_recoverable(&self) -> bool {
        match self {
            ModCompatError::Config(_) => false,
            ModCompatError::Settings(_) => false,
            ModCompatError::MissingFallback(_) => false,
            ModCompatError::InvalidCatalog { .. } => false,
            ModCompatError::InvalidPattern { .. } => false,
            ModCompatError::Serialization(_) => true,
            ModCompatError::Toml(_) => true,
            ModCompatError::Io(_) => true,
            ModCompatError::Logging(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ModCompatError::Config(_) => ErrorSeverity::Critical,
            ModCompatError::Settings(_) => ErrorSeverity::Critical,
            ModCompatError::MissingFallback(_) => ErrorSeverity::Critical,
            ModCompatError::InvalidCatalog { .. } => ErrorSeverity::Critical,
            ModCompatError::InvalidPattern { .. } => ErrorSeverity::Critical,
            ModCompatError::Logging(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_errors_are_critical() {
        let err = ModCompatError::MissingFallback("en".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "Fallback language 'en' is missing from the catalog");
    }

    #[test]
    fn test_io_errors_are_recoverable() {
        let err = ModCompatError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(err.severity().to_string(), "ERROR");
    }
}
