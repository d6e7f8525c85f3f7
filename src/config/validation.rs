//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::i18n::FALLBACK_LANGUAGE;
use crate::utils::errors::{ModCompatError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.supported_languages.is_empty() {
        return Err(ModCompatError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.iter().any(|lang| lang == FALLBACK_LANGUAGE) {
        return Err(ModCompatError::Config(
            format!("Supported languages must include the fallback language '{}'", FALLBACK_LANGUAGE)
        ));
    }

    if config.supported_languages.iter().any(|lang| lang.trim().is_empty()) {
        return Err(ModCompatError::Config(
            "Supported language codes cannot be empty".to_string()
        ));
    }

    if let Some(dir) = &config.translations_dir {
        if dir.trim().is_empty() {
            return Err(ModCompatError::Config(
                "Translations directory cannot be empty when set".to_string()
            ));
        }
    }

    if config.preference_file.trim().is_empty() {
        return Err(ModCompatError::Config(
            "Preference file path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ModCompatError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(ModCompatError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
