//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from configuration files and environment variables.

use serde::{Deserialize, Serialize};

use crate::i18n::FALLBACK_LANGUAGE;

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Languages to load from `translations_dir`
    pub supported_languages: Vec<String>,
    /// Directory with `<code>.json` catalogs; the built-in catalog is used when unset
    pub translations_dir: Option<String>,
    /// JSON file holding the persisted language choice
    pub preference_file: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for a daily rolling log file
    pub file_path: Option<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            supported_languages: vec![FALLBACK_LANGUAGE.to_string(), "pl".to_string()],
            translations_dir: None,
            preference_file: ".mod-compat/preferences.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file_path: None,
        }
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("MODCOMPAT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::ModCompatError> {
        super::validation::validate_settings(self)
    }

    /// Render the effective settings as TOML
    pub fn to_toml(&self) -> crate::utils::errors::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
