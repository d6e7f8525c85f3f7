//! Internationalization module
//!
//! This module handles multi-language support for the mod compatibility
//! checker: translation catalogs, UI key resolution with English fallback,
//! translation of backend log lines, persisted language choice and locale
//! detection.

pub mod audit;
pub mod binder;
pub mod catalog;
pub mod detect;
pub mod engine;
pub mod persistence;

use std::collections::BTreeMap;

/// Language every other language falls back to
pub const FALLBACK_LANGUAGE: &str = "en";

/// Translation parameters for message formatting
pub type TranslationParams = BTreeMap<String, String>;

// Re-export commonly used i18n components
pub use audit::{CatalogAudit, LanguageAudit};
pub use binder::{apply_bindings, Binding, LanguageObserver, Translatable};
pub use catalog::{Catalog, LanguageEntry, LanguageStats, LogPattern, TranslationStats};
pub use detect::{detect_system_locale, primary_language};
pub use engine::Localizer;
pub use persistence::{FileStore, MemoryStore, PreferenceStore, LANGUAGE_KEY};
