//! Localization engine
//!
//! [`Localizer`] owns the active language, resolves UI keys with fallback to
//! English and rewrites backend log lines using the active language's
//! pattern table. None of its operations fail: unknown keys fall back,
//! unknown languages are ignored and unmatched log lines pass through.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, warn};

use super::binder::LanguageObserver;
use super::catalog::{Catalog, LogPattern};
use super::detect::primary_language;
use super::persistence::PreferenceStore;
use super::{TranslationParams, FALLBACK_LANGUAGE};
use crate::utils::logging;

/// Localization engine bound to one catalog and one active language
pub struct Localizer {
    /// Loaded catalog; `None` leaves the engine inert
    catalog: Option<Arc<Catalog>>,
    /// Active language code
    current_lang: String,
    /// Persistence for the language choice
    store: Box<dyn PreferenceStore>,
    /// Re-render and data refresh hooks
    observers: Vec<Box<dyn LanguageObserver>>,
}

impl Localizer {
    /// Create an engine for `catalog`; the active language is English until [`init`](Self::init)
    pub fn new(catalog: Arc<Catalog>, store: Box<dyn PreferenceStore>) -> Self {
        Self::with_catalog(Some(catalog), store)
    }

    /// Create an engine that may lack a catalog
    pub fn with_catalog(catalog: Option<Arc<Catalog>>, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            catalog,
            current_lang: FALLBACK_LANGUAGE.to_string(),
            store,
            observers: Vec::new(),
        }
    }

    /// Engine without a catalog: keys resolve to themselves and logs pass through
    pub fn disabled(store: Box<dyn PreferenceStore>) -> Self {
        Self::with_catalog(None, store)
    }

    pub fn add_observer(&mut self, observer: Box<dyn LanguageObserver>) {
        self.observers.push(observer);
    }

    /// Pick the starting language and perform the initial render
    ///
    /// Precedence: persisted choice, then the detected locale's primary
    /// language, then English. Candidates not in the catalog are skipped.
    pub fn init(&mut self, detected_locale: Option<&str>) {
        let Some(catalog) = self.catalog.clone() else {
            error!("Translation catalog not loaded, localization disabled");
            return;
        };

        let saved = match self.store.load_language() {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "Failed to read saved language, ignoring it");
                None
            }
        };

        let detected = detected_locale.and_then(primary_language);

        self.current_lang = saved
            .filter(|code| catalog.contains(code))
            .or_else(|| detected.filter(|code| catalog.contains(code)))
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());

        debug!(language = %self.current_lang, "Localization initialized");
        self.notify_observers();
    }

    /// Switch the active language
    ///
    /// Unknown codes are ignored and `false` is returned. Otherwise the
    /// choice is persisted and observers are notified; a persistence failure
    /// is logged and does not undo the switch.
    pub fn set_language(&mut self, code: &str) -> bool {
        if !self.is_language_available(code) {
            debug!(language = code, "Ignoring unknown language");
            return false;
        }

        let previous = std::mem::replace(&mut self.current_lang, code.to_string());

        let persisted = match self.store.save_language(code) {
            Ok(()) => true,
            Err(e) => {
                warn!(language = code, error = %e, "Failed to persist language choice");
                false
            }
        };

        logging::log_language_change(&previous, code, persisted);
        self.notify_observers();
        true
    }

    /// Resolve a dotted key in the active language
    ///
    /// Falls back to English, then to the key itself. For each parameter the
    /// first `{name}` placeholder is replaced.
    pub fn resolve(&self, key: &str, params: Option<&TranslationParams>) -> String {
        let Some(catalog) = &self.catalog else {
            return key.to_string();
        };

        let template = catalog
            .entry(&self.current_lang)
            .and_then(|entry| entry.get(key))
            .or_else(|| catalog.fallback().get(key));

        match template {
            Some(template) => format_message(template, params),
            None => {
                debug!(key = key, language = %self.current_lang, "Translation key not found in any language");
                key.to_string()
            }
        }
    }

    /// Translate an English backend log line into the active language
    ///
    /// The first pattern, in declaration order, that matches the whole line
    /// wins. Lines that match nothing are returned unchanged.
    pub fn translate_log(&self, message: &str) -> String {
        let translated = self
            .log_patterns()
            .iter()
            .find_map(|pattern| pattern.apply(message));

        match translated {
            Some(translated) => translated,
            None => {
                logging::log_untranslated_line(&self.current_lang, message);
                message.to_string()
            }
        }
    }

    /// Active pattern table, falling back to English when the language has none
    fn log_patterns(&self) -> &[LogPattern] {
        let Some(catalog) = &self.catalog else {
            return &[];
        };

        catalog
            .entry(&self.current_lang)
            .map(|entry| entry.log_patterns())
            .filter(|patterns| !patterns.is_empty())
            .unwrap_or_else(|| catalog.fallback().log_patterns())
    }

    fn notify_observers(&self) {
        for observer in &self.observers {
            observer.on_language_changed(self);
        }
    }

    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Sorted codes of the catalog languages
    pub fn available_languages(&self) -> Vec<&str> {
        self.catalog.as_deref().map(Catalog::languages).unwrap_or_default()
    }

    pub fn is_language_available(&self, code: &str) -> bool {
        self.catalog.as_ref().is_some_and(|catalog| catalog.contains(code))
    }

    /// Whether a catalog is loaded
    pub fn is_enabled(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_deref()
    }
}

impl fmt::Debug for Localizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localizer")
            .field("current_lang", &self.current_lang)
            .field("enabled", &self.is_enabled())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

/// Format message with parameters, replacing the first occurrence of each placeholder
///
/// The template is scanned once from left to right; substituted values are
/// never searched for further placeholders.
fn format_message(template: &str, params: Option<&TranslationParams>) -> String {
    let Some(params) = params else {
        return template.to_string();
    };

    let mut used = BTreeSet::new();
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let name = &after[..close];

        match params.get(name) {
            Some(value) if !name.contains('{') && used.insert(name) => {
                result.push_str(&rest[..open]);
                result.push_str(value);
                rest = &after[close + 1..];
            }
            _ => {
                result.push_str(&rest[..=open]);
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}
