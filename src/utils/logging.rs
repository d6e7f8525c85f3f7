//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the ModCompat application.

use tracing::{debug, info, warn, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{ModCompatError, Result};
use crate::utils::helpers::truncate_text;

/// Longest log line excerpt written to debug logs
const LOG_EXCERPT_LENGTH: usize = 120;

/// Initialize logging based on configuration
///
/// Console output goes to stderr so that stdout stays free for translated
/// text. The returned guard flushes the file appender and must be kept alive
/// for as long as logging is needed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "mod-compat.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ModCompatError::Logging(e.to_string()))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a change of the active language
pub fn log_language_change(from: &str, to: &str, persisted: bool) {
    info!(
        from = from,
        to = to,
        persisted = persisted,
        "Active language changed"
    );
}

/// Log a loaded catalog entry
pub fn log_language_loaded(language: &str, key_count: usize, pattern_count: usize) {
    debug!(
        language = language,
        key_count = key_count,
        pattern_count = pattern_count,
        "Loaded translations"
    );
}

/// Log keys that break the fallback superset invariant
pub fn log_keys_missing_from_fallback(language: &str, keys: &[String]) {
    warn!(
        language = language,
        count = keys.len(),
        keys = ?keys,
        "Translation keys are not present in the fallback language"
    );
}

/// Log a log line that no pattern recognized
pub fn log_untranslated_line(language: &str, message: &str) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    debug!(
        language = language,
        message = %truncate_text(message, LOG_EXCERPT_LENGTH),
        "No log pattern matched, passing message through"
    );
}
