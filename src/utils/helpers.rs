//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use crate::i18n::TranslationParams;

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Parse key-value pairs (e.g. `["time=12:00", "count=3"]`) into translation parameters
///
/// Items without `=` are ignored. Only the first `=` splits, so values may
/// contain further `=` characters.
pub fn parse_key_value_pairs<I, S>(items: I) -> TranslationParams
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pairs = TranslationParams::new();

    for item in items {
        if let Some((key, value)) = item.as_ref().split_once('=') {
            if !key.is_empty() {
                pairs.insert(key.to_string(), value.to_string());
            }
        }
    }

    pairs
}
