//! Translation catalog loading
//!
//! A catalog holds, for every language, a flat map from dotted keys to UI
//! strings and an ordered list of compiled log patterns. Catalog documents
//! are nested JSON trees; they are flattened and their patterns compiled once
//! at load time, after which the catalog is immutable.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use regex::{Captures, Regex};
use serde::Deserialize;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{error, info, warn};

use super::FALLBACK_LANGUAGE;
use crate::utils::errors::{ModCompatError, Result};
use crate::utils::logging;

/// Name of the top-level field holding the log pattern table
const LOG_PATTERNS_FIELD: &str = "log_patterns";

const BUILTIN_EN: &str = include_str!("../../translations/en.json");
const BUILTIN_PL: &str = include_str!("../../translations/pl.json");

/// A log pattern record as it appears in a catalog document
#[derive(Debug, Deserialize)]
struct RawLogPattern {
    pattern: String,
    replacement: String,
}

/// Compiled log pattern with its localized replacement template
#[derive(Debug, Clone)]
pub struct LogPattern {
    source: String,
    matcher: Regex,
    replacement: String,
}

impl LogPattern {
    /// Compile a pattern that must match the whole log line
    pub fn new(pattern: &str, replacement: impl Into<String>) -> std::result::Result<Self, regex::Error> {
        let matcher = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Self {
            source: pattern.to_string(),
            matcher,
            replacement: replacement.into(),
        })
    }

    /// Pattern as written in the catalog, without anchoring
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Replacement template with `$1`, `$2`, ... placeholders
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Translate `message` if this pattern matches it
    ///
    /// The first `$N` placeholder of each group is substituted; later
    /// repeats and indices beyond the last group stay literal. Groups that
    /// did not take part in the match become empty strings.
    pub fn apply(&self, message: &str) -> Option<String> {
        let captures = self.matcher.captures(message)?;
        Some(expand_template(&self.replacement, &captures))
    }
}

/// Fill `$N` placeholders in one left-to-right pass over `template`
///
/// The longest digit run naming an existing group wins, so `$10` is group
/// ten when the pattern has ten groups. Captured text is never rescanned.
fn expand_template(template: &str, captures: &Captures<'_>) -> String {
    let group_count = captures.len();
    let mut used = vec![false; group_count];
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(dollar) = rest.find('$') {
        result.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        let group = (1..=digits).rev().find_map(|len| {
            after[..len]
                .parse::<usize>()
                .ok()
                .filter(|&index| index >= 1 && index < group_count)
                .map(|index| (index, len))
        });

        match group {
            Some((index, len)) if !used[index] => {
                used[index] = true;
                result.push_str(captures.get(index).map_or("", |m| m.as_str()));
                rest = &after[len..];
            }
            _ => {
                result.push('$');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}

/// All translations for a single language
#[derive(Debug, Clone)]
pub struct LanguageEntry {
    code: String,
    strings: HashMap<String, String>,
    log_patterns: Vec<LogPattern>,
}

impl LanguageEntry {
    /// Build an entry from already flattened strings and compiled patterns
    pub fn new(
        code: impl Into<String>,
        strings: HashMap<String, String>,
        log_patterns: Vec<LogPattern>,
    ) -> Self {
        Self {
            code: code.into(),
            strings,
            log_patterns,
        }
    }

    /// Parse a catalog document for `code`
    pub fn from_json(code: &str, content: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(content)?;
        let Value::Object(mut root) = document else {
            return Err(ModCompatError::InvalidCatalog {
                language: code.to_string(),
                reason: "document root must be an object".to_string(),
            });
        };

        let log_patterns = match root.remove(LOG_PATTERNS_FIELD) {
            Some(raw) => compile_patterns(code, raw)?,
            None => Vec::new(),
        };

        let mut strings = HashMap::new();
        flatten_into(&mut strings, "", &root);

        Ok(Self::new(code, strings, log_patterns))
    }

    /// Language code of this entry
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Look up a flattened dotted key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    pub fn key_count(&self) -> usize {
        self.strings.len()
    }

    /// Ordered log pattern table; first match wins
    pub fn log_patterns(&self) -> &[LogPattern] {
        &self.log_patterns
    }

    /// Sorted keys of this entry that `other` does not define
    pub fn keys_not_in(&self, other: &LanguageEntry) -> Vec<String> {
        let mut keys: Vec<String> = self
            .keys()
            .filter(|key| !other.contains_key(key))
            .map(str::to_string)
            .collect();
        keys.sort();
        keys
    }
}

/// Compile the `log_patterns` array of a catalog document
fn compile_patterns(code: &str, raw: Value) -> Result<Vec<LogPattern>> {
    let records: Vec<RawLogPattern> =
        serde_json::from_value(raw).map_err(|e| ModCompatError::InvalidCatalog {
            language: code.to_string(),
            reason: format!("malformed {}: {}", LOG_PATTERNS_FIELD, e),
        })?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            LogPattern::new(&record.pattern, record.replacement).map_err(|source| {
                ModCompatError::InvalidPattern {
                    language: code.to_string(),
                    index,
                    pattern: record.pattern.clone(),
                    source,
                }
            })
        })
        .collect()
}

/// Flatten nested objects into dotted keys, keeping only string leaves
fn flatten_into(out: &mut HashMap<String, String>, prefix: &str, object: &Map<String, Value>) {
    for (key, value) in object {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::String(text) => {
                out.insert(full_key, text.clone());
            }
            Value::Object(nested) => flatten_into(out, &full_key, nested),
            _ => {}
        }
    }
}

/// Immutable set of language entries with a mandatory fallback language
#[derive(Debug, Clone)]
pub struct Catalog {
    fallback: LanguageEntry,
    others: BTreeMap<String, LanguageEntry>,
}

impl Catalog {
    /// Assemble a catalog; the fallback language must be among `entries`
    pub fn from_entries(entries: impl IntoIterator<Item = LanguageEntry>) -> Result<Self> {
        let mut fallback = None;
        let mut others = BTreeMap::new();

        for entry in entries {
            logging::log_language_loaded(entry.code(), entry.key_count(), entry.log_patterns().len());
            if entry.code() == FALLBACK_LANGUAGE {
                fallback = Some(entry);
            } else {
                others.insert(entry.code().to_string(), entry);
            }
        }

        let fallback =
            fallback.ok_or_else(|| ModCompatError::MissingFallback(FALLBACK_LANGUAGE.to_string()))?;

        for entry in others.values() {
            let extra = entry.keys_not_in(&fallback);
            if !extra.is_empty() {
                logging::log_keys_missing_from_fallback(entry.code(), &extra);
            }
        }

        Ok(Self { fallback, others })
    }

    /// Parse `(language code, JSON document)` pairs into a catalog
    pub fn from_json_documents<I, C, D>(documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, D)>,
        C: AsRef<str>,
        D: AsRef<str>,
    {
        let entries = documents
            .into_iter()
            .map(|(code, content)| LanguageEntry::from_json(code.as_ref(), content.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Self::from_entries(entries)
    }

    /// Catalog compiled into the binary (English and Polish)
    pub fn builtin() -> Result<Self> {
        Self::from_json_documents([(FALLBACK_LANGUAGE, BUILTIN_EN), ("pl", BUILTIN_PL)])
    }

    /// Load `<dir>/<code>.json` for every language in `languages`
    ///
    /// Problems with non-fallback languages are logged and the language is
    /// skipped. Problems with the fallback language are errors.
    pub async fn load_dir(dir: impl AsRef<Path>, languages: &[String]) -> Result<Self> {
        let dir = dir.as_ref();
        let mut entries = Vec::new();

        for lang_code in languages {
            let file_path = dir.join(format!("{}.json", lang_code));

            if !file_path.exists() {
                warn!("Translation file not found: {}", file_path.display());
                if lang_code == FALLBACK_LANGUAGE {
                    return Err(ModCompatError::Config(format!(
                        "Fallback language translation file not found: {}",
                        file_path.display()
                    )));
                }
                continue;
            }

            let loaded = match fs::read_to_string(&file_path).await {
                Ok(content) => LanguageEntry::from_json(lang_code, &content),
                Err(e) => Err(e.into()),
            };

            match loaded {
                Ok(entry) => {
                    info!("Loaded translations for language: {}", lang_code);
                    entries.push(entry);
                }
                Err(e) => {
                    error!("Failed to load translations for {}: {}", lang_code, e);
                    if lang_code == FALLBACK_LANGUAGE {
                        return Err(e);
                    }
                }
            }
        }

        Self::from_entries(entries)
    }

    /// The fallback ("en") entry
    pub fn fallback(&self) -> &LanguageEntry {
        &self.fallback
    }

    pub fn entry(&self, code: &str) -> Option<&LanguageEntry> {
        if code == FALLBACK_LANGUAGE {
            Some(&self.fallback)
        } else {
            self.others.get(code)
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entry(code).is_some()
    }

    /// Sorted language codes
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.others.keys().map(String::as_str).collect();
        codes.push(self.fallback.code());
        codes.sort_unstable();
        codes
    }

    /// Entries other than the fallback, sorted by code
    pub fn translations(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.others.values()
    }

    /// Get translation statistics
    pub fn stats(&self) -> TranslationStats {
        let languages = self
            .languages()
            .into_iter()
            .filter_map(|code| self.entry(code))
            .map(|entry| LanguageStats {
                code: entry.code().to_string(),
                key_count: entry.key_count(),
                pattern_count: entry.log_patterns().len(),
            })
            .collect();

        TranslationStats {
            languages,
            total_keys: self.fallback.key_count(),
        }
    }
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
    pub pattern_count: usize,
}
