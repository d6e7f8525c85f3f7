//! Catalog coverage audit
//!
//! Compares every translation against the fallback language: keys that will
//! fall back at runtime, keys the fallback lacks, and whether the log
//! pattern table follows the fallback's table entry for entry.

use std::fmt;

use super::catalog::{Catalog, LanguageEntry};

/// Audit result for one non-fallback language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageAudit {
    pub code: String,
    /// Keys resolved from the fallback at runtime
    pub missing_keys: Vec<String>,
    /// Keys absent from the fallback
    pub extra_keys: Vec<String>,
    pub pattern_count: usize,
    pub fallback_pattern_count: usize,
    /// Positions where the pattern differs from the fallback's, or exists in only one table
    pub pattern_mismatches: Vec<usize>,
}

impl LanguageAudit {
    fn new(entry: &LanguageEntry, fallback: &LanguageEntry) -> Self {
        let patterns = entry.log_patterns();
        let fallback_patterns = fallback.log_patterns();

        // An empty table means the fallback table is used as is.
        let pattern_mismatches = if patterns.is_empty() {
            Vec::new()
        } else {
            (0..patterns.len().max(fallback_patterns.len()))
                .filter(|&index| {
                    match (patterns.get(index), fallback_patterns.get(index)) {
                        (Some(own), Some(reference)) => own.source() != reference.source(),
                        _ => true,
                    }
                })
                .collect()
        };

        Self {
            code: entry.code().to_string(),
            missing_keys: fallback.keys_not_in(entry),
            extra_keys: entry.keys_not_in(fallback),
            pattern_count: patterns.len(),
            fallback_pattern_count: fallback_patterns.len(),
            pattern_mismatches,
        }
    }

    /// No superset violations and no pattern table drift; missing keys are tolerated
    pub fn is_clean(&self) -> bool {
        self.extra_keys.is_empty() && self.pattern_mismatches.is_empty()
    }
}

/// Audit of a whole catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogAudit {
    pub fallback_key_count: usize,
    pub languages: Vec<LanguageAudit>,
}

impl CatalogAudit {
    pub fn is_clean(&self) -> bool {
        self.languages.iter().all(LanguageAudit::is_clean)
    }
}

/// Audit every non-fallback language of `catalog`
pub fn audit_catalog(catalog: &Catalog) -> CatalogAudit {
    let fallback = catalog.fallback();

    CatalogAudit {
        fallback_key_count: fallback.key_count(),
        languages: catalog
            .translations()
            .map(|entry| LanguageAudit::new(entry, fallback))
            .collect(),
    }
}

impl Catalog {
    pub fn audit(&self) -> CatalogAudit {
        audit_catalog(self)
    }
}

impl fmt::Display for CatalogAudit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "fallback: {} keys", self.fallback_key_count)?;

        for lang in &self.languages {
            let status = if lang.is_clean() { "ok" } else { "FAIL" };
            writeln!(
                f,
                "{} [{}]: {} missing, {} extra, {}/{} patterns",
                lang.code,
                status,
                lang.missing_keys.len(),
                lang.extra_keys.len(),
                lang.pattern_count,
                lang.fallback_pattern_count,
            )?;

            for key in &lang.missing_keys {
                writeln!(f, "  missing: {}", key)?;
            }
            for key in &lang.extra_keys {
                writeln!(f, "  not in fallback: {}", key)?;
            }
            for index in &lang.pattern_mismatches {
                writeln!(f, "  pattern #{} differs from fallback", index)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &str = r#"{
        "a": "A", "b": {"c": "C"},
        "log_patterns": [
            {"pattern": "one (.+)", "replacement": "1 $1"},
            {"pattern": "two (.+)", "replacement": "2 $1"}
        ]
    }"#;

    #[test]
    fn test_builtin_catalog_is_clean() {
        let audit = Catalog::builtin().unwrap().audit();
        assert!(audit.is_clean(), "{}", audit);
        assert_eq!(audit.languages.len(), 1);
        assert!(audit.languages[0].missing_keys.is_empty());
    }

    #[test]
    fn test_detects_missing_and_extra_keys() {
        let catalog = Catalog::from_json_documents([
            ("en", EN),
            ("pl", r#"{"a": "AA", "z": "Z"}"#),
        ])
        .unwrap();

        let audit = catalog.audit();
        let pl = &audit.languages[0];
        assert_eq!(pl.missing_keys, vec!["b.c".to_string()]);
        assert_eq!(pl.extra_keys, vec!["z".to_string()]);
        assert!(pl.pattern_mismatches.is_empty());
        assert!(!audit.is_clean());
    }

    #[test]
    fn test_detects_pattern_drift() {
        let catalog = Catalog::from_json_documents([
            ("en", EN),
            (
                "pl",
                r#"{"a": "A", "b": {"c": "C"}, "log_patterns": [
                    {"pattern": "two (.+)", "replacement": "dwa $1"}
                ]}"#,
            ),
        ])
        .unwrap();

        let pl = &catalog.audit().languages[0];
        assert_eq!(pl.pattern_mismatches, vec![0, 1]);
        assert!(!pl.is_clean());
        assert!(catalog.audit().to_string().contains("pattern #0 differs"));
    }
}
