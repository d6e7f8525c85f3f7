//! Integration tests for loading catalogs from a translations directory

mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use mod_compat::i18n::Catalog;
use mod_compat::ModCompatError;

fn languages(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|code| code.to_string()).collect()
}

#[tokio::test]
async fn test_load_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog_dir(dir.path(), &[("en", TEST_EN), ("de", TEST_DE)]);

    let catalog = Catalog::load_dir(dir.path(), &languages(&["en", "de"])).await.unwrap();

    assert_eq!(catalog.languages(), vec!["de", "en"]);
    assert_eq!(catalog.entry("de").and_then(|e| e.get("menu.open")), Some("Öffnen"));
    assert_eq!(catalog.fallback().log_patterns().len(), 2);
}

#[tokio::test]
async fn test_missing_translation_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog_dir(dir.path(), &[("en", TEST_EN)]);

    let catalog = Catalog::load_dir(dir.path(), &languages(&["en", "de"])).await.unwrap();
    assert_eq!(catalog.languages(), vec!["en"]);
}

#[tokio::test]
async fn test_broken_translation_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog_dir(
        dir.path(),
        &[
            ("en", TEST_EN),
            ("de", "{ not json"),
            ("fr", r#"{"log_patterns": [{"pattern": "(", "replacement": ""}]}"#),
        ],
    );

    let catalog = Catalog::load_dir(dir.path(), &languages(&["en", "de", "fr"])).await.unwrap();
    assert_eq!(catalog.languages(), vec!["en"]);
}

#[tokio::test]
async fn test_missing_fallback_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog_dir(dir.path(), &[("de", TEST_DE)]);

    let result = Catalog::load_dir(dir.path(), &languages(&["en", "de"])).await;
    assert_matches!(result, Err(ModCompatError::Config(_)));
}

#[tokio::test]
async fn test_broken_fallback_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog_dir(dir.path(), &[("en", r#"{"log_patterns": [{"pattern": "[", "replacement": ""}]}"#)]);

    let result = Catalog::load_dir(dir.path(), &languages(&["en"])).await;
    assert_matches!(result, Err(ModCompatError::InvalidPattern { index: 0, .. }));
}

#[tokio::test]
async fn test_fallback_not_requested() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog_dir(dir.path(), &[("en", TEST_EN), ("de", TEST_DE)]);

    let result = Catalog::load_dir(dir.path(), &languages(&["de"])).await;
    assert_matches!(result, Err(ModCompatError::MissingFallback(_)));
}

#[tokio::test]
async fn test_repository_translations_match_builtin() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("translations");
    let loaded = Catalog::load_dir(&dir, &languages(&["en", "pl"])).await.unwrap();
    let builtin = Catalog::builtin().unwrap();

    assert_eq!(loaded.languages(), builtin.languages());
    assert_eq!(loaded.fallback().key_count(), builtin.fallback().key_count());
    assert!(loaded.audit().is_clean());
}
