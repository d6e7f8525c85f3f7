//! Test data helpers
//!
//! Builders for catalogs, localizers and fake collaborators.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use mod_compat::i18n::{Catalog, LanguageObserver, Localizer, MemoryStore, PreferenceStore};
use mod_compat::{ModCompatError, Result};

/// Small English catalog with overlapping log patterns
pub const TEST_EN: &str = r#"{
    "greeting": "Hello {name}",
    "menu": {"open": "Open", "close": "Close"},
    "only_en": "English only",
    "log_patterns": [
        {"pattern": "Mod (.+) added", "replacement": "Mod $1 added"},
        {"pattern": "Mod (.+)", "replacement": "Mod $1"}
    ]
}"#;

/// German catalog: partial keys, no log patterns
pub const TEST_DE: &str = r#"{
    "greeting": "Hallo {name}",
    "menu": {"open": "Öffnen"}
}"#;

/// French catalog whose general pattern precedes the specific one
pub const TEST_FR: &str = r#"{
    "greeting": "Bonjour {name}",
    "log_patterns": [
        {"pattern": "Mod (.+)", "replacement": "GENERAL $1"},
        {"pattern": "Mod (.+) added", "replacement": "SPECIFIC $1"}
    ]
}"#;

pub fn builtin_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("built-in catalog should load"))
}

pub fn test_catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::from_json_documents([("en", TEST_EN), ("de", TEST_DE), ("fr", TEST_FR)])
            .expect("test catalog should load"),
    )
}

/// Initialized localizer over `catalog` with `lang` active
pub fn localizer_in(catalog: Arc<Catalog>, lang: &str) -> Localizer {
    let mut localizer = Localizer::new(catalog, Box::new(MemoryStore::new()));
    localizer.init(None);
    localizer.set_language(lang);
    localizer
}

/// Initialized localizer over the built-in catalog with `lang` active
pub fn builtin_localizer(lang: &str) -> Localizer {
    localizer_in(builtin_catalog(), lang)
}

/// Write `<code>.json` files into `dir`
pub fn write_catalog_dir(dir: &Path, documents: &[(&str, &str)]) {
    for (code, content) in documents {
        std::fs::write(dir.join(format!("{}.json", code)), content).expect("failed to write catalog file");
    }
}

/// Observer recording the language seen on every notification
#[derive(Clone, Default)]
pub struct RecordingObserver {
    pub seen: Rc<RefCell<Vec<String>>>,
}

impl LanguageObserver for RecordingObserver {
    fn on_language_changed(&self, localizer: &Localizer) {
        self.seen.borrow_mut().push(localizer.current_language().to_string());
    }
}

/// Store whose reads and writes always fail
pub struct FailingStore;

impl PreferenceStore for FailingStore {
    fn load_language(&self) -> Result<Option<String>> {
        Err(ModCompatError::Io(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read denied")))
    }

    fn save_language(&mut self, _code: &str) -> Result<()> {
        Err(ModCompatError::Io(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "write denied")))
    }
}
