//! Persisted language preference
//!
//! The active language survives restarts through a [`PreferenceStore`]. The
//! file-backed store keeps a small JSON object of string values, with the
//! language choice stored under [`LANGUAGE_KEY`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::utils::errors::Result;

/// Storage key of the persisted language code
pub const LANGUAGE_KEY: &str = "language";

/// Storage for the user's language choice
pub trait PreferenceStore {
    /// Read the persisted language code, if any
    fn load_language(&self) -> Result<Option<String>>;

    /// Persist the language code
    fn save_language(&mut self, code: &str) -> Result<()>;
}

/// In-memory store; clones share the same underlying values
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a language choice
    pub fn with_language(code: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(LANGUAGE_KEY.to_string(), code.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load_language(&self) -> Result<Option<String>> {
        Ok(self.get(LANGUAGE_KEY))
    }

    fn save_language(&mut self, code: &str) -> Result<()> {
        self.values.borrow_mut().insert(LANGUAGE_KEY.to_string(), code.to_string());
        Ok(())
    }
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all stored values; a missing file holds no values
    fn read_values(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_values(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn load_language(&self) -> Result<Option<String>> {
        let mut values = self.read_values()?;
        debug!(path = %self.path.display(), has_language = values.contains_key(LANGUAGE_KEY), "Read preferences");
        Ok(values.remove(LANGUAGE_KEY))
    }

    fn save_language(&mut self, code: &str) -> Result<()> {
        let mut values = match self.read_values() {
            Ok(values) => values,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding unreadable preferences file");
                BTreeMap::new()
            }
        };

        values.insert(LANGUAGE_KEY.to_string(), code.to_string());
        self.write_values(&values)?;
        debug!(path = %self.path.display(), language = code, "Saved language preference");
        Ok(())
    }
}
