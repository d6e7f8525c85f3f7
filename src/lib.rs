//! ModCompat localization
//!
//! Localization engine for the Minecraft mod compatibility checker.
//! This library resolves UI strings with English fallback, translates
//! background job log lines through ordered regex pattern tables, and keeps
//! track of the user's language choice.

pub mod config;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ModCompatError, Result};

// Re-export main components for easy access
pub use i18n::{Catalog, Localizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
