//! ModCompat localization CLI
//!
//! Main application entry point

use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use mod_compat::{
    config::{I18nConfig, Settings},
    i18n::{detect_system_locale, Catalog, FileStore, Localizer},
    utils::{errors::Result, helpers::parse_key_value_pairs, logging},
};

#[derive(Parser)]
#[command(name = "mod-compat", version, about = "Localize mod compatibility checker strings and background job logs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a UI key in the active language
    Resolve {
        /// Dotted key, e.g. tabs.results
        key: String,
        /// Placeholder values as name=value
        params: Vec<String>,
    },
    /// Translate background job log lines (reads stdin when no message is given)
    TranslateLog {
        message: Option<String>,
    },
    /// Select and persist the active language
    SetLanguage {
        code: String,
    },
    /// List available languages
    Languages,
    /// Check translation coverage against English
    Audit,
    /// Print the effective configuration
    ShowConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", mod_compat::info());

    // A missing catalog leaves the engine inert instead of aborting
    let catalog = match load_catalog(&settings.i18n).await {
        Ok(catalog) => Some(Arc::new(catalog)),
        Err(e) => {
            error!(severity = %e.severity(), error = %e, "Failed to load translation catalog");
            None
        }
    };

    let store = FileStore::new(&settings.i18n.preference_file);
    let mut localizer = Localizer::with_catalog(catalog, Box::new(store));
    let detected = detect_system_locale();
    localizer.init(detected.as_deref());

    match cli.command {
        Command::Resolve { key, params } => {
            let params = parse_key_value_pairs(&params);
            println!("{}", localizer.resolve(&key, Some(&params)));
        }
        Command::TranslateLog { message: Some(message) } => {
            println!("{}", localizer.translate_log(&message));
        }
        Command::TranslateLog { message: None } => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await.context("Failed to read log lines from stdin")? {
                println!("{}", localizer.translate_log(&line));
            }
        }
        Command::SetLanguage { code } => {
            if !localizer.set_language(&code) {
                bail!(
                    "Unknown language '{}'. Available: {}",
                    code,
                    localizer.available_languages().join(", ")
                );
            }
            println!("{}", localizer.current_language());
        }
        Command::Languages => {
            let Some(catalog) = localizer.catalog() else {
                bail!("Translation catalog is not loaded");
            };
            for lang in catalog.stats().languages {
                let marker = if lang.code == localizer.current_language() { "*" } else { " " };
                println!("{} {} ({} keys, {} log patterns)", marker, lang.code, lang.key_count, lang.pattern_count);
            }
        }
        Command::Audit => {
            let Some(catalog) = localizer.catalog() else {
                bail!("Translation catalog is not loaded");
            };
            let audit = catalog.audit();
            print!("{}", audit);
            if !audit.is_clean() {
                bail!("Translation catalog audit failed");
            }
        }
        Command::ShowConfig => {
            print!("{}", settings.to_toml()?);
        }
    }

    Ok(())
}

/// Load the configured catalog directory, or the built-in catalog when none is set
async fn load_catalog(config: &I18nConfig) -> Result<Catalog> {
    match &config.translations_dir {
        Some(dir) => {
            info!("Loading translations from {}", dir);
            Catalog::load_dir(dir, &config.supported_languages).await
        }
        None => Catalog::builtin(),
    }
}
