//! System locale detection

/// Environment variables consulted in precedence order
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Detect the system locale from the environment
///
/// Returns the first non-empty value of `LC_ALL`, `LC_MESSAGES` or `LANG`,
/// ignoring the `C` and `POSIX` locales.
pub fn detect_system_locale() -> Option<String> {
    LOCALE_ENV_VARS.iter().find_map(|var| {
        std::env::var(var)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty() && value != "C" && value != "POSIX")
    })
}

/// Extract the primary language subtag of a locale
///
/// `pl_PL.UTF-8` → `pl`, `en-US` → `en`, `de@euro` → `de`.
pub fn primary_language(locale: &str) -> Option<String> {
    let without_suffix = locale.split(['.', '@']).next().unwrap_or(locale);
    let primary = without_suffix.split(['-', '_']).next().unwrap_or(without_suffix);

    if primary.is_empty() || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    Some(primary.to_ascii_lowercase())
}
