//! Locale resolution.
//!
//! # Responsibilities
//! - Pick exactly one supported locale per request
//!
//! # Design Decisions
//! - First match wins: cookie, then Accept-Language primary tag, then default
//! - Header tags go through the legacy alias table first (`pt` → `br`)
//! - Only the first language range of the header is considered (no q-values)
//! - Pure function: same inputs always give the same locale

use crate::locale::settings::LocaleSettings;
use crate::locale::types::SupportedLocale;

/// Resolve the locale for a request.
pub fn resolve_locale(
    settings: &LocaleSettings,
    cookie_preferred_language: Option<&str>,
    accept_language: Option<&str>,
) -> SupportedLocale {
    if let Some(locale) = cookie_preferred_language.and_then(|v| settings.supported(v)) {
        return locale;
    }

    accept_language
        .map(primary_language)
        .and_then(|primary| header_locale(settings, &primary))
        .unwrap_or(settings.default_locale)
}

/// A locale that replaced a legacy code is only reachable through that code:
/// browsers send `pt`, never `br`.
fn header_locale(settings: &LocaleSettings, primary: &str) -> Option<SupportedLocale> {
    if let Some(locale) = settings.legacy_alias(primary) {
        return settings.supported(locale.as_str());
    }
    settings
        .supported(primary)
        .filter(|locale| !settings.legacy_aliases.iter().any(|(_, target)| target == locale))
}

/// `pt-BR,en;q=0.9` → `pt`.
fn primary_language(header: &str) -> String {
    let first = header.split(',').next().unwrap_or_default();
    let primary = first.split('-').next().unwrap_or_default();
    primary.trim().to_ascii_lowercase()
}
