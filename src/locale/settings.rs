//! Build-time locale constants.
//!
//! # Responsibilities
//! - Hold the supported locale list, default locale and legacy aliases
//! - Name the preference cookie and the rewrite marker header
//! - List path prefixes that bypass locale routing
//! - Map CMS locale tags to frontend locales
//!
//! # Design Decisions
//! - Read-only value constructed once and shared via `Arc`
//! - Not part of the runtime TOML config: changing a locale is a code change

use crate::locale::types::SupportedLocale;

/// Cookie carrying a previously resolved locale.
pub const PREFERRED_LANGUAGE_COOKIE: &str = "preferredLanguage";

/// Header carrying the un-prefixed path on internal rewrites.
pub const ORIGINAL_PATHNAME_HEADER: &str = "x-original-pathname";

/// Locale configuration shared by the resolver, router and content filter.
#[derive(Debug, Clone)]
pub struct LocaleSettings {
    /// Locales the frontend serves.
    pub locales: Vec<SupportedLocale>,

    /// Locale served without a URL prefix in its logical form.
    pub default_locale: SupportedLocale,

    /// Deprecated URL segments and the locale that replaced them.
    pub legacy_aliases: Vec<(&'static str, SupportedLocale)>,

    /// Name of the preference cookie.
    pub cookie_name: &'static str,

    /// Header set on rewritten requests.
    pub marker_header: &'static str,

    /// Paths that never go through locale routing.
    /// An entry ending in `/` matches by prefix, otherwise by segment.
    pub excluded_paths: Vec<&'static str>,

    /// CMS locale tag (lowercase) to frontend locale.
    pub cms_locales: Vec<(&'static str, SupportedLocale)>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            locales: SupportedLocale::ALL.to_vec(),
            default_locale: SupportedLocale::En,
            legacy_aliases: vec![("pt", SupportedLocale::Br)],
            cookie_name: PREFERRED_LANGUAGE_COOKIE,
            marker_header: ORIGINAL_PATHNAME_HEADER,
            excluded_paths: vec!["/api", "/_next/static/", "/_next/image/", "/favicon.ico"],
            cms_locales: vec![
                ("en", SupportedLocale::En),
                ("en-us", SupportedLocale::En),
                ("en-gb", SupportedLocale::En),
                ("pt", SupportedLocale::Br),
                ("pt-br", SupportedLocale::Br),
                ("pt-pt", SupportedLocale::Br),
                ("es", SupportedLocale::Es),
                ("es-es", SupportedLocale::Es),
                ("es-419", SupportedLocale::Es),
                ("es-mx", SupportedLocale::Es),
            ],
        }
    }
}

impl LocaleSettings {
    /// Returns the supported locale named by `code`, if any.
    pub fn supported(&self, code: &str) -> Option<SupportedLocale> {
        self.locales.iter().copied().find(|l| l.as_str() == code)
    }

    /// Returns the replacement locale for a legacy URL segment.
    pub fn legacy_alias(&self, segment: &str) -> Option<SupportedLocale> {
        self.legacy_aliases
            .iter()
            .find(|(alias, _)| *alias == segment)
            .map(|(_, locale)| *locale)
    }

    /// Maps a CMS locale tag to a frontend locale (case-insensitive).
    pub fn cms_locale(&self, tag: &str) -> Option<SupportedLocale> {
        let tag = tag.trim().to_ascii_lowercase();
        self.cms_locales
            .iter()
            .find(|(cms, _)| *cms == tag)
            .map(|(_, locale)| *locale)
    }
}
