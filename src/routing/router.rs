//! Locale routing decisions.
//!
//! # Responsibilities
//! - Redirect legacy locale segments permanently
//! - Pass through paths that already carry a locale
//! - Rewrite or redirect unprefixed paths according to the resolved locale
//! - Report paths that bypass locale routing entirely
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Rules evaluated in fixed order, first match wins
//! - Legacy alias check runs before anything else, unconditionally
//! - Deterministic: same input always produces the same decision

use std::sync::Arc;

use crate::locale::{resolve_locale, LocaleSettings, RequestContext, SupportedLocale};
use crate::routing::decision::{RedirectStatus, RoutingDecision};
use crate::routing::matcher::{AnyMatcher, LocaleSuffixMatcher, PathMatcher, SegmentMatcher};

/// Compiled locale router.
#[derive(Debug)]
pub struct LocaleRouter {
    settings: Arc<LocaleSettings>,
    /// Paths handled without locale routing.
    excluded: AnyMatcher,
    /// `/{locale}` and `/{locale}/...` for every supported locale.
    prefixed: AnyMatcher,
    /// Post slugs carrying their own locale suffix.
    post_suffix: LocaleSuffixMatcher,
}

impl LocaleRouter {
    /// Compile matchers from the locale settings.
    pub fn new(settings: Arc<LocaleSettings>) -> Self {
        let excluded = AnyMatcher::from_patterns(settings.excluded_paths.iter());
        let prefixed = AnyMatcher::new(
            settings
                .locales
                .iter()
                .map(|l| -> Box<dyn PathMatcher> { Box::new(SegmentMatcher::new(l.as_str())) })
                .collect(),
        );
        let post_suffix = LocaleSuffixMatcher::new(settings.locales.iter().map(|l| l.as_str()));

        Self {
            settings,
            excluded,
            prefixed,
            post_suffix,
        }
    }

    pub fn settings(&self) -> &LocaleSettings {
        &self.settings
    }

    /// True for API routes, framework assets and the favicon.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.excluded.matches(path)
    }

    /// Resolve the locale for `ctx` and route its path.
    pub fn decide(&self, ctx: &RequestContext) -> (SupportedLocale, RoutingDecision) {
        let locale = resolve_locale(
            &self.settings,
            ctx.cookie_preferred_language.as_deref(),
            ctx.accept_language.as_deref(),
        );
        (locale, self.route(&ctx.path, locale))
    }

    /// Route a path given an already resolved locale.
    pub fn route(&self, path: &str, locale: SupportedLocale) -> RoutingDecision {
        if let Some(target) = self.legacy_target(path) {
            return RoutingDecision::Redirect {
                target,
                status: RedirectStatus::Permanent,
            };
        }

        if self.prefixed.matches(path) || self.post_suffix.matches(path) {
            return RoutingDecision::PassThrough;
        }

        let target = format!("/{}{}", locale.as_str(), path);
        if locale == self.settings.default_locale {
            RoutingDecision::Rewrite { target }
        } else {
            RoutingDecision::Redirect {
                target,
                status: RedirectStatus::Temporary,
            }
        }
    }

    /// `/pt/artigo` → `/br/artigo`, `/pt` → `/br`.
    fn legacy_target(&self, path: &str) -> Option<String> {
        let rest = path.strip_prefix('/')?;
        let (segment, tail) = match rest.find('/') {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        };
        let replacement = self.settings.legacy_alias(segment)?;
        Some(format!("/{}{}", replacement.as_str(), tail))
    }
}
