//! Path matching logic.
//!
//! # Responsibilities
//! - Match whole leading path segments (`/en`, `/en/...`)
//! - Match raw path prefixes (`/_next/static/...`)
//! - Match the locale suffix on post slugs (`/post/hello-es/`)
//! - Combine conditions with OR semantics
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - No regex: every matcher is a linear scan of the path
//! - Query strings never reach the matchers

/// Trait for matching request paths against conditions.
pub trait PathMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches `/{segment}` exactly or anything under `/{segment}/`.
#[derive(Debug, Clone)]
pub struct SegmentMatcher {
    segment: String,
}

impl SegmentMatcher {
    /// Create a matcher for a leading segment. Surrounding slashes are ignored.
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into().trim_matches('/').to_string(),
        }
    }
}

impl PathMatcher for SegmentMatcher {
    fn matches(&self, path: &str) -> bool {
        match path.strip_prefix('/').and_then(|p| p.strip_prefix(self.segment.as_str())) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Matches a raw path prefix.
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    prefix: String,
}

impl PrefixMatcher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl PathMatcher for PrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

/// Matches post paths whose last segment ends in `-{code}`, with or without
/// a trailing slash.
#[derive(Debug, Clone)]
pub struct LocaleSuffixMatcher {
    suffixes: Vec<String>,
}

impl LocaleSuffixMatcher {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            suffixes: codes.into_iter().map(|c| format!("-{}", c.as_ref())).collect(),
        }
    }
}

impl PathMatcher for LocaleSuffixMatcher {
    fn matches(&self, path: &str) -> bool {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        let last = trimmed.rsplit('/').next().unwrap_or_default();
        self.suffixes
            .iter()
            .any(|suffix| last.len() > suffix.len() && last.ends_with(suffix.as_str()))
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug, Default)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn PathMatcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn PathMatcher>>) -> Self {
        Self { matchers }
    }

    /// Build from a list of path patterns. A pattern ending in `/` is a raw
    /// prefix, anything else is a whole segment.
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matchers = patterns
            .into_iter()
            .map(|p| -> Box<dyn PathMatcher> {
                let p = p.as_ref();
                if p.ends_with('/') {
                    Box::new(PrefixMatcher::new(p))
                } else {
                    Box::new(SegmentMatcher::new(p))
                }
            })
            .collect();
        Self { matchers }
    }
}

impl PathMatcher for AnyMatcher {
    fn matches(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(path))
    }
}
