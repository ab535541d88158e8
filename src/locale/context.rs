//! Per-request routing input.

use axum::http::{header, HeaderMap};

/// The parts of a request the locale router looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Request path, without query string.
    pub path: String,
    /// Raw value of the preference cookie, if sent.
    pub cookie_preferred_language: Option<String>,
    /// Raw `Accept-Language` header, if sent.
    pub accept_language: Option<String>,
}

impl RequestContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_cookie(mut self, value: impl Into<String>) -> Self {
        self.cookie_preferred_language = Some(value.into());
        self
    }

    pub fn with_accept_language(mut self, value: impl Into<String>) -> Self {
        self.accept_language = Some(value.into());
        self
    }

    /// Extract the context from request headers.
    ///
    /// Non-UTF-8 header values are treated as absent.
    pub fn from_headers(path: &str, headers: &HeaderMap, cookie_name: &str) -> Self {
        let cookie_preferred_language = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(|raw| find_cookie(raw, cookie_name));

        let accept_language = headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Self {
            path: path.to_string(),
            cookie_preferred_language,
            accept_language,
        }
    }
}

/// Find `name` in a `Cookie` header value (`a=1; b=2`).
fn find_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
}
