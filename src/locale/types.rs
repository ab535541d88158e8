//! Locale value types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A locale the frontend serves.
///
/// `En` is the default and canonical locale. `Br` replaced the legacy `pt`
/// code, which is only accepted as a URL alias and never parses here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLocale {
    #[default]
    En,
    Br,
    Es,
}

impl SupportedLocale {
    /// Every supported locale, in URL-matching order.
    pub const ALL: [SupportedLocale; 3] = [SupportedLocale::En, SupportedLocale::Br, SupportedLocale::Es];

    /// The URL segment and cookie value for this locale.
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedLocale::En => "en",
            SupportedLocale::Br => "br",
            SupportedLocale::Es => "es",
        }
    }
}

impl fmt::Display for SupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the supported locale codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl FromStr for SupportedLocale {
    type Err = UnsupportedLocale;

    /// Exact, case-sensitive match on the code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.as_str() == s)
            .ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}
