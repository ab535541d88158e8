//! Routing decision produced once per request.

use axum::http::StatusCode;
use serde::Serialize;

/// Redirect flavour. Legacy aliases are permanent, negotiation is temporary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RedirectStatus {
    /// 301 Moved Permanently.
    Permanent,
    /// 302 Found.
    Temporary,
}

impl RedirectStatus {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RedirectStatus::Permanent => StatusCode::MOVED_PERMANENTLY,
            RedirectStatus::Temporary => StatusCode::FOUND,
        }
    }
}

/// What the HTTP layer should do with a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RoutingDecision {
    /// Continue to the origin unchanged.
    PassThrough,
    /// Continue to the origin with a different path; the client URL stays as is.
    Rewrite { target: String },
    /// Answer with a redirect to `target`.
    Redirect { target: String, status: RedirectStatus },
}

impl RoutingDecision {
    /// Short label for logs and metrics.
    pub fn action(&self) -> &'static str {
        match self {
            RoutingDecision::PassThrough => "pass_through",
            RoutingDecision::Rewrite { .. } => "rewrite",
            RoutingDecision::Redirect { status: RedirectStatus::Permanent, .. } => "redirect_permanent",
            RoutingDecision::Redirect { status: RedirectStatus::Temporary, .. } => "redirect_temporary",
        }
    }

    /// Target path for rewrites and redirects.
    pub fn target(&self) -> Option<&str> {
        match self {
            RoutingDecision::PassThrough => None,
            RoutingDecision::Rewrite { target } | RoutingDecision::Redirect { target, .. } => Some(target),
        }
    }
}
