//! Responses produced by the gateway itself.
//!
//! # Responsibilities
//! - Build 301/302 redirects with a `Location` header
//! - Map gateway-side failures to status codes
//!
//! # Design Decisions
//! - Redirect bodies are empty
//! - An unrepresentable target is a client error (400), never a panic
//! - Upstream connection failures result in 502 Bad Gateway

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// Redirect to `location` with the given status.
pub fn redirect(location: &str, status: StatusCode) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (status, [(header::LOCATION, value)]).into_response(),
        Err(_) => bad_request(),
    }
}

pub fn bad_request() -> Response {
    (StatusCode::BAD_REQUEST, "Invalid request path").into_response()
}

pub fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
}
