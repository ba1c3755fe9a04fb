//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.
//! Supports content negotiation: Accept: application/json for JSON, otherwise text/plain.

pub mod analyze;
pub mod ceremonies;

use axum::{
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub use analyze::{analyze, analyze_context, analyze_workshop};
pub use ceremonies::{get_anti_patterns, list_ceremonies};

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// JSON when requested, otherwise the plain-text rendering
fn negotiate<T: Serialize>(
    headers: &HeaderMap,
    value: &T,
    render: impl FnOnce(&T) -> String,
) -> Response {
    if wants_json(headers) {
        Json(value).into_response()
    } else {
        (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render(value),
        )
            .into_response()
    }
}
