//! Unified error types for the Nova API
//!
//! - `DomainError`: failures of domain collaborators (catalog lookups)
//! - `ParseError`: invalid user-supplied identifiers
//! - `AppError`: application layer errors rendered as HTTP responses
//!
//! The detectors themselves are total and never produce errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Transcript too large: {actual} characters (max {max})")]
    PayloadTooLarge { actual: usize, max: usize },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::Unavailable(msg)) => {
                tracing::warn!("Catalog unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service unavailable",
                    None,
                )
            }
            AppError::PayloadTooLarge { .. } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "Transcript too large",
                Some(self.to_string()),
            ),
            AppError::Parse(msg) => (StatusCode::BAD_REQUEST, "Parse error", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

/// Parse errors for path and query identifiers
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unknown ceremony: {0}")]
    UnknownCeremony(String),
}

impl From<ParseError> for AppError {
    fn from(e: ParseError) -> Self {
        AppError::Parse(e.to_string())
    }
}
