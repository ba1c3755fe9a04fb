//! Analysis handlers
//!
//! Transcript endpoints. A missing or null `text` is analyzed as the empty
//! string.

use axum::{extract::State, http::HeaderMap, response::Response, Json};
use serde::Deserialize;

use super::negotiate;
use crate::error::AppError;
use crate::report::{render_analysis, render_detection, render_gate};
use crate::AppState;

/// Request body for the /analyze endpoints
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// POST /analyze/context
///
/// Runs the domain gate only.
pub async fn analyze_context(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Response, AppError> {
    let gate = state.analysis_service.gate(body.text.as_deref())?;
    tracing::debug!(out_of_context = gate.is_out_of_context, "Context analyzed");
    Ok(negotiate(&headers, &gate, render_gate))
}

/// POST /analyze/workshop
///
/// Runs the ceremony classifier only.
pub async fn analyze_workshop(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Response, AppError> {
    let detection = state.analysis_service.classify(body.text.as_deref())?;
    tracing::debug!(ceremony = %detection.category, "Workshop classified");
    Ok(negotiate(&headers, &detection, render_detection))
}

/// POST /analyze
///
/// Full pipeline: gate, classifier, anti-patterns.
/// - Accept: application/json → JSON response
/// - Otherwise → Plain text (LLM-readable)
pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Response, AppError> {
    let analysis = state.analysis_service.analyze(body.text.as_deref()).await?;
    Ok(negotiate(&headers, &analysis, render_analysis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_missing_and_null_text() {
        let missing: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(missing.text.is_none());
        let null: AnalyzeRequest = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert!(null.text.is_none());
        let present: AnalyzeRequest = serde_json::from_str(r#"{"text": "hier"}"#).unwrap();
        assert_eq!(present.text.as_deref(), Some("hier"));
    }
}
