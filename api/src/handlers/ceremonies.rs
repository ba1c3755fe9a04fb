//! Ceremony catalog handlers

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
};

use super::negotiate;
use crate::domain::entities::CeremonyCategory;
use crate::error::AppError;
use crate::report::{render_anti_patterns, render_ceremonies};
use crate::AppState;

/// GET /ceremonies
pub async fn list_ceremonies(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let ceremonies = state.analysis_service.ceremonies().await?;
    Ok(negotiate(&headers, &ceremonies, |c| render_ceremonies(c)))
}

/// GET /anti-patterns/:ceremony
///
/// Accepts the display label ("Sprint Review", URL-encoded) or the id
/// ("sprint_review").
pub async fn get_anti_patterns(
    State(state): State<AppState>,
    Path(ceremony): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let category: CeremonyCategory = ceremony.parse()?;
    let anti_patterns = state.analysis_service.anti_patterns(category).await?;
    Ok(negotiate(&headers, &anti_patterns, |a| {
        render_anti_patterns(category, a)
    }))
}
