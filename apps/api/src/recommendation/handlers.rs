//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};
use bytes::Bytes;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::recommendation::models::RecommendationResult;
use crate::recommendation::validator::validate_request;
use crate::state::AppState;

/// POST /recommend
///
/// Body `{"skills": [string, ...]}`. Validation failures are 400s. Model and parsing
/// failures come back as 200 with an `error` object.
pub async fn handle_recommend(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RecommendationResult>, AppError> {
    // Unparseable bodies are treated like absent ones
    let parsed: Option<Value> = serde_json::from_slice(&body).ok();

    let skills = validate_request(parsed.as_ref())?;

    let result = state.generator.recommend(&skills).await;
    info!(success = result.is_success(), "Recommendation request completed");

    Ok(Json(result))
}
