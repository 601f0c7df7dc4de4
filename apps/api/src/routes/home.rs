use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Static service description; does not touch the model.
pub async fn home_handler() -> Json<Value> {
    Json(json!({
        "message": "AI Job Recommendation API is running",
        "usage": "POST /recommend with JSON { 'skills': ['React', 'Node.js', 'Python'] }"
    }))
}
