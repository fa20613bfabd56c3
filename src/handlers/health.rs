use axum::{response::IntoResponse, Json};
use serde_json::json;

// GET /health
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
