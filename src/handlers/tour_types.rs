use axum::{
    extract::{Json, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppError,
    models::tour_type::{default_tour_types, TourTypeItem},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub code: Option<String>,
}

// GET /api/site/tour-types
// An empty registry is seeded with the default types, one at a time.
pub async fn list_tour_types_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut items = state.tour_types.list().await?;

    if items.is_empty() {
        for item in default_tour_types() {
            if let Err(e) = state.tour_types.create(&item).await {
                tracing::warn!(code = %item.code, error = %e, "could not seed tour type");
            }
        }
        items = state.tour_types.list().await?;
    }

    Ok(Json(json!({ "items": items })))
}

// POST /api/site/tour-types
pub async fn create_tour_type_handler(
    State(state): State<AppState>,
    Json(item): Json<TourTypeItem>,
) -> Result<impl IntoResponse, AppError> {
    item.validate().map_err(AppError::Validation)?;
    state.tour_types.create(&item).await?;
    Ok(Json(json!({ "ok": true, "item": item })))
}

// PUT /api/site/tour-types
pub async fn update_tour_type_handler(
    State(state): State<AppState>,
    Json(item): Json<TourTypeItem>,
) -> Result<impl IntoResponse, AppError> {
    item.validate().map_err(AppError::Validation)?;
    state.tour_types.update(&item).await?;
    Ok(Json(json!({ "ok": true, "item": item })))
}

// DELETE /api/site/tour-types?code=...
pub async fn delete_tour_type_handler(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let code = query
        .code
        .filter(|code| !code.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing code".to_string()))?;
    state.tour_types.delete(&code).await?;
    Ok(Json(json!({ "ok": true })))
}
