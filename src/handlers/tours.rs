use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    editor::form::{FormView, TourForm},
    error::AppError,
    models::{lang::Lang, tour::Tour},
    state::AppState,
};

const REQUIRED_FIELDS: [&str; 7] = [
    "start_date",
    "end_date",
    "adults_min",
    "adults_max",
    "price_from",
    "nights",
    "image_url",
];

const LOCALIZED_FIELDS: [&str; 3] = ["title", "country", "city"];

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditQuery {
    pub lang: Option<Lang>,
}

// GET /api/site/tours
pub async fn list_tours_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = state.tours.list().await?;
    Ok(Json(json!({ "items": items })))
}

// POST /api/site/tours
pub async fn create_tour_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let tour = prepare_payload(body)?;
    state.tours.create(&tour).await?;
    tracing::info!(id = %tour.id, "tour created");
    Ok((StatusCode::OK, Json(json!({ "ok": true, "item": tour }))))
}

// PUT /api/site/tours
// The id of an existing tour never changes, so it is required as sent.
pub async fn update_tour_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    require_id(&body)?;
    let tour = prepare_payload(body)?;
    state.tours.update(&tour).await?;
    tracing::info!(id = %tour.id, "tour updated");
    Ok(Json(json!({ "ok": true, "item": tour })))
}

// DELETE /api/site/tours?id=...
pub async fn delete_tour_handler(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = query
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing id".to_string()))?;
    state.tours.delete(&id).await?;
    tracing::info!(%id, "tour deleted");
    Ok(Json(json!({ "ok": true })))
}

// GET /api/site/tours/:id/edit?lang=ru
pub async fn edit_form_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<EditQuery>,
) -> Result<impl IntoResponse, AppError> {
    let tour = state
        .tours
        .list()
        .await?
        .into_iter()
        .find(|tour| tour.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Tour {id} not found")))?;

    let mut form = TourForm::open(&tour);
    if let Some(lang) = query.lang {
        form.switch_lang(lang);
    }
    Ok(Json(FormView::from(&form)))
}

/// Checks the raw body for required keys, then derives the id and untagged
/// fields. Nothing reaches the store when a field is missing.
fn prepare_payload(body: Value) -> Result<Tour, AppError> {
    let mut missing = missing_fields(&body);
    let mut tour: Tour =
        serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))?;
    tour.prepare_for_save();

    if tour.id.is_empty() {
        missing.insert(0, "Missing id".to_string());
    }
    if !missing.is_empty() {
        return Err(AppError::Validation(missing.join(", ")));
    }
    Ok(tour)
}

fn require_id(body: &Value) -> Result<(), AppError> {
    match body.get("id").and_then(Value::as_str) {
        Some(id) if !id.trim().is_empty() => Ok(()),
        _ => Err(AppError::Validation("Missing id".to_string())),
    }
}

fn missing_fields(body: &Value) -> Vec<String> {
    let present = |key: &str| body.get(key).is_some_and(|v| !v.is_null());

    let localized = LOCALIZED_FIELDS.iter().filter(|field| {
        let tagged = Lang::ALL
            .iter()
            .any(|lang| present(&format!("{field}_{}", lang.as_str())));
        !(present(field) || tagged)
    });

    localized
        .chain(REQUIRED_FIELDS.iter().filter(|key| !present(key)))
        .map(|key| format!("Missing {key}"))
        .collect()
}
