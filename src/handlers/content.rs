use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppError,
    models::{
        content::{ContentSection, SiteContent},
        lang::Lang,
    },
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct ContentBody {
    pub content: SiteContent,
}

// GET /api/site/content
pub async fn get_content_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let content = state.content.load().await?;
    Ok(Json(json!({ "content": content })))
}

// PUT /api/site/content (whole tree)
pub async fn replace_content_handler(
    State(state): State<AppState>,
    Json(body): Json<ContentBody>,
) -> Result<impl IntoResponse, AppError> {
    state.content.save(&body.content).await?;
    tracing::info!("content saved");
    Ok(Json(json!({ "ok": true })))
}

// PUT /api/site/content/:lang
// Replaces one section of one language on top of the current document and
// writes the whole document back. Concurrent editors: last write wins.
pub async fn update_section_handler(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Json(section): Json<ContentSection>,
) -> Result<impl IntoResponse, AppError> {
    let lang: Lang = lang.parse().map_err(AppError::Validation)?;

    let mut content = state.content.load().await?;
    content.apply(lang, section);
    state.content.save(&content).await?;

    tracing::info!(%lang, "content section saved");
    Ok(Json(json!({ "ok": true, "content": content })))
}
