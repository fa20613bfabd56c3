use axum::{
    extract::{Json, State},
    response::IntoResponse,
};

use crate::{error::AppError, models::settings::AdminSettings, state::AppState};

// GET /api/settings
pub async fn get_settings_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.settings.load().await?))
}

// PUT /api/settings
pub async fn update_settings_handler(
    State(state): State<AppState>,
    Json(settings): Json<AdminSettings>,
) -> Result<impl IntoResponse, AppError> {
    state.settings.save(&settings).await?;
    Ok(Json(settings))
}
