use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError,
    models::telegram::{LeadSubmission, TelegramConfig, UpdateTelegramSchema},
    notify::normalize_chat_id,
    state::AppState,
};

// GET /api/site/telegram
pub async fn get_telegram_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let config = state.telegram_config.load().await?;
    Ok(Json(json!({ "config": config })))
}

// PUT /api/site/telegram
// The stored config is replaced as a whole; absent fields fall back to their defaults.
pub async fn update_telegram_handler(
    State(state): State<AppState>,
    Json(body): Json<UpdateTelegramSchema>,
) -> Result<impl IntoResponse, AppError> {
    let config = TelegramConfig {
        enabled: body.enabled.unwrap_or(false),
        bot_token: body.bot_token.unwrap_or_default().trim().to_string(),
        chat_id: normalize_chat_id(&body.chat_id.unwrap_or_default()),
    };

    state.telegram_config.save(&config).await?;
    tracing::info!(enabled = config.enabled, chat_id = %config.chat_id, "telegram settings saved");
    Ok(Json(json!({ "ok": true, "config": config })))
}

// POST /api/site/telegram (public, used by the lead form)
pub async fn send_lead_handler(
    State(state): State<AppState>,
    Json(lead): Json<LeadSubmission>,
) -> Result<impl IntoResponse, AppError> {
    let config = state.telegram_config.load().await?;
    state.telegram.send(&config, &lead).await?;
    tracing::info!(source = lead.source.as_deref().unwrap_or("-"), "lead forwarded to telegram");
    Ok(Json(json!({ "ok": true })))
}
