use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppError,
    state::AppState,
    utils::session::{expired_session_cookie, session_cookie},
};

#[derive(Debug, Default, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// POST /api/auth/login
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, AppError> {
    let config = &state.config;
    if payload.username != config.admin_user || payload.password != config.admin_pass {
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!(user = %payload.username, "admin logged in");
    Ok((jar.add(session_cookie()), Json(json!({ "ok": true }))))
}

// POST /api/auth/logout
pub async fn logout_handler(jar: CookieJar) -> impl IntoResponse {
    (jar.add(expired_session_cookie()), Json(json!({ "ok": true })))
}
