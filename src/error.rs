//! Error type shared by every handler and store.
//!
//! Every failure the admin API can report ends up as an [`AppError`]; the
//! `IntoResponse` impl renders it as `{"error": "..."}` with the matching
//! status code so the dashboard can show the message as-is.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No session cookie on a protected route (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Wrong shared username/password (401)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing or malformed request fields (400)
    #[error("{0}")]
    Validation(String),

    /// Record not found (404)
    #[error("{0}")]
    NotFound(String),

    /// Record already exists (409)
    #[error("{0}")]
    Conflict(String),

    /// Telegram is disabled or lacks a token/chat (400)
    #[error("Telegram is not configured")]
    NotConfigured,

    /// Non-success answer from the upstream site API, passed through
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// Telegram rejected or never received the message (500)
    #[error("{0}")]
    Dispatch(String),

    /// Local file or database failure (500)
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) | AppError::NotConfigured => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Upstream { status, .. } => *status,
            AppError::Dispatch(_) | AppError::Storage(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Upstream {
            status: StatusCode::BAD_GATEWAY,
            message: format!("Upstream request failed: {e}"),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_taxonomy_to_status_codes() {
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NotConfigured.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Validation("Missing id".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Dispatch("chat not found".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let upstream = AppError::Upstream {
            status: StatusCode::CONFLICT,
            message: "exists".into(),
        };
        assert_eq!(upstream.status(), StatusCode::CONFLICT);
        assert_eq!(upstream.to_string(), "exists");
    }
}
