use serde::{Deserialize, Serialize};

use super::{chat_id::normalize_chat_id, message::format_lead};
use crate::{
    error::{AppError, AppResult},
    models::telegram::{LeadSubmission, TelegramConfig},
};

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

#[derive(Debug, Deserialize)]
struct BotApiError {
    description: Option<String>,
}

/// Posts leads to the Telegram Bot API. One attempt per call.
#[derive(Debug, Clone)]
pub struct TelegramDispatcher {
    http: reqwest::Client,
    api_base: String,
}

impl TelegramDispatcher {
    pub fn new(http: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
        }
    }

    /// Fails with [`AppError::NotConfigured`] before any network call when the
    /// integration is disabled or lacks a token or chat.
    pub async fn send(&self, config: &TelegramConfig, lead: &LeadSubmission) -> AppResult<()> {
        let chat_id = normalize_chat_id(&config.chat_id);
        let token = config.bot_token.trim();
        if !config.enabled || token.is_empty() || chat_id.is_empty() {
            return Err(AppError::NotConfigured);
        }

        let text = format_lead(lead);
        let url = format!("{}/bot{}/sendMessage", self.api_base, token);
        let response = self
            .http
            .post(url)
            .json(&SendMessage {
                chat_id: &chat_id,
                text: &text,
                parse_mode: "HTML",
            })
            .send()
            .await
            .map_err(|e| AppError::Dispatch(format!("Send failed: {}", e.without_url())))?;

        if !response.status().is_success() {
            let status = response.status();
            let description = response
                .json::<BotApiError>()
                .await
                .ok()
                .and_then(|body| body.description)
                .unwrap_or_else(|| "Send failed".to_string());
            tracing::warn!(status = status.as_u16(), %description, "telegram rejected message");
            return Err(AppError::Dispatch(description));
        }

        tracing::info!(chat = %chat_id, "lead sent to telegram");
        Ok(())
    }
}
