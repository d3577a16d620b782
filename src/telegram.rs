use serde::Deserialize;

use crate::error::{AppError, Result};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

/// Delivers notification texts through the Telegram Bot API.
///
/// The recipient ID doubles as the Telegram chat ID, so the bot must have
/// an open chat with the recipient before delivery can succeed.
#[derive(Clone)]
pub struct TelegramNotifier {
    http: reqwest::Client,
    token: String,
}

impl TelegramNotifier {
    pub fn new(token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
        }
    }

    pub async fn send_notification(&self, recipient_id: i64, text: &str) -> Result<()> {
        let url = format!("{TELEGRAM_API_BASE}/bot{}/sendMessage", self.token);

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "chat_id": recipient_id,
                "text": text,
            }))
            .send()
            .await
            .map_err(|e| AppError::Delivery(format!("telegram request failed: {e}")))?;

        let body: SendMessageResponse = response
            .json()
            .await
            .map_err(|e| AppError::Delivery(format!("telegram response unreadable: {e}")))?;

        if !body.ok {
            return Err(AppError::Delivery(
                body.description
                    .unwrap_or_else(|| "telegram rejected the message".to_string()),
            ));
        }

        Ok(())
    }
}
