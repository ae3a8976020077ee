//! WhatsApp Gateway Notifier

use async_trait::async_trait;
use shared::{AppError, AppResult, ErrorCode};
use std::time::Duration;

use super::Notifier;

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts texts to an HTTP WhatsApp gateway.
///
/// The gateway contract is a JSON POST of `{ "phone": "...",
/// "message": "..." }` to the configured URL, with an optional bearer
/// token. Phone numbers must already be normalized digit strings.
#[derive(Debug, Clone)]
pub struct WhatsAppNotifier {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl WhatsAppNotifier {
    pub fn new(api_url: String, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            token,
        }
    }
}

#[async_trait]
impl Notifier for WhatsAppNotifier {
    async fn send_text(&self, phone: &str, body: &str) -> AppResult<()> {
        let mut request = self
            .client
            .post(&self.api_url)
            .json(&serde_json::json!({ "phone": phone, "message": body }))
            .timeout(SEND_TIMEOUT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| AppError::network(format!("WhatsApp gateway unreachable: {}", e)))?;

        if !resp.status().is_success() {
            return Err(AppError::with_message(
                ErrorCode::NotificationFailed,
                format!("WhatsApp gateway returned {}", resp.status()),
            ));
        }
        Ok(())
    }
}
