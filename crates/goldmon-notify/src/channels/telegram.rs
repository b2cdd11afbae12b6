use anyhow::{anyhow, Result};
use async_trait::async_trait;
use goldmon_common::Priority;

use crate::channels::REQUEST_TIMEOUT;
use crate::NotificationChannel;

/// Telegram bot channel (Bot API `sendMessage`).
pub struct TelegramChannel {
    client: reqwest::Client,
    token: String,
    chat_id: String,
}

impl TelegramChannel {
    pub fn new(token: &str, chat_id: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.to_string(),
            chat_id: chat_id.to_string(),
        }
    }
}

#[async_trait]
impl NotificationChannel for TelegramChannel {
    async fn send(&self, message: &str, _priority: Priority) -> Result<()> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);
        let params = [("chat_id", self.chat_id.as_str()), ("text", message)];

        let response = self
            .client
            .post(&url)
            .form(&params)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("telegram send failed: HTTP {status}"));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "telegram"
    }
}
