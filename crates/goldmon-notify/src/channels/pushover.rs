use anyhow::{anyhow, Result};
use async_trait::async_trait;
use goldmon_common::Priority;

use crate::channels::REQUEST_TIMEOUT;
use crate::NotificationChannel;

const API_URL: &str = "https://api.pushover.net/1/messages.json";

/// Pushover channel. Priorities map onto Pushover's -1/0/1 levels.
pub struct PushoverChannel {
    client: reqwest::Client,
    token: String,
    user: String,
    title: String,
}

impl PushoverChannel {
    pub fn new(token: &str, user: &str, title: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.to_string(),
            user: user.to_string(),
            title: title.to_string(),
        }
    }
}

pub(crate) fn pushover_priority(priority: Priority) -> i8 {
    match priority {
        Priority::Low => -1,
        Priority::Normal => 0,
        Priority::High => 1,
    }
}

#[async_trait]
impl NotificationChannel for PushoverChannel {
    async fn send(&self, message: &str, priority: Priority) -> Result<()> {
        let level = pushover_priority(priority).to_string();
        let params = [
            ("token", self.token.as_str()),
            ("user", self.user.as_str()),
            ("message", message),
            ("title", self.title.as_str()),
            ("priority", level.as_str()),
        ];

        let response = self
            .client
            .post(API_URL)
            .form(&params)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("pushover send failed: HTTP {status}"));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "pushover"
    }
}
