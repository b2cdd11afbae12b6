use anyhow::{anyhow, Result};
use async_trait::async_trait;
use goldmon_common::Priority;

use crate::channels::REQUEST_TIMEOUT;
use crate::NotificationChannel;

/// ntfy.sh topic channel. The message is the request body; title,
/// priority, and tags travel as headers.
pub struct NtfyChannel {
    client: reqwest::Client,
    topic: String,
    title: String,
}

impl NtfyChannel {
    pub fn new(topic: &str, title: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            topic: topic.to_string(),
            title: title.to_string(),
        }
    }
}

pub(crate) fn ntfy_priority(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "min",
        Priority::Normal => "default",
        Priority::High => "high",
    }
}

#[async_trait]
impl NotificationChannel for NtfyChannel {
    async fn send(&self, message: &str, priority: Priority) -> Result<()> {
        let url = format!("https://ntfy.sh/{}", self.topic);
        let tags = if priority == Priority::High {
            "gold,fire,money"
        } else {
            "gold,chart_with_upwards_trend"
        };

        let response = self
            .client
            .post(&url)
            .body(message.to_string())
            .header("Title", &self.title)
            .header("Priority", ntfy_priority(priority))
            .header("Tags", tags)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("ntfy send failed: HTTP {status}"));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ntfy"
    }
}
