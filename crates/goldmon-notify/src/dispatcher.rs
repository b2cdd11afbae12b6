use goldmon_common::Priority;

use crate::NotificationChannel;

/// Per-channel delivery outcome, advisory only: this system never
/// retries failed deliveries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelOutcome {
    pub channel: &'static str,
    pub success: bool,
}

/// Fans a composed message out to every configured channel in turn.
pub struct Dispatcher {
    channels: Vec<Box<dyn NotificationChannel>>,
}

impl Dispatcher {
    pub fn new(channels: Vec<Box<dyn NotificationChannel>>) -> Self {
        Self { channels }
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Sends sequentially through each channel. A failing channel is
    /// logged and recorded; the remaining channels are still attempted.
    pub async fn dispatch(&self, message: &str, priority: Priority) -> Vec<ChannelOutcome> {
        let mut outcomes = Vec::with_capacity(self.channels.len());

        for channel in &self.channels {
            match channel.send(message, priority).await {
                Ok(()) => {
                    tracing::info!(channel = channel.name(), %priority, "notification sent");
                    outcomes.push(ChannelOutcome {
                        channel: channel.name(),
                        success: true,
                    });
                }
                Err(error) => {
                    tracing::error!(channel = channel.name(), %error, "notification failed");
                    outcomes.push(ChannelOutcome {
                        channel: channel.name(),
                        success: false,
                    });
                }
            }
        }

        outcomes
    }
}
