use std::path::Path;

use anyhow::Context;
use goldmon_alert::{AlertConfig, ReportConfig};
use goldmon_common::CalendarConfig;
use goldmon_notify::channels::ntfy::NtfyChannel;
use goldmon_notify::channels::pushover::PushoverChannel;
use goldmon_notify::channels::telegram::TelegramChannel;
use goldmon_notify::{Dispatcher, MessageStyle, NotificationChannel};
use goldmon_scrape::ScrapeConfig;
use serde::{Deserialize, Serialize};

fn default_history_cap() -> usize {
    500
}

/// Full tracker configuration. Every section and field has a default,
/// so an empty `{}` config file (or none at all) yields a working
/// setup; operators override only what they need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub alerts: AlertConfig,
    #[serde(default)]
    pub reports: ReportConfig,
    #[serde(default)]
    pub scrape: ScrapeConfig,
    #[serde(default)]
    pub style: MessageStyle,
    /// Maximum history entries retained on disk.
    #[serde(default = "default_history_cap")]
    pub history_cap: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            calendar: CalendarConfig::default(),
            alerts: AlertConfig::default(),
            reports: ReportConfig::default(),
            scrape: ScrapeConfig::default(),
            style: MessageStyle::default(),
            history_cap: default_history_cap(),
        }
    }
}

impl TrackerConfig {
    /// Loads the config from a JSON file, or the defaults when no path
    /// was given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing config file {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }
}

/// Notification credentials pulled from the environment. A channel is
/// configured only when all of its variables are present and non-empty;
/// anything missing silently disables that channel.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub telegram_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub pushover_token: Option<String>,
    pub pushover_user: Option<String>,
    pub ntfy_topic: Option<String>,
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            telegram_token: env_nonempty("TELEGRAM_BOT_TOKEN"),
            telegram_chat_id: env_nonempty("TELEGRAM_CHAT_ID"),
            pushover_token: env_nonempty("PUSHOVER_TOKEN"),
            pushover_user: env_nonempty("PUSHOVER_USER"),
            ntfy_topic: env_nonempty("NTFY_TOPIC"),
        }
    }
}

/// Builds the dispatcher from whichever channels have credentials.
pub fn build_dispatcher(credentials: &Credentials, style: &MessageStyle) -> Dispatcher {
    let mut channels: Vec<Box<dyn NotificationChannel>> = Vec::new();

    if let (Some(token), Some(chat_id)) = (
        credentials.telegram_token.as_deref(),
        credentials.telegram_chat_id.as_deref(),
    ) {
        channels.push(Box::new(TelegramChannel::new(token, chat_id)));
    }
    if let (Some(token), Some(user)) = (
        credentials.pushover_token.as_deref(),
        credentials.pushover_user.as_deref(),
    ) {
        channels.push(Box::new(PushoverChannel::new(token, user, &style.title)));
    }
    if let Some(topic) = credentials.ntfy_topic.as_deref() {
        channels.push(Box::new(NtfyChannel::new(topic, &style.title)));
    }

    if channels.is_empty() {
        tracing::warn!("no notification channels configured; alerts will only be logged");
    }
    Dispatcher::new(channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatcher_skips_partially_configured_channels() {
        let credentials = Credentials {
            telegram_token: Some("token".into()),
            telegram_chat_id: None,
            pushover_token: Some("app".into()),
            pushover_user: Some("user".into()),
            ntfy_topic: None,
        };
        let dispatcher = build_dispatcher(&credentials, &MessageStyle::default());
        assert_eq!(dispatcher.channel_count(), 1);
    }

    #[test]
    fn dispatcher_builds_all_three_channels() {
        let credentials = Credentials {
            telegram_token: Some("token".into()),
            telegram_chat_id: Some("chat".into()),
            pushover_token: Some("app".into()),
            pushover_user: Some("user".into()),
            ntfy_topic: Some("topic".into()),
        };
        let dispatcher = build_dispatcher(&credentials, &MessageStyle::default());
        assert_eq!(dispatcher.channel_count(), 3);
    }

    #[test]
    fn empty_credentials_build_an_empty_dispatcher() {
        let dispatcher = build_dispatcher(&Credentials::default(), &MessageStyle::default());
        assert!(dispatcher.is_empty());
    }

    #[test]
    fn empty_config_object_parses_to_defaults() {
        let config: TrackerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.history_cap, 500);
        assert_eq!(config.alerts.thresholds.morning_rupees, 10.0);
        assert!(config.reports.enable_hourly_reports);
    }

    #[test]
    fn config_file_overrides_selected_fields() {
        let raw = r#"{
            "history_cap": 100,
            "alerts": { "thresholds": { "trading_rupees": 25.0 } },
            "style": { "emoji": false }
        }"#;
        let config: TrackerConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.history_cap, 100);
        assert_eq!(config.alerts.thresholds.trading_rupees, 25.0);
        assert_eq!(config.alerts.thresholds.morning_rupees, 10.0);
        assert!(!config.style.emoji);
        assert!(config.style.period_context);
    }
}
