use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{FixedOffset, TimeZone, Utc};
use goldmon_alert::AlertConfig;
use goldmon_common::{
    AlertDecision, AlertKind, Magnitude, MarketContext, MarketPeriod, Observation, Priority,
    TrendReport,
};

use crate::channels::ntfy::ntfy_priority;
use crate::channels::pushover::pushover_priority;
use crate::dispatcher::Dispatcher;
use crate::message::{
    alert_message, error_message, initial_message, report_message, MessageStyle, ReportSpan,
};
use crate::NotificationChannel;

struct RecordingChannel {
    name: &'static str,
    fail: bool,
    sent: Arc<Mutex<Vec<(String, Priority)>>>,
}

impl RecordingChannel {
    fn new(name: &'static str, fail: bool) -> Self {
        Self {
            name,
            fail,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl NotificationChannel for RecordingChannel {
    async fn send(&self, message: &str, priority: Priority) -> Result<()> {
        if self.fail {
            return Err(anyhow!("provider unavailable"));
        }
        self.sent
            .lock()
            .unwrap()
            .push((message.to_string(), priority));
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
}

fn make_obs(rate: f64, period: MarketPeriod) -> Observation {
    let local = ist().with_ymd_and_hms(2025, 6, 2, 11, 15, 0).unwrap();
    Observation {
        rate,
        currency: "INR".to_string(),
        unit: "per gram".to_string(),
        purity: "24K".to_string(),
        location: "Kerala".to_string(),
        observed_at: local.with_timezone(&Utc),
        local_time: local,
        source: "test".to_string(),
        success: true,
        market_period: period,
        is_trading_day: true,
        is_holiday: false,
    }
}

fn make_ctx(period: MarketPeriod) -> MarketContext {
    let local = ist().with_ymd_and_hms(2025, 6, 2, 11, 15, 0).unwrap();
    MarketContext {
        observed_at: local.with_timezone(&Utc),
        local_time: local,
        period,
        is_trading_day: true,
        is_holiday: false,
    }
}

#[tokio::test]
async fn dispatch_continues_past_a_failing_channel() {
    let failing = Box::new(RecordingChannel::new("telegram", true));
    let working = Box::new(RecordingChannel::new("ntfy", false));
    let dispatcher = Dispatcher::new(vec![failing, working]);

    let outcomes = dispatcher.dispatch("rate moved", Priority::High).await;

    assert_eq!(outcomes.len(), 2);
    assert!(!outcomes[0].success);
    assert_eq!(outcomes[0].channel, "telegram");
    assert!(outcomes[1].success);
    assert_eq!(outcomes[1].channel, "ntfy");
}

#[tokio::test]
async fn dispatch_with_no_channels_is_a_no_op() {
    let dispatcher = Dispatcher::new(Vec::new());
    assert!(dispatcher.is_empty());
    let outcomes = dispatcher.dispatch("anything", Priority::Normal).await;
    assert!(outcomes.is_empty());
}

#[tokio::test]
async fn dispatch_passes_message_and_priority_through() {
    let channel = RecordingChannel::new("pushover", false);
    let sent = Arc::clone(&channel.sent);
    let dispatcher = Dispatcher::new(vec![Box::new(channel)]);

    dispatcher.dispatch("gold up", Priority::Low).await;

    let sent = sent.lock().unwrap();
    assert_eq!(sent.as_slice(), &[("gold up".to_string(), Priority::Low)]);
}

#[test]
fn provider_priority_maps() {
    assert_eq!(pushover_priority(Priority::Low), -1);
    assert_eq!(pushover_priority(Priority::Normal), 0);
    assert_eq!(pushover_priority(Priority::High), 1);

    assert_eq!(ntfy_priority(Priority::Low), "min");
    assert_eq!(ntfy_priority(Priority::Normal), "default");
    assert_eq!(ntfy_priority(Priority::High), "high");
}

#[test]
fn change_alert_includes_magnitude_and_rates() {
    let decision = AlertDecision {
        kind: AlertKind::MainThreshold,
        priority: Priority::High,
        magnitude: Some(Magnitude::Major),
        change: 60.0,
        change_percent: 1.0,
        minutes_since_previous: Some(30.0),
        reversal: None,
    };
    let previous = make_obs(6000.0, MarketPeriod::ActiveTrading);
    let current = make_obs(6060.0, MarketPeriod::ActiveTrading);
    let body = alert_message(&decision, &current, &previous, &MessageStyle::default());

    assert!(body.contains("MAJOR"));
    assert!(body.contains("Previous: \u{20B9}6000/g"));
    assert!(body.contains("Current: \u{20B9}6060/g"));
    assert!(body.contains("Change: \u{20B9}+60"));
    assert!(body.contains("Main Alert (Active Trading)"));
}

#[test]
fn stability_alert_uses_the_no_change_body() {
    let decision = AlertDecision {
        kind: AlertKind::Stability,
        priority: Priority::Low,
        magnitude: None,
        change: 0.0,
        change_percent: 0.0,
        minutes_since_previous: Some(50.0),
        reversal: None,
    };
    let previous = make_obs(6000.0, MarketPeriod::MorningRush);
    let current = make_obs(6000.0, MarketPeriod::MorningRush);
    let body = alert_message(&decision, &current, &previous, &MessageStyle::default());

    assert!(body.contains("NO CHANGE for 50 minutes"));
    assert!(body.contains("Rate Stability"));
}

#[test]
fn plain_style_has_no_emoji() {
    let style = MessageStyle {
        emoji: false,
        ..MessageStyle::default()
    };
    let decision = AlertDecision {
        kind: AlertKind::MicroMove,
        priority: Priority::Low,
        magnitude: None,
        change: 6.0,
        change_percent: 0.1,
        minutes_since_previous: Some(15.0),
        reversal: None,
    };
    let previous = make_obs(6000.0, MarketPeriod::MorningRush);
    let current = make_obs(6006.0, MarketPeriod::MorningRush);
    let body = alert_message(&decision, &current, &previous, &style);

    assert!(body.contains("UP MINOR"));
    assert!(!body.contains('\u{1F4C8}'));
}

#[test]
fn initial_message_summarizes_configuration() {
    let current = make_obs(6000.0, MarketPeriod::MorningRush);
    let body = initial_message(&current, &AlertConfig::default(), &MessageStyle::default());

    assert!(body.contains("Current Rate: \u{20B9}6000/g"));
    assert!(body.contains("Morning Rush: >= \u{20B9}10 (0.1%)"));
    assert!(body.contains("Micro alerts: enabled"));
    assert!(body.contains("Trading Day: yes"));
}

#[test]
fn error_message_names_the_period() {
    let ctx = make_ctx(MarketPeriod::OffHours);
    let body = error_message("no recognizable price found", &ctx, &MessageStyle::default());
    assert!(body.contains("no recognizable price found"));
    assert!(body.contains("Off Hours"));
    assert!(body.contains("Will retry on next scheduled run."));
}

#[test]
fn report_message_carries_window_aggregates() {
    let report = TrendReport {
        open: 6000.0,
        close: 6015.0,
        high: 6030.0,
        low: 5990.0,
        volatility: 40.0,
        change: 15.0,
        change_percent: 0.25,
        samples: 4,
    };
    let ctx = make_ctx(MarketPeriod::ActiveTrading);

    let hourly = report_message(&report, ReportSpan::Hourly, &ctx, &MessageStyle::default());
    assert!(hourly.contains("Hourly Gold Trend Report"));
    assert!(hourly.contains("BULLISH"));
    assert!(hourly.contains("Opening: \u{20B9}6000/g"));
    assert!(hourly.contains("Volatility: \u{20B9}40"));
    assert!(hourly.contains("Activity: 4 updates"));

    let daily = report_message(&report, ReportSpan::Daily, &ctx, &MessageStyle::default());
    assert!(daily.contains("Daily Gold Summary"));
    assert!(daily.contains("Day: 02 Jun 2025"));
}
