//! Message composition for alerts, reports, and run errors.
//!
//! Bodies are plain text shared by every channel; emoji decoration sits
//! behind a style flag so the same templates serve minimal setups.

use goldmon_alert::AlertConfig;
use goldmon_common::{
    AlertDecision, AlertKind, Magnitude, MarketContext, MarketPeriod, Observation, TrendReport,
};
use serde::{Deserialize, Serialize};

/// Presentation options shared by all message kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageStyle {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_true")]
    pub emoji: bool,
    /// Append a period-context footer to change alerts.
    #[serde(default = "default_true")]
    pub period_context: bool,
}

fn default_title() -> String {
    "Kerala 24K Gold Tracker".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for MessageStyle {
    fn default() -> Self {
        Self {
            title: default_title(),
            emoji: true,
            period_context: true,
        }
    }
}

/// Which trailing window a trend report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSpan {
    Hourly,
    Daily,
}

fn direction_token(change: f64, emoji: bool) -> &'static str {
    if emoji {
        if change > 0.0 {
            "\u{1F4C8}"
        } else if change < 0.0 {
            "\u{1F4C9}"
        } else {
            "\u{27A1}\u{FE0F}"
        }
    } else if change > 0.0 {
        "UP"
    } else if change < 0.0 {
        "DOWN"
    } else {
        "STABLE"
    }
}

fn period_emoji(period: MarketPeriod) -> &'static str {
    match period {
        MarketPeriod::MorningRush => "\u{1F305}",
        MarketPeriod::EveningUpdate => "\u{1F306}",
        MarketPeriod::ActiveTrading => "\u{1F4CA}",
        MarketPeriod::OffHours => "\u{1F319}",
    }
}

fn type_label(decision: &AlertDecision, current: &Observation) -> String {
    match decision.kind {
        AlertKind::MainThreshold => {
            format!("{} ({})", decision.kind.label(), current.market_period.label())
        }
        AlertKind::TrendReversal => match decision.reversal {
            Some(reversal) => format!("{} ({})", decision.kind.label(), reversal),
            None => decision.kind.label().to_string(),
        },
        _ => decision.kind.label().to_string(),
    }
}

/// Body for a fired alert rule (everything except the initial run).
pub fn alert_message(
    decision: &AlertDecision,
    current: &Observation,
    previous: &Observation,
    style: &MessageStyle,
) -> String {
    let header_emoji = if style.emoji {
        format!("{} ", period_emoji(current.market_period))
    } else {
        String::new()
    };
    let direction = direction_token(decision.change, style.emoji);
    let time = current.local_time.format("%I:%M %p");
    let gap = decision.minutes_since_previous.unwrap_or(0.0);

    let mut body = if decision.change == 0.0 {
        format!(
            "{header_emoji}{title}\n\n\
             {direction} NO CHANGE for {gap:.0} minutes\n\
             Current: \u{20B9}{current_rate:.0}/g\n\
             Type: {kind}\n\
             Time: {time} IST",
            title = style.title,
            current_rate = current.rate,
            kind = type_label(decision, current),
        )
    } else {
        let magnitude = decision
            .magnitude
            .unwrap_or_else(|| Magnitude::from_change(decision.change));
        format!(
            "{header_emoji}{title}\n\n\
             {direction} {magnitude}: \u{20B9}{abs_change:.0} ({abs_percent:.2}%)\n\n\
             Previous: \u{20B9}{previous_rate:.0}/g\n\
             Current: \u{20B9}{current_rate:.0}/g\n\
             Change: \u{20B9}{change:+.0}\n\n\
             Type: {kind}\n\
             Gap: {gap:.0} min\n\
             Time: {time} IST",
            title = style.title,
            magnitude = magnitude.label(),
            abs_change = decision.change.abs(),
            abs_percent = decision.change_percent.abs(),
            previous_rate = previous.rate,
            current_rate = current.rate,
            change = decision.change,
            kind = type_label(decision, current),
        )
    };

    if style.period_context {
        body.push_str(&format!(
            "\n\nPeriod: {}",
            current.market_period.label()
        ));
    }
    body
}

/// Bootstrap notification for the very first run, summarizing the
/// configured thresholds and enabled rule families.
pub fn initial_message(
    current: &Observation,
    config: &AlertConfig,
    style: &MessageStyle,
) -> String {
    let header_emoji = if style.emoji { "\u{1F680} " } else { "" };
    let t = &config.thresholds;

    let on_off = |enabled: bool| if enabled { "enabled" } else { "disabled" };

    format!(
        "{header_emoji}{title} started\n\n\
         Current Rate: \u{20B9}{rate:.0}/g\n\
         Period: {period}\n\
         Time: {time} IST\n\
         Trading Day: {trading}\n\n\
         Thresholds:\n\
         - Morning Rush: >= \u{20B9}{morning:.0} ({morning_pct}%)\n\
         - Active Trading: >= \u{20B9}{trading_r:.0} ({trading_pct}%)\n\
         - Evening Update: >= \u{20B9}{evening:.0} ({evening_pct}%)\n\
         - Off Hours: >= \u{20B9}{offhours:.0} ({offhours_pct}%)\n\n\
         Features:\n\
         - Micro alerts: {micro} (>= \u{20B9}{micro_r:.0})\n\
         - Rapid movement: {rapid} (>= \u{20B9}{rapid_r:.0} in {rapid_w:.0}min)\n\
         - Trend reversals: {trend} (>= \u{20B9}{reversal_r:.0})\n\
         - Stability alerts: {stability} ({stability_m:.0}min)",
        title = style.title,
        rate = current.rate,
        period = current.market_period.label(),
        time = current.local_time.format("%d %b, %I:%M %p"),
        trading = if current.is_trading_day { "yes" } else { "no" },
        morning = t.morning_rupees,
        morning_pct = t.morning_percent,
        trading_r = t.trading_rupees,
        trading_pct = t.trading_percent,
        evening = t.evening_rupees,
        evening_pct = t.evening_percent,
        offhours = t.offhours_rupees,
        offhours_pct = t.offhours_percent,
        micro = on_off(config.enable_micro_alerts),
        micro_r = t.micro_rupees,
        rapid = on_off(config.enable_rapid_alerts),
        rapid_r = t.rapid_rupees,
        rapid_w = config.rapid_window_minutes,
        trend = on_off(config.enable_trend_alerts),
        reversal_r = t.reversal_rupees,
        stability = on_off(config.enable_stability_alerts),
        stability_m = config.stability_minutes,
    )
}

/// Best-effort error notification body for a failed run.
pub fn error_message(reason: &str, ctx: &MarketContext, style: &MessageStyle) -> String {
    let header_emoji = if style.emoji { "\u{274C} " } else { "" };
    format!(
        "{header_emoji}{title} error\n\n\
         {reason}\n\n\
         Period: {period}\n\
         Time: {time} IST\n\
         Will retry on next scheduled run.",
        title = style.title,
        period = ctx.period.label(),
        time = ctx.local_time.format("%I:%M %p"),
    )
}

/// Trend report body for the hourly or daily summary.
pub fn report_message(
    report: &TrendReport,
    span: ReportSpan,
    ctx: &MarketContext,
    style: &MessageStyle,
) -> String {
    let header_emoji = if style.emoji { "\u{1F4CA} " } else { "" };
    let (heading, when) = match span {
        ReportSpan::Hourly => (
            "Hourly Gold Trend Report",
            format!("Hour: {} IST", ctx.local_time.format("%I:00 %p")),
        ),
        ReportSpan::Daily => (
            "Daily Gold Summary",
            format!("Day: {}", ctx.local_time.format("%d %b %Y")),
        ),
    };

    format!(
        "{header_emoji}{heading}\n\n\
         {trend} {when}\n\n\
         Performance:\n\
         - Opening: \u{20B9}{open:.0}/g\n\
         - Closing: \u{20B9}{close:.0}/g\n\
         - High: \u{20B9}{high:.0}/g\n\
         - Low: \u{20B9}{low:.0}/g\n\
         - Change: \u{20B9}{change:+.0} ({percent:+.2}%)\n\
         - Volatility: \u{20B9}{volatility:.0}\n\n\
         Activity: {samples} updates\n\
         Period: {period}",
        trend = report.trend_label(),
        open = report.open,
        close = report.close,
        high = report.high,
        low = report.low,
        change = report.change,
        percent = report.change_percent,
        volatility = report.volatility,
        samples = report.samples,
        period = ctx.period.label(),
    )
}
