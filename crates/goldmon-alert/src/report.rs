use goldmon_common::{MarketContext, Observation, TrendReport};

use crate::config::ReportConfig;

/// Summarizes a chronological window of observations. Returns `None`
/// when the window holds fewer than two entries, since a single sample
/// has no spread to report.
pub fn summarize(window: &[Observation]) -> Option<TrendReport> {
    if window.len() < 2 {
        return None;
    }

    let open = window.first()?.rate;
    let close = window.last()?.rate;
    let high = window.iter().map(|obs| obs.rate).fold(f64::MIN, f64::max);
    let low = window.iter().map(|obs| obs.rate).fold(f64::MAX, f64::min);
    let change = close - open;
    let change_percent = if open > 0.0 { (change / open) * 100.0 } else { 0.0 };

    Some(TrendReport {
        open,
        close,
        high,
        low,
        volatility: high - low,
        change,
        change_percent,
        samples: window.len(),
    })
}

/// Returns the `YYYY-MM-DD-HH` marker key when an hourly report is due:
/// reports enabled, current period eligible, within the first minutes
/// of the hour, and not already sent for this exact hour.
pub fn hourly_due(
    ctx: &MarketContext,
    config: &ReportConfig,
    last_marker: Option<&str>,
) -> Option<String> {
    if !config.enable_hourly_reports {
        return None;
    }
    if !config.hourly_periods.contains(&ctx.period) {
        return None;
    }

    use chrono::Timelike;
    if ctx.local_time.minute() > config.report_minute_cutoff {
        return None;
    }

    let key = ctx.local_time.format("%Y-%m-%d-%H").to_string();
    if last_marker == Some(key.as_str()) {
        return None;
    }
    Some(key)
}

/// Returns the `YYYY-MM-DD` marker key when the end-of-day summary is
/// due. Same idempotency mechanism as [`hourly_due`], keyed by date.
pub fn daily_due(
    ctx: &MarketContext,
    config: &ReportConfig,
    last_marker: Option<&str>,
) -> Option<String> {
    if !config.enable_daily_reports {
        return None;
    }

    use chrono::Timelike;
    if ctx.local_time.hour() != config.daily_report_hour {
        return None;
    }

    let key = ctx.local_time.format("%Y-%m-%d").to_string();
    if last_marker == Some(key.as_str()) {
        return None;
    }
    Some(key)
}
