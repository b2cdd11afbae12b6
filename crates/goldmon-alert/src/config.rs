use goldmon_common::MarketPeriod;
use serde::{Deserialize, Serialize};

/// Per-period notification thresholds plus the cross-cutting constants
/// shared by all periods. Rupee values are absolute changes per gram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_morning_rupees")]
    pub morning_rupees: f64,
    #[serde(default = "default_morning_percent")]
    pub morning_percent: f64,
    #[serde(default = "default_evening_rupees")]
    pub evening_rupees: f64,
    #[serde(default = "default_evening_percent")]
    pub evening_percent: f64,
    #[serde(default = "default_trading_rupees")]
    pub trading_rupees: f64,
    #[serde(default = "default_trading_percent")]
    pub trading_percent: f64,
    #[serde(default = "default_offhours_rupees")]
    pub offhours_rupees: f64,
    #[serde(default = "default_offhours_percent")]
    pub offhours_percent: f64,
    /// Micro-alert threshold, active only during morning/evening periods.
    #[serde(default = "default_micro_rupees")]
    pub micro_rupees: f64,
    /// Non-trading-day absolute threshold. The sensitivity multiplier is
    /// derived as `weekend_rupees / trading_rupees`.
    #[serde(default = "default_weekend_rupees")]
    pub weekend_rupees: f64,
    #[serde(default = "default_high_priority_rupees")]
    pub high_priority_rupees: f64,
    #[serde(default = "default_high_priority_percent")]
    pub high_priority_percent: f64,
    #[serde(default = "default_rapid_rupees")]
    pub rapid_rupees: f64,
    #[serde(default = "default_reversal_rupees")]
    pub reversal_rupees: f64,
}

fn default_morning_rupees() -> f64 {
    10.0
}
fn default_morning_percent() -> f64 {
    0.1
}
fn default_evening_rupees() -> f64 {
    10.0
}
fn default_evening_percent() -> f64 {
    0.1
}
fn default_trading_rupees() -> f64 {
    15.0
}
fn default_trading_percent() -> f64 {
    0.15
}
fn default_offhours_rupees() -> f64 {
    20.0
}
fn default_offhours_percent() -> f64 {
    0.2
}
fn default_micro_rupees() -> f64 {
    5.0
}
fn default_weekend_rupees() -> f64 {
    30.0
}
fn default_high_priority_rupees() -> f64 {
    25.0
}
fn default_high_priority_percent() -> f64 {
    0.5
}
fn default_rapid_rupees() -> f64 {
    5.0
}
fn default_reversal_rupees() -> f64 {
    5.0
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            morning_rupees: default_morning_rupees(),
            morning_percent: default_morning_percent(),
            evening_rupees: default_evening_rupees(),
            evening_percent: default_evening_percent(),
            trading_rupees: default_trading_rupees(),
            trading_percent: default_trading_percent(),
            offhours_rupees: default_offhours_rupees(),
            offhours_percent: default_offhours_percent(),
            micro_rupees: default_micro_rupees(),
            weekend_rupees: default_weekend_rupees(),
            high_priority_rupees: default_high_priority_rupees(),
            high_priority_percent: default_high_priority_percent(),
            rapid_rupees: default_rapid_rupees(),
            reversal_rupees: default_reversal_rupees(),
        }
    }
}

/// Alert rule feature flags and time windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default = "default_true")]
    pub enable_micro_alerts: bool,
    #[serde(default = "default_true")]
    pub enable_rapid_alerts: bool,
    #[serde(default = "default_true")]
    pub enable_trend_alerts: bool,
    #[serde(default = "default_true")]
    pub enable_stability_alerts: bool,
    #[serde(default = "default_true")]
    pub enable_weekend_reduced_sensitivity: bool,
    /// Two observations within this many minutes qualify for rapid
    /// movement detection.
    #[serde(default = "default_rapid_window_minutes")]
    pub rapid_window_minutes: f64,
    /// Minimum minutes of unchanged rate before a stability alert.
    #[serde(default = "default_stability_minutes")]
    pub stability_minutes: f64,
    /// History tail length inspected for trend-reversal analysis.
    #[serde(default = "default_trend_entries")]
    pub trend_entries: usize,
}

fn default_true() -> bool {
    true
}
fn default_rapid_window_minutes() -> f64 {
    20.0
}
fn default_stability_minutes() -> f64 {
    45.0
}
fn default_trend_entries() -> usize {
    3
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdConfig::default(),
            enable_micro_alerts: true,
            enable_rapid_alerts: true,
            enable_trend_alerts: true,
            enable_stability_alerts: true,
            enable_weekend_reduced_sensitivity: true,
            rapid_window_minutes: default_rapid_window_minutes(),
            stability_minutes: default_stability_minutes(),
            trend_entries: default_trend_entries(),
        }
    }
}

/// Periodic report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_true")]
    pub enable_hourly_reports: bool,
    /// Periods eligible for hourly reports.
    #[serde(default = "default_hourly_periods")]
    pub hourly_periods: Vec<MarketPeriod>,
    /// Reports fire within the first few minutes of the hour.
    #[serde(default = "default_report_minute_cutoff")]
    pub report_minute_cutoff: u32,
    #[serde(default = "default_true")]
    pub enable_daily_reports: bool,
    /// Local hour near end-of-day at which the daily summary fires.
    #[serde(default = "default_daily_report_hour")]
    pub daily_report_hour: u32,
}

fn default_hourly_periods() -> Vec<MarketPeriod> {
    vec![
        MarketPeriod::MorningRush,
        MarketPeriod::ActiveTrading,
        MarketPeriod::EveningUpdate,
    ]
}
fn default_report_minute_cutoff() -> u32 {
    5
}
fn default_daily_report_hour() -> u32 {
    19
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enable_hourly_reports: true,
            hourly_periods: default_hourly_periods(),
            report_minute_cutoff: default_report_minute_cutoff(),
            enable_daily_reports: true,
            daily_report_hour: default_daily_report_hour(),
        }
    }
}
