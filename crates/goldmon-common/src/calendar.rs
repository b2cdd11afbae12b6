use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::types::{MarketContext, MarketPeriod};

/// Market hour boundaries and holiday calendar. Hours are half-open
/// `[start, end)` intervals on the local clock; any hour not covered by
/// the three named periods is off-hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_offset_hours")]
    pub offset_hours: i32,
    #[serde(default = "default_offset_minutes")]
    pub offset_minutes: i32,
    #[serde(default = "default_morning_start")]
    pub morning_start_hour: u32,
    #[serde(default = "default_morning_end")]
    pub morning_end_hour: u32,
    #[serde(default = "default_trading_start")]
    pub trading_start_hour: u32,
    #[serde(default = "default_trading_end")]
    pub trading_end_hour: u32,
    #[serde(default = "default_evening_start")]
    pub evening_start_hour: u32,
    #[serde(default = "default_evening_end")]
    pub evening_end_hour: u32,
    /// Non-trading dates formatted `YYYY-MM-DD`.
    #[serde(default)]
    pub holidays: BTreeSet<String>,
}

fn default_offset_hours() -> i32 {
    5
}
fn default_offset_minutes() -> i32 {
    30
}
fn default_morning_start() -> u32 {
    9
}
fn default_morning_end() -> u32 {
    11
}
fn default_trading_start() -> u32 {
    11
}
fn default_trading_end() -> u32 {
    18
}
fn default_evening_start() -> u32 {
    18
}
fn default_evening_end() -> u32 {
    19
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            offset_hours: default_offset_hours(),
            offset_minutes: default_offset_minutes(),
            morning_start_hour: default_morning_start(),
            morning_end_hour: default_morning_end(),
            trading_start_hour: default_trading_start(),
            trading_end_hour: default_trading_end(),
            evening_start_hour: default_evening_start(),
            evening_end_hour: default_evening_end(),
            holidays: BTreeSet::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("invalid timezone offset: {hours}h{minutes}m")]
    InvalidOffset { hours: i32, minutes: i32 },
}

/// Resolves an instant into a [`MarketContext`]: local time in the
/// target timezone, market period, and trading-day/holiday flags.
#[derive(Debug, Clone)]
pub struct MarketCalendar {
    offset: FixedOffset,
    config: CalendarConfig,
}

impl MarketCalendar {
    pub fn new(config: CalendarConfig) -> Result<Self, ClockError> {
        let secs = config.offset_hours * 3600 + config.offset_minutes * 60;
        let offset = FixedOffset::east_opt(secs).ok_or(ClockError::InvalidOffset {
            hours: config.offset_hours,
            minutes: config.offset_minutes,
        })?;
        Ok(Self { offset, config })
    }

    /// Classifies an instant. Total over all inputs once construction
    /// succeeded.
    pub fn resolve(&self, now: DateTime<Utc>) -> MarketContext {
        let local = now.with_timezone(&self.offset);
        let period = self.classify_period(local.hour());
        let is_holiday = self.is_holiday(local);
        let is_weekend = matches!(local.weekday(), Weekday::Sat | Weekday::Sun);

        MarketContext {
            observed_at: now,
            local_time: local,
            period,
            is_trading_day: !is_weekend && !is_holiday,
            is_holiday,
        }
    }

    /// Period selection over half-open hour intervals, first match in
    /// the order morning -> trading -> evening, else off-hours.
    pub fn classify_period(&self, hour: u32) -> MarketPeriod {
        let c = &self.config;
        if (c.morning_start_hour..c.morning_end_hour).contains(&hour) {
            MarketPeriod::MorningRush
        } else if (c.trading_start_hour..c.trading_end_hour).contains(&hour) {
            MarketPeriod::ActiveTrading
        } else if (c.evening_start_hour..c.evening_end_hour).contains(&hour) {
            MarketPeriod::EveningUpdate
        } else {
            MarketPeriod::OffHours
        }
    }

    fn is_holiday(&self, local: DateTime<FixedOffset>) -> bool {
        let date = local.format("%Y-%m-%d").to_string();
        self.config.holidays.contains(&date)
    }
}
