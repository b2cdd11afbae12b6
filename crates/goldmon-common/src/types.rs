use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Hour-of-day classification of the local market clock. Each period
/// carries its own notification thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketPeriod {
    MorningRush,
    ActiveTrading,
    EveningUpdate,
    OffHours,
}

impl MarketPeriod {
    /// Human-readable label used in notification bodies.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MorningRush => "Morning Rush",
            Self::ActiveTrading => "Active Trading",
            Self::EveningUpdate => "Evening Update",
            Self::OffHours => "Off Hours",
        }
    }
}

impl std::fmt::Display for MarketPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MorningRush => write!(f, "morning_rush"),
            Self::ActiveTrading => write!(f, "active_trading"),
            Self::EveningUpdate => write!(f, "evening_update"),
            Self::OffHours => write!(f, "off_hours"),
        }
    }
}

impl std::str::FromStr for MarketPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning_rush" => Ok(Self::MorningRush),
            "active_trading" => Ok(Self::ActiveTrading),
            "evening_update" => Ok(Self::EveningUpdate),
            "off_hours" => Ok(Self::OffHours),
            _ => Err(format!("unknown market period: {s}")),
        }
    }
}

/// Notification priority, ordered from lowest to highest.
///
/// Channels map these to their provider-specific levels (Pushover
/// -1/0/1, ntfy min/default/high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Normal => write!(f, "normal"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Which alert rule fired. The classifier evaluates these as an
/// ordered decision list, so at most one kind is produced per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    InitialRun,
    MainThreshold,
    MicroMove,
    RapidMovement,
    TrendReversal,
    Stability,
}

impl AlertKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InitialRun => "Tracker Started",
            Self::MainThreshold => "Main Alert",
            Self::MicroMove => "Micro Alert",
            Self::RapidMovement => "Rapid Movement",
            Self::TrendReversal => "Trend Reversal",
            Self::Stability => "Rate Stability",
        }
    }
}

/// Size bucket for a main-threshold change, keyed off `|change|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Magnitude {
    Major,
    Significant,
    Moderate,
    Minor,
}

impl Magnitude {
    /// Bucket breakpoints are 50/25/10 rupees.
    pub fn from_change(change: f64) -> Self {
        let abs = change.abs();
        if abs >= 50.0 {
            Self::Major
        } else if abs >= 25.0 {
            Self::Significant
        } else if abs >= 10.0 {
            Self::Moderate
        } else {
            Self::Minor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Major => "MAJOR",
            Self::Significant => "SIGNIFICANT",
            Self::Moderate => "MODERATE",
            Self::Minor => "MINOR",
        }
    }
}

/// Direction of a single rate step, used for trend-reversal analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn of_step(from: f64, to: f64) -> Self {
        if to > from {
            Self::Up
        } else {
            Self::Down
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// A detected trend reversal: the established direction and the
/// direction of the most recent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reversal {
    pub from: Direction,
    pub to: Direction,
}

impl std::fmt::Display for Reversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Market context for a single run: the resolved local time plus the
/// calendar classification. Computed once per invocation and threaded
/// through validate/classify/report as a parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketContext {
    pub observed_at: DateTime<Utc>,
    pub local_time: DateTime<FixedOffset>,
    pub period: MarketPeriod,
    pub is_trading_day: bool,
    pub is_holiday: bool,
}

/// A single validated rate observation. Immutable after construction;
/// the latest-slot is overwritten each run and history entries are only
/// ever appended and evicted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub rate: f64,
    pub currency: String,
    pub unit: String,
    pub purity: String,
    pub location: String,
    pub observed_at: DateTime<Utc>,
    pub local_time: DateTime<FixedOffset>,
    pub source: String,
    pub success: bool,
    pub market_period: MarketPeriod,
    pub is_trading_day: bool,
    pub is_holiday: bool,
}

/// Outcome of the alert classifier when a rule fires. `None` from the
/// classifier means no rule matched; the decision itself is never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertDecision {
    pub kind: AlertKind,
    pub priority: Priority,
    pub magnitude: Option<Magnitude>,
    /// Signed rupee change from the previous observation (0.0 on the
    /// initial run).
    pub change: f64,
    /// Signed percent change from the previous observation.
    pub change_percent: f64,
    pub minutes_since_previous: Option<f64>,
    pub reversal: Option<Reversal>,
}

/// Aggregates over a trailing window, produced by the periodic report
/// generator for hourly and daily summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    /// high - low over the window.
    pub volatility: f64,
    pub change: f64,
    pub change_percent: f64,
    pub samples: usize,
}

impl TrendReport {
    /// Trend label at a +-10 rupee breakpoint from the window open.
    pub fn trend_label(&self) -> &'static str {
        if self.change > 10.0 {
            "BULLISH"
        } else if self.change < -10.0 {
            "BEARISH"
        } else {
            "STABLE"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_ordering() {
        assert!(Priority::High > Priority::Normal);
        assert!(Priority::Normal > Priority::Low);
    }

    #[test]
    fn magnitude_buckets() {
        assert_eq!(Magnitude::from_change(60.0), Magnitude::Major);
        assert_eq!(Magnitude::from_change(-50.0), Magnitude::Major);
        assert_eq!(Magnitude::from_change(30.0), Magnitude::Significant);
        assert_eq!(Magnitude::from_change(-12.0), Magnitude::Moderate);
        assert_eq!(Magnitude::from_change(3.0), Magnitude::Minor);
    }

    #[test]
    fn market_period_round_trips_through_str() {
        for period in [
            MarketPeriod::MorningRush,
            MarketPeriod::ActiveTrading,
            MarketPeriod::EveningUpdate,
            MarketPeriod::OffHours,
        ] {
            let parsed: MarketPeriod = period.to_string().parse().unwrap();
            assert_eq!(parsed, period);
        }
    }

    #[test]
    fn trend_labels() {
        let mut report = TrendReport {
            open: 6000.0,
            close: 6015.0,
            high: 6020.0,
            low: 5995.0,
            volatility: 25.0,
            change: 15.0,
            change_percent: 0.25,
            samples: 4,
        };
        assert_eq!(report.trend_label(), "BULLISH");
        report.change = -15.0;
        assert_eq!(report.trend_label(), "BEARISH");
        report.change = 5.0;
        assert_eq!(report.trend_label(), "STABLE");
    }
}
