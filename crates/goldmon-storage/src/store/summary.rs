use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use goldmon_common::MarketPeriod;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::write_atomic;

/// Thresholds that were active for the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveThresholds {
    pub rupees: f64,
    pub percent: f64,
    pub micro_rupees: f64,
}

/// Feature flags that were enabled for the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub micro_alerts: bool,
    pub rapid_alerts: bool,
    pub trend_alerts: bool,
    pub stability_alerts: bool,
    pub hourly_reports: bool,
    pub weekend_reduced_sensitivity: bool,
}

/// Last-run metadata written for external observability
/// (`config_summary.json`). Never read back by the core logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub last_updated: DateTime<Utc>,
    pub active_thresholds: ActiveThresholds,
    pub features: FeatureFlags,
    pub market_period: MarketPeriod,
    pub is_trading_day: bool,
    pub is_holiday: bool,
}

/// Write-only store for the run summary.
#[derive(Debug, Clone)]
pub struct SummaryStore {
    path: PathBuf,
}

impl SummaryStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("config_summary.json"),
        }
    }

    pub fn save(&self, summary: &RunSummary) -> Result<()> {
        let json = serde_json::to_string_pretty(summary)?;
        write_atomic(&self.path, json.as_bytes())
    }
}
