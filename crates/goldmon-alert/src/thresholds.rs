use goldmon_common::MarketPeriod;

use crate::config::AlertConfig;

/// Thresholds active for one run, derived from configuration plus the
/// current market context. Never stored; recomputed each invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSet {
    /// Absolute rupee change required for a main alert.
    pub rupees: f64,
    /// Percent change required for a main alert.
    pub percent: f64,
    /// Absolute rupee change required for a micro alert. Infinite when
    /// micro alerts do not apply to the current period.
    pub micro_rupees: f64,
}

impl ThresholdSet {
    /// Resolves the thresholds for `period` on a day with the given
    /// trading/holiday flags.
    ///
    /// On non-trading days (weekends or holidays) with reduced
    /// sensitivity enabled, the rupee and percent thresholds are scaled
    /// by `weekend_rupees / trading_rupees`. The trading-period rupee
    /// threshold is the denominator for every period, including those
    /// whose base threshold differs from the trading row; callers rely
    /// on this exact ratio.
    pub fn resolve(
        period: MarketPeriod,
        is_trading_day: bool,
        is_holiday: bool,
        config: &AlertConfig,
    ) -> Self {
        let t = &config.thresholds;

        let multiplier = if (!is_trading_day || is_holiday)
            && config.enable_weekend_reduced_sensitivity
        {
            t.weekend_rupees / t.trading_rupees
        } else {
            1.0
        };

        let (rupees, percent) = match period {
            MarketPeriod::MorningRush => (t.morning_rupees, t.morning_percent),
            MarketPeriod::ActiveTrading => (t.trading_rupees, t.trading_percent),
            MarketPeriod::EveningUpdate => (t.evening_rupees, t.evening_percent),
            MarketPeriod::OffHours => (t.offhours_rupees, t.offhours_percent),
        };

        let micro_rupees = if config.enable_micro_alerts
            && matches!(period, MarketPeriod::MorningRush | MarketPeriod::EveningUpdate)
        {
            t.micro_rupees
        } else {
            f64::INFINITY
        };

        Self {
            rupees: rupees * multiplier,
            percent: percent * multiplier,
            micro_rupees,
        }
    }
}
