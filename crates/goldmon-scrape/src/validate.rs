use goldmon_common::{MarketContext, Observation};

use crate::error::ScrapeError;
use crate::ScrapeConfig;

/// Turns a raw extracted rate into a stamped observation.
///
/// Rejects `None` (nothing recognizable in the page) and values outside
/// the plausible band; both guard the stored series against parsing
/// artifacts, so neither outcome may be persisted by callers.
pub fn validate(
    raw_rate: Option<f64>,
    ctx: &MarketContext,
    config: &ScrapeConfig,
) -> Result<Observation, ScrapeError> {
    let rate = raw_rate.ok_or(ScrapeError::ExtractionFailed)?;

    if rate < config.min_rate || rate > config.max_rate {
        return Err(ScrapeError::OutOfRange {
            rate,
            min: config.min_rate,
            max: config.max_rate,
        });
    }

    Ok(Observation {
        rate,
        currency: "INR".to_string(),
        unit: "per gram".to_string(),
        purity: "24K".to_string(),
        location: "Kerala".to_string(),
        observed_at: ctx.observed_at,
        local_time: ctx.local_time,
        source: config.url.clone(),
        success: true,
        market_period: ctx.period,
        is_trading_day: ctx.is_trading_day,
        is_holiday: ctx.is_holiday,
    })
}
