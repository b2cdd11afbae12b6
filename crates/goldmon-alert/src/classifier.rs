use goldmon_common::{
    AlertDecision, AlertKind, Direction, Magnitude, MarketPeriod, Observation, Priority, Reversal,
};

use crate::config::AlertConfig;
use crate::thresholds::ThresholdSet;

/// Decides whether the current observation warrants an alert.
///
/// Evaluated as an ordered decision list; the first matching rule wins
/// and later rules are skipped. `history` is the stored sequence
/// *excluding* `current` (its tail feeds trend-reversal analysis).
/// Returns `None` when no rule fires.
pub fn classify(
    current: &Observation,
    previous: Option<&Observation>,
    history: &[Observation],
    thresholds: &ThresholdSet,
    config: &AlertConfig,
) -> Option<AlertDecision> {
    let Some(previous) = previous else {
        // Bootstrap notification on the very first run.
        return Some(AlertDecision {
            kind: AlertKind::InitialRun,
            priority: Priority::Normal,
            magnitude: None,
            change: 0.0,
            change_percent: 0.0,
            minutes_since_previous: None,
            reversal: None,
        });
    };

    let change = current.rate - previous.rate;
    let change_percent = if previous.rate > 0.0 {
        (change / previous.rate) * 100.0
    } else {
        0.0
    };
    let minutes = (current.observed_at - previous.observed_at).num_seconds() as f64 / 60.0;

    // Rule 2: main threshold.
    if change.abs() >= thresholds.rupees || change_percent.abs() >= thresholds.percent {
        let t = &config.thresholds;
        let priority = if change.abs() >= t.high_priority_rupees
            || change_percent.abs() >= t.high_priority_percent
        {
            Priority::High
        } else {
            Priority::Normal
        };
        return Some(AlertDecision {
            kind: AlertKind::MainThreshold,
            priority,
            magnitude: Some(Magnitude::from_change(change)),
            change,
            change_percent,
            minutes_since_previous: Some(minutes),
            reversal: None,
        });
    }

    // Rule 3: micro alert. The resolved micro threshold is infinite
    // outside morning/evening periods, so the period check lives in
    // the resolver.
    if config.enable_micro_alerts && change.abs() >= thresholds.micro_rupees {
        return Some(AlertDecision {
            kind: AlertKind::MicroMove,
            priority: Priority::Low,
            magnitude: None,
            change,
            change_percent,
            minutes_since_previous: Some(minutes),
            reversal: None,
        });
    }

    // Rule 4: rapid movement inside a short window.
    if config.enable_rapid_alerts
        && minutes <= config.rapid_window_minutes
        && change.abs() >= config.thresholds.rapid_rupees
    {
        return Some(AlertDecision {
            kind: AlertKind::RapidMovement,
            priority: Priority::High,
            magnitude: None,
            change,
            change_percent,
            minutes_since_previous: Some(minutes),
            reversal: None,
        });
    }

    // Rule 5: trend reversal at the most recent step.
    if config.enable_trend_alerts && change.abs() >= config.thresholds.reversal_rupees {
        if let Some(reversal) = detect_reversal(current.rate, history, config.trend_entries) {
            return Some(AlertDecision {
                kind: AlertKind::TrendReversal,
                priority: Priority::Normal,
                magnitude: None,
                change,
                change_percent,
                minutes_since_previous: Some(minutes),
                reversal: Some(reversal),
            });
        }
    }

    // Rule 6: stability during active announcement periods.
    if config.enable_stability_alerts
        && change == 0.0
        && minutes >= config.stability_minutes
        && matches!(
            current.market_period,
            MarketPeriod::MorningRush | MarketPeriod::EveningUpdate
        )
    {
        return Some(AlertDecision {
            kind: AlertKind::Stability,
            priority: Priority::Low,
            magnitude: None,
            change,
            change_percent,
            minutes_since_previous: Some(minutes),
            reversal: None,
        });
    }

    None
}

/// Looks for a direction flip at the latest step: the last
/// `trend_entries` stored rates plus `current_rate` give a run of
/// pairwise directions, and a reversal means the two directions before
/// the final step agree while the final step disagrees.
fn detect_reversal(
    current_rate: f64,
    history: &[Observation],
    trend_entries: usize,
) -> Option<Reversal> {
    if history.len() < trend_entries {
        return None;
    }

    let mut rates: Vec<f64> = history[history.len() - trend_entries..]
        .iter()
        .map(|obs| obs.rate)
        .collect();
    rates.push(current_rate);

    let directions: Vec<Direction> = rates
        .windows(2)
        .map(|pair| Direction::of_step(pair[0], pair[1]))
        .collect();

    if directions.len() < 3 {
        return None;
    }

    let &[a, b, c] = &directions[directions.len() - 3..] else {
        return None;
    };

    if a == b && b != c {
        Some(Reversal { from: b, to: c })
    } else {
        None
    }
}
