use chrono::{Duration, FixedOffset, Utc};
use goldmon_common::{MarketPeriod, Observation};

use crate::store::history::{HistoryStore, RateHistory};
use crate::store::latest::LatestStore;
use crate::store::marker::MarkerStore;
use crate::store::summary::{ActiveThresholds, FeatureFlags, RunSummary, SummaryStore};

fn make_obs(rate: f64, minutes_ago: i64) -> Observation {
    let observed_at = Utc::now() - Duration::minutes(minutes_ago);
    let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    Observation {
        rate,
        currency: "INR".to_string(),
        unit: "per gram".to_string(),
        purity: "24K".to_string(),
        location: "Kerala".to_string(),
        observed_at,
        local_time: observed_at.with_timezone(&ist),
        source: "test".to_string(),
        success: true,
        market_period: MarketPeriod::ActiveTrading,
        is_trading_day: true,
        is_holiday: false,
    }
}

#[test]
fn latest_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = LatestStore::new(dir.path());

    assert!(store.load().is_none(), "missing file means first run");

    let obs = make_obs(6042.0, 0);
    store.save(&obs).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, obs);
}

#[test]
fn corrupt_latest_is_treated_as_first_run() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("latest_rate.json"), "{not json").unwrap();
    let store = LatestStore::new(dir.path());
    assert!(store.load().is_none());
}

#[test]
fn history_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(dir.path(), 500);

    let mut history = store.load();
    assert!(history.is_empty());

    history.append(make_obs(6000.0, 60));
    history.append(make_obs(6010.0, 30));
    store.save(&history).unwrap();

    let reloaded = store.load();
    assert_eq!(reloaded.entries(), history.entries());
}

#[test]
fn corrupt_history_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rate_history.json"), "[{\"rate\":").unwrap();
    let store = HistoryStore::new(dir.path(), 500);
    assert!(store.load().is_empty());
}

#[test]
fn append_evicts_oldest_beyond_cap() {
    let mut history = RateHistory::empty(5);
    for i in 0..8 {
        history.append(make_obs(6000.0 + i as f64, 0));
    }
    assert_eq!(history.len(), 5);
    // The survivors are the most recent 5, in original order.
    let rates: Vec<f64> = history.entries().iter().map(|o| o.rate).collect();
    assert_eq!(rates, vec![6003.0, 6004.0, 6005.0, 6006.0, 6007.0]);
}

#[test]
fn window_returns_only_recent_entries() {
    let mut history = RateHistory::empty(500);
    history.append(make_obs(6000.0, 120));
    history.append(make_obs(6010.0, 45));
    history.append(make_obs(6020.0, 10));

    let now = Utc::now();
    let window = history.window(now, Duration::hours(1));
    assert_eq!(window.len(), 2);
    assert_eq!(window[0].rate, 6010.0);
    assert_eq!(window[1].rate, 6020.0);
}

#[test]
fn tail_returns_last_n_in_order() {
    let mut history = RateHistory::empty(500);
    for i in 0..5 {
        history.append(make_obs(6000.0 + i as f64, 0));
    }
    let tail = history.tail(3);
    let rates: Vec<f64> = tail.iter().map(|o| o.rate).collect();
    assert_eq!(rates, vec![6002.0, 6003.0, 6004.0]);

    assert_eq!(history.tail(10).len(), 5, "tail larger than history");
}

#[test]
fn marker_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = MarkerStore::hourly(dir.path());

    assert!(store.load().is_none());
    store.save("2025-06-02-11").unwrap();
    assert_eq!(store.load().as_deref(), Some("2025-06-02-11"));

    // Hourly and daily markers are separate files.
    let daily = MarkerStore::daily(dir.path());
    assert!(daily.load().is_none());
}

#[test]
fn atomic_writes_leave_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = LatestStore::new(dir.path());
    store.save(&make_obs(6000.0, 0)).unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["latest_rate.json"]);
}

#[test]
fn run_summary_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = SummaryStore::new(dir.path());
    let summary = RunSummary {
        last_updated: Utc::now(),
        active_thresholds: ActiveThresholds {
            rupees: 15.0,
            percent: 0.15,
            micro_rupees: 5.0,
        },
        features: FeatureFlags {
            micro_alerts: true,
            rapid_alerts: true,
            trend_alerts: true,
            stability_alerts: true,
            hourly_reports: true,
            weekend_reduced_sensitivity: true,
        },
        market_period: MarketPeriod::ActiveTrading,
        is_trading_day: true,
        is_holiday: false,
    };
    store.save(&summary).unwrap();

    let content = std::fs::read_to_string(dir.path().join("config_summary.json")).unwrap();
    let reloaded: RunSummary = serde_json::from_str(&content).unwrap();
    assert_eq!(reloaded, summary);
}
