//! One fetch-classify-notify-persist cycle.

use chrono::{Duration, Utc};
use goldmon_alert::{classify, report, ThresholdSet};
use goldmon_common::{AlertKind, MarketCalendar, MarketContext, Observation, Priority};
use goldmon_notify::message::{self, ReportSpan};
use goldmon_notify::Dispatcher;
use goldmon_scrape::{extract, validate, HttpFetcher, PageFetcher, ScrapeError};
use goldmon_storage::{
    ActiveThresholds, FeatureFlags, HistoryStore, LatestStore, MarkerStore, RateHistory,
    RunSummary, SummaryStore,
};

use crate::cli::Cli;
use crate::config::{self, Credentials, TrackerConfig};

/// Executes one full tracker run. Scrape failures are reported through
/// the notification channels and end the run without an error; only
/// configuration and persistence problems surface to the caller.
pub async fn execute(cli: &Cli, config: &TrackerConfig) -> anyhow::Result<()> {
    let calendar = MarketCalendar::new(config.calendar.clone())?;
    let ctx = calendar.resolve(Utc::now());
    tracing::info!(
        period = %ctx.period,
        trading_day = ctx.is_trading_day,
        holiday = ctx.is_holiday,
        local_time = %ctx.local_time.format("%Y-%m-%d %H:%M"),
        "run started"
    );

    let dispatcher = config::build_dispatcher(&Credentials::from_env(), &config.style);

    let observation = match scrape(cli, config, &ctx).await {
        Ok(observation) => observation,
        Err(error) => {
            tracing::error!(%error, "scrape failed");
            let body = message::error_message(&error.to_string(), &ctx, &config.style);
            deliver(&dispatcher, &body, Priority::Normal, cli.dry_run).await;
            return Ok(());
        }
    };
    tracing::info!(rate = observation.rate, "rate observed");

    let latest_store = LatestStore::new(&cli.data_dir);
    let history_store = HistoryStore::new(&cli.data_dir, config.history_cap);
    let previous = latest_store.load();
    let mut history = history_store.load();

    let thresholds = ThresholdSet::resolve(
        ctx.period,
        ctx.is_trading_day,
        ctx.is_holiday,
        &config.alerts,
    );

    if let Some(decision) = classify(
        &observation,
        previous.as_ref(),
        history.entries(),
        &thresholds,
        &config.alerts,
    ) {
        tracing::info!(
            kind = decision.kind.label(),
            priority = %decision.priority,
            change = decision.change,
            "alert fired"
        );
        let body = match previous.as_ref() {
            Some(prev) if decision.kind != AlertKind::InitialRun => {
                message::alert_message(&decision, &observation, prev, &config.style)
            }
            _ => message::initial_message(&observation, &config.alerts, &config.style),
        };
        deliver(&dispatcher, &body, decision.priority, cli.dry_run).await;
    } else {
        tracing::info!("no alert rule fired");
    }

    send_due_reports(cli, config, &ctx, &history, &dispatcher).await?;

    if cli.dry_run {
        tracing::info!("dry run, skipping persistence");
        return Ok(());
    }

    history.append(observation.clone());
    history_store.save(&history)?;
    latest_store.save(&observation)?;
    save_summary(cli, config, &ctx, &thresholds)?;
    tracing::info!(history_len = history.len(), "state persisted");

    Ok(())
}

async fn scrape(
    cli: &Cli,
    config: &TrackerConfig,
    ctx: &MarketContext,
) -> Result<Observation, ScrapeError> {
    let url = cli.url.as_deref().unwrap_or(&config.scrape.url);
    let fetcher = HttpFetcher::new(config.scrape.fetch_timeout_secs);
    let page = fetcher.fetch(url).await?;
    let raw = extract::extract_rate(&page);
    validate::validate(raw, ctx, &config.scrape)
}

/// Checks and sends the hourly and daily trend reports. Markers are
/// written as soon as a slot is due, so a slot with too little history
/// is consumed rather than retried on later runs within the hour.
async fn send_due_reports(
    cli: &Cli,
    config: &TrackerConfig,
    ctx: &MarketContext,
    history: &RateHistory,
    dispatcher: &Dispatcher,
) -> anyhow::Result<()> {
    let hourly_marker = MarkerStore::hourly(&cli.data_dir);
    if let Some(key) = report::hourly_due(ctx, &config.reports, hourly_marker.load().as_deref()) {
        if !cli.dry_run {
            hourly_marker.save(&key)?;
        }
        let window = history.window(ctx.observed_at, Duration::hours(1));
        match report::summarize(window) {
            Some(trend) => {
                let body = message::report_message(&trend, ReportSpan::Hourly, ctx, &config.style);
                deliver(dispatcher, &body, Priority::Low, cli.dry_run).await;
            }
            None => tracing::info!(%key, "hourly report due but too few samples"),
        }
    }

    let daily_marker = MarkerStore::daily(&cli.data_dir);
    if let Some(key) = report::daily_due(ctx, &config.reports, daily_marker.load().as_deref()) {
        if !cli.dry_run {
            daily_marker.save(&key)?;
        }
        let today = ctx.local_time.date_naive();
        let window: Vec<Observation> = history
            .entries()
            .iter()
            .filter(|obs| obs.local_time.date_naive() == today)
            .cloned()
            .collect();
        match report::summarize(&window) {
            Some(trend) => {
                let body = message::report_message(&trend, ReportSpan::Daily, ctx, &config.style);
                deliver(dispatcher, &body, Priority::Low, cli.dry_run).await;
            }
            None => tracing::info!(%key, "daily report due but too few samples"),
        }
    }

    Ok(())
}

fn save_summary(
    cli: &Cli,
    config: &TrackerConfig,
    ctx: &MarketContext,
    thresholds: &ThresholdSet,
) -> anyhow::Result<()> {
    let summary = RunSummary {
        last_updated: ctx.observed_at,
        active_thresholds: ActiveThresholds {
            rupees: thresholds.rupees,
            percent: thresholds.percent,
            micro_rupees: thresholds.micro_rupees,
        },
        features: FeatureFlags {
            micro_alerts: config.alerts.enable_micro_alerts,
            rapid_alerts: config.alerts.enable_rapid_alerts,
            trend_alerts: config.alerts.enable_trend_alerts,
            stability_alerts: config.alerts.enable_stability_alerts,
            hourly_reports: config.reports.enable_hourly_reports,
            weekend_reduced_sensitivity: config.alerts.enable_weekend_reduced_sensitivity,
        },
        market_period: ctx.period,
        is_trading_day: ctx.is_trading_day,
        is_holiday: ctx.is_holiday,
    };
    SummaryStore::new(&cli.data_dir).save(&summary)?;
    Ok(())
}

async fn deliver(dispatcher: &Dispatcher, body: &str, priority: Priority, dry_run: bool) {
    if dry_run {
        tracing::info!(%priority, "dry run, composed message:\n{body}");
        return;
    }
    if dispatcher.is_empty() {
        tracing::info!(%priority, "no channels configured, message:\n{body}");
        return;
    }
    dispatcher.dispatch(body, priority).await;
}
