//! Per-cabin availability check orchestration.
//!
//! One sequential pass per cabin: fetch → extract → render stats → write
//! snapshot → load latest two → diff → classify → notify. Written once
//! over the core components and a [`Presenter`], so every front-end shares
//! the same control flow.

use std::time::Duration;

use chrono::{Datelike, Utc};

use crate::error::Result;
use crate::models::{CabinConfig, Config, Snapshot};
use crate::pipeline::diff::{calculate_diff, DiffResult};
use crate::pipeline::extract::extract_available_dates;
use crate::pipeline::weekend::{find_weekends, WeekendWindow};
use crate::report::{AvailabilityStats, Presenter};
use crate::services::AvailabilityFetcher;
use crate::storage::SnapshotStorage;

/// Outcome of one cabin's check. Only `NewWeekends` and `NewDates`
/// dispatch a notification.
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    /// Fetch failed; nothing was analyzed or persisted this run
    NoData,

    /// Snapshot written, but fewer than two exist; diff skipped
    InsufficientHistory { date_count: usize },

    /// Two snapshots compared, no difference
    NoChange,

    /// New dates opened and at least one forms a full weekend
    NewWeekends {
        diff: DiffResult,
        weekends: Vec<WeekendWindow>,
    },

    /// New dates opened, none forming a full weekend
    NewDates { diff: DiffResult },

    /// Dates disappeared and none were added; reported, never notified
    RemovedOnly { diff: DiffResult },
}

/// Summary of one batch over all configured cabins.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Cabins that completed the full check
    pub checked: usize,
    /// Cabins aborted by a fatal per-cabin error
    pub failed: usize,
    /// Per-cabin outcomes, in configuration order
    pub outcomes: Vec<(String, CheckOutcome)>,
}

/// Check a single cabin and classify the result.
///
/// Fetch failures are absorbed here ("no data this run"); persistence
/// failures propagate, since skipping a write would corrupt the next
/// run's diff baseline.
pub async fn run_check(
    cabin: &CabinConfig,
    config: &Config,
    fetcher: &dyn AvailabilityFetcher,
    storage: &dyn SnapshotStorage,
    presenter: &dyn Presenter,
) -> Result<CheckOutcome> {
    let cabin_id = cabin.id()?;
    let (from_date, to_date) = availability_window(config.watcher.horizon_month);

    log::info!("Checking {} (id {cabin_id})", cabin.name);

    let payload = match fetcher.fetch(&cabin_id, &from_date, &to_date).await {
        Ok(payload) => payload,
        Err(e) => {
            log::error!("Failed to fetch availability for {}: {e}", cabin.name);
            return Ok(CheckOutcome::NoData);
        }
    };

    let dates = extract_available_dates(&payload);
    presenter.render_stats(cabin, &AvailabilityStats::from_dates(&dates));

    let snapshot = Snapshot::new(&cabin_id, dates);
    storage.write_snapshot(&snapshot).await?;

    let history = storage.load_latest_two(&cabin_id).await?;
    if history.len() < 2 {
        log::info!("First run for {}; no history to compare", cabin.name);
        return Ok(CheckOutcome::InsufficientHistory {
            date_count: snapshot.count,
        });
    }

    let diff = calculate_diff(&history[0].dates, &history[1].dates);
    if !diff.has_changes() {
        log::info!("No changes since last check for {}", cabin.name);
        return Ok(CheckOutcome::NoChange);
    }

    if !diff.removed.is_empty() {
        log::info!(
            "{}: {} date(s) no longer available",
            cabin.name,
            diff.removed.len()
        );
    }

    if diff.added.is_empty() {
        return Ok(CheckOutcome::RemovedOnly { diff });
    }

    let weekends = find_weekends(&diff.added);
    if weekends.is_empty() {
        presenter.notify(
            "Cabin Watcher",
            &format!("{}: {} new date(s) available", cabin.name, diff.added.len()),
        );
        Ok(CheckOutcome::NewDates { diff })
    } else {
        let fridays = weekends
            .iter()
            .map(|w| w.friday.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        presenter.notify(
            "Cabin Watcher - NEW WEEKENDS!",
            &format!(
                "{}: {} new weekend(s)! {fridays}",
                cabin.name,
                weekends.len()
            ),
        );
        Ok(CheckOutcome::NewWeekends { diff, weekends })
    }
}

/// Run one batch over every configured cabin, strictly sequentially.
///
/// Each cabin's failure is isolated: a fatal per-cabin error is logged
/// and the remaining batch always completes. Configuration errors are
/// fatal before any fetch.
pub async fn run_batch(
    config: &Config,
    fetcher: &dyn AvailabilityFetcher,
    storage: &dyn SnapshotStorage,
    presenter: &dyn Presenter,
) -> Result<BatchSummary> {
    config.validate()?;

    log::info!("Monitoring {} cabin(s)", config.cabins.len());

    let mut summary = BatchSummary::default();
    for cabin in &config.cabins {
        match run_check(cabin, config, fetcher, storage, presenter).await {
            Ok(outcome) => {
                summary.checked += 1;
                summary.outcomes.push((cabin.name.clone(), outcome));
            }
            Err(e) => {
                summary.failed += 1;
                log::error!("Check failed for {}: {e}", cabin.name);
            }
        }
    }

    log::info!(
        "Check complete: {} checked, {} failed",
        summary.checked,
        summary.failed
    );
    Ok(summary)
}

/// Run batches forever, sleeping the configured interval between them.
///
/// A failed batch is logged and the loop survives to the next tick;
/// termination is external.
pub async fn run_watch(
    config: &Config,
    fetcher: &dyn AvailabilityFetcher,
    storage: &dyn SnapshotStorage,
    presenter: &dyn Presenter,
) -> Result<()> {
    config.validate()?;
    let interval = Duration::from_secs(config.watcher.interval_secs);

    loop {
        if let Err(e) = run_batch(config, fetcher, storage, presenter).await {
            log::error!("Batch failed: {e}");
        }
        log::info!("Next check in {}s", interval.as_secs());
        tokio::time::sleep(interval).await;
    }
}

/// Date range for an availability query: today through the 1st of the
/// horizon month next year.
fn availability_window(horizon_month: u32) -> (String, String) {
    let today = Utc::now().date_naive();
    let from = today.format("%Y-%m-%d").to_string();
    let to = format!("{}-{:02}-01", today.year() + 1, horizon_month);
    (from, to)
}
