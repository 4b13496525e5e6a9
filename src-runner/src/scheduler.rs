//! Schedules the daily aggregation run.
//!
//! Production mode fires once a day at 02:00 UTC; `--every-minute` fires
//! on minute boundaries for dry runs against a test database.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use tracing::{info, warn};

use daily_metrics_core::metrics::{CancellationFlag, MetricsService, MetricsServiceTrait};

/// Daily trigger hour, in UTC. Chosen well after midnight so the previous
/// day's rows have settled before aggregation reads them.
const DAILY_RUN_HOUR: u32 = 2;

fn daily_run_time() -> NaiveTime {
    NaiveTime::from_hms_opt(DAILY_RUN_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Time remaining until the next scheduled daily run. If now is exactly
/// 02:00 UTC the next run is tomorrow, never a zero-length sleep.
pub fn until_next_daily_run(now: DateTime<Utc>) -> Duration {
    let today_run = now.date_naive().and_time(daily_run_time()).and_utc();
    let next = if now < today_run {
        today_run
    } else {
        today_run + chrono::Duration::days(1)
    };
    (next - now).to_std().unwrap_or(Duration::ZERO)
}

/// Time remaining until the next minute boundary.
fn until_next_minute(now: DateTime<Utc>) -> Duration {
    let secs = 60 - u64::from(now.second().min(59));
    Duration::from_secs(secs.max(1))
}

/// Runs the aggregation on a schedule until Ctrl-C. Each tick runs the
/// full pipeline for the previous calendar day; a signal received while a
/// run is in flight cancels it between stages.
pub async fn run_scheduled(
    service: Arc<MetricsService>,
    every_minute: bool,
    cancel: CancellationFlag,
) {
    if every_minute {
        info!("Scheduler started (every-minute test mode)");
    } else {
        info!("Scheduler started (daily at {} UTC)", daily_run_time());
    }

    loop {
        let now = Utc::now();
        let wait = if every_minute {
            until_next_minute(now)
        } else {
            until_next_daily_run(now)
        };

        tokio::select! {
            _ = tokio::time::sleep(wait) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received, stopping scheduler");
                cancel.cancel();
                break;
            }
        }

        // The pipeline is blocking database work with no await points, so
        // awaiting it directly here would starve the signal branch for the
        // whole run. It goes on its own task; this one stays responsive
        // and raises the flag the stage checks poll.
        let run_date = Utc::now().date_naive();
        let mut run = tokio::spawn({
            let service = service.clone();
            let cancel = cancel.clone();
            async move { service.run_all(run_date, &cancel).await }
        });
        tokio::select! {
            joined = &mut run => {
                if !joined.unwrap_or(false) {
                    warn!("Scheduled aggregation run did not complete");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received, cancelling in-flight run");
                cancel.cancel();
                // the run bails out at its next stage check
                let _ = run.await;
                break;
            }
        }
    }
}
