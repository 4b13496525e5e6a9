mod config;
mod scheduler;

use std::process::ExitCode;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use daily_metrics_core::bookings::BookingRepository;
use daily_metrics_core::db;
use daily_metrics_core::events::EventRepository;
use daily_metrics_core::metrics::{
    CancellationFlag, MetricsRepository, MetricsService, MetricsServiceTrait,
};
use daily_metrics_core::participants::ParticipantRepository;
use daily_metrics_core::users::UserRepository;

use config::Config;

/// Daily metrics aggregation runner.
#[derive(Parser, Debug)]
#[command(name = "daily-metrics-runner", version, about)]
struct Cli {
    /// Run a single aggregation pass and exit instead of scheduling.
    #[arg(long)]
    once: bool,

    /// Fire every minute instead of daily at 02:00 UTC (test databases only).
    #[arg(long, conflicts_with = "once")]
    every_minute: bool,

    /// Aggregate this snapshot date instead of yesterday. Implies --once.
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,
}

fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn build_service(pool: &Arc<db::DbPool>) -> Arc<MetricsService> {
    Arc::new(MetricsService::new(
        Arc::new(EventRepository::new(pool.clone())),
        Arc::new(ParticipantRepository::new(pool.clone())),
        Arc::new(BookingRepository::new(pool.clone())),
        Arc::new(UserRepository::new(pool.clone())),
        Arc::new(MetricsRepository::new(pool.clone())),
    ))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_format);

    match run(cli, config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("Runner failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<bool> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let service = build_service(&pool);
    let cancel = CancellationFlag::new();

    if let Some(snapshot_date) = cli.date {
        let summary = service.run_for_snapshot_date(snapshot_date, &cancel).await?;
        tracing::info!(
            "Run for {} wrote {} daily, {} event and {} participant rows",
            summary.snapshot_date,
            summary.daily_rows,
            summary.event_rows,
            summary.participant_rows
        );
        return Ok(true);
    }

    if cli.once {
        return Ok(service.run_all(Utc::now().date_naive(), &cancel).await);
    }

    scheduler::run_scheduled(service, cli.every_minute, cancel).await;
    Ok(true)
}
