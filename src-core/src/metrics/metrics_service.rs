use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use log::{error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::bookings::BookingRepositoryTrait;
use crate::errors::{Error, Result};
use crate::events::EventRepositoryTrait;
use crate::participants::ParticipantRepositoryTrait;
use crate::users::UserRepositoryTrait;

use super::event_aggregator::EventAggregator;
use super::global_aggregator::GlobalAggregator;
use super::metrics_traits::{MetricsRepositoryTrait, MetricsServiceTrait};
use super::participant_aggregator::ParticipantAggregator;

/// Cooperative cancellation signal for a metrics run. Cheap to clone;
/// once raised it stays raised.
#[derive(Clone, Debug, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Row counts of a completed run, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub snapshot_date: NaiveDate,
    pub daily_rows: usize,
    pub event_rows: usize,
    pub participant_rows: usize,
}

/// Orchestrates one metrics run: the three aggregation stages in
/// sequence, then the three persistence batches. The stages share one
/// connection pool and run strictly sequentially; each stage's rows are
/// accumulated in its own buffer and only merged into the database at
/// the persistence step.
pub struct MetricsService {
    global_aggregator: GlobalAggregator,
    event_aggregator: EventAggregator,
    participant_aggregator: ParticipantAggregator,
    metrics_repository: Arc<dyn MetricsRepositoryTrait>,
}

impl MetricsService {
    pub fn new(
        event_repository: Arc<dyn EventRepositoryTrait>,
        participant_repository: Arc<dyn ParticipantRepositoryTrait>,
        booking_repository: Arc<dyn BookingRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
        metrics_repository: Arc<dyn MetricsRepositoryTrait>,
    ) -> Self {
        MetricsService {
            global_aggregator: GlobalAggregator::new(
                participant_repository.clone(),
                booking_repository.clone(),
                user_repository,
            ),
            event_aggregator: EventAggregator::new(
                event_repository,
                participant_repository.clone(),
                booking_repository.clone(),
            ),
            participant_aggregator: ParticipantAggregator::new(
                participant_repository,
                booking_repository,
            ),
            metrics_repository,
        }
    }

    /// The snapshot a run describes is always the day before `as_of`,
    /// derived exactly once and threaded explicitly through every stage.
    pub fn snapshot_date_for(as_of: NaiveDate) -> NaiveDate {
        as_of - Duration::days(1)
    }

    async fn run_all_inner(
        &self,
        snapshot_date: NaiveDate,
        cancel: &CancellationFlag,
    ) -> Result<RunSummary> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let daily = self.global_aggregator.calculate(snapshot_date)?;

        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let per_event = self.event_aggregator.calculate(snapshot_date, cancel)?;

        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let per_participant = self
            .participant_aggregator
            .calculate(snapshot_date, cancel)?;

        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        // Three independent batches; a failure aborts the remaining ones
        // but already committed batches stay (no cross-table rollback).
        let daily_rows = self.metrics_repository.save_daily_metrics(&daily).await?;
        let event_rows = self
            .metrics_repository
            .save_event_metrics(&per_event)
            .await?;
        let participant_rows = self
            .metrics_repository
            .save_participant_metrics(&per_participant)
            .await?;

        Ok(RunSummary {
            snapshot_date,
            daily_rows,
            event_rows,
            participant_rows,
        })
    }

    /// Runs the pipeline for an explicit snapshot date (the date the
    /// metric rows will carry). `run_all` derives it from the run date;
    /// this entry point exists for reruns of a specific day.
    pub async fn run_for_snapshot_date(
        &self,
        snapshot_date: NaiveDate,
        cancel: &CancellationFlag,
    ) -> Result<RunSummary> {
        self.run_all_inner(snapshot_date, cancel).await
    }
}

#[async_trait]
impl MetricsServiceTrait for MetricsService {
    async fn run_all(&self, as_of: NaiveDate, cancel: &CancellationFlag) -> bool {
        let snapshot_date = Self::snapshot_date_for(as_of);
        info!("Starting metrics run for {}", snapshot_date);

        match self.run_all_inner(snapshot_date, cancel).await {
            Ok(summary) => {
                info!(
                    "Metrics run for {} completed: {} daily, {} event, {} participant rows",
                    summary.snapshot_date,
                    summary.daily_rows,
                    summary.event_rows,
                    summary.participant_rows
                );
                true
            }
            Err(Error::Cancelled) => {
                info!("Metrics run for {} cancelled", snapshot_date);
                false
            }
            Err(e) => {
                error!("Metrics run for {} failed: {}", snapshot_date, e);
                false
            }
        }
    }
}
