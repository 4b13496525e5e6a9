use async_trait::async_trait;
use chrono::NaiveDate;

use super::metrics_model::{DailyMetric, EventMetric, ParticipantMetric};
use super::metrics_service::CancellationFlag;
use crate::errors::Result;

/// Trait defining the contract for metric persistence. Each save is an
/// independent batched upsert against one metric table: on a key
/// conflict only value/percentage (and updated_at) change, and an empty
/// batch performs no database operation. There is deliberately no
/// transaction spanning the three tables; callers needing atomicity
/// must wrap the calls in an external transaction.
#[async_trait]
pub trait MetricsRepositoryTrait: Send + Sync {
    async fn save_daily_metrics(&self, metrics: &[DailyMetric]) -> Result<usize>;
    async fn save_event_metrics(&self, metrics: &[EventMetric]) -> Result<usize>;
    async fn save_participant_metrics(&self, metrics: &[ParticipantMetric]) -> Result<usize>;

    fn get_daily_metrics(&self, date: NaiveDate) -> Result<Vec<DailyMetric>>;
    fn get_event_metrics(&self, date: NaiveDate) -> Result<Vec<EventMetric>>;
    fn get_participant_metrics(&self, date: NaiveDate) -> Result<Vec<ParticipantMetric>>;
}

/// Trait defining the contract for the metrics run orchestration.
#[async_trait]
pub trait MetricsServiceTrait: Send + Sync {
    /// Runs the full pipeline for the day before `as_of`. Returns true
    /// on success; failures are logged, never propagated as errors.
    async fn run_all(&self, as_of: NaiveDate, cancel: &CancellationFlag) -> bool;
}
