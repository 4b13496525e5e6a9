use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use crate::bookings::BookingRepositoryTrait;
use crate::constants::*;
use crate::errors::{Error, Result};
use crate::events::EventRepositoryTrait;
use crate::participants::ParticipantRepositoryTrait;

use super::metrics_model::EventMetric;
use super::metrics_service::CancellationFlag;
use super::percentage::percentage_of;

/// Computes per-event metrics for every online event.
pub struct EventAggregator {
    event_repository: Arc<dyn EventRepositoryTrait>,
    participant_repository: Arc<dyn ParticipantRepositoryTrait>,
    booking_repository: Arc<dyn BookingRepositoryTrait>,
}

impl EventAggregator {
    pub fn new(
        event_repository: Arc<dyn EventRepositoryTrait>,
        participant_repository: Arc<dyn ParticipantRepositoryTrait>,
        booking_repository: Arc<dyn BookingRepositoryTrait>,
    ) -> Self {
        EventAggregator {
            event_repository,
            participant_repository,
            booking_repository,
        }
    }

    /// An event with no participants still gets its `participant_count`
    /// row (value 0) and an acceptance-rate row (value 0, percentage 0);
    /// an empty state grouping emits no `meetings_*` rows at all.
    pub fn calculate(
        &self,
        snapshot_date: NaiveDate,
        cancel: &CancellationFlag,
    ) -> Result<Vec<EventMetric>> {
        debug!("Calculating event metrics for {}", snapshot_date);
        let mut metrics = Vec::new();

        for event in self.event_repository.list_online()? {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }

            let metric = |name: String, value: i64, pct, category: &str| EventMetric {
                snapshot_date,
                event_id: event.id,
                workspace_id: event.workspace_id,
                metric_name: name,
                metric_value: value,
                metric_percentage: pct,
                metric_category: category.to_string(),
            };

            metrics.push(metric(
                METRIC_PARTICIPANT_COUNT.to_string(),
                self.participant_repository.count_for_event(event.id)?,
                None,
                CATEGORY_PARTICIPANTS,
            ));

            let buckets = self.booking_repository.tally_by_state_for_event(event.id)?;
            let total_meetings: i64 = buckets.iter().map(|b| b.tally).sum();
            let accepted = buckets
                .iter()
                .find(|b| b.state == BOOKING_STATE_ACCEPTED)
                .map(|b| b.tally)
                .unwrap_or(0);

            for bucket in &buckets {
                metrics.push(metric(
                    format!("{}{}", METRIC_MEETINGS_PREFIX, bucket.state),
                    bucket.tally,
                    None,
                    CATEGORY_MEETINGS,
                ));
            }

            metrics.push(metric(
                METRIC_MEETING_ACCEPTANCE_RATE.to_string(),
                accepted,
                Some(percentage_of(accepted, total_meetings)),
                CATEGORY_MEETINGS,
            ));
        }

        debug!("Calculated {} event metrics", metrics.len());
        Ok(metrics)
    }
}
