use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::bookings::BookingRepositoryTrait;
use crate::constants::{METRIC_MEETINGS_PREFIX, METRIC_TOTAL_MEETINGS};
use crate::errors::{Error, Result};
use crate::participants::ParticipantRepositoryTrait;

use super::metrics_model::ParticipantMetric;
use super::metrics_service::CancellationFlag;

/// Computes per-participant meeting counts for every participant whose
/// owning event is online.
pub struct ParticipantAggregator {
    participant_repository: Arc<dyn ParticipantRepositoryTrait>,
    booking_repository: Arc<dyn BookingRepositoryTrait>,
}

impl ParticipantAggregator {
    pub fn new(
        participant_repository: Arc<dyn ParticipantRepositoryTrait>,
        booking_repository: Arc<dyn BookingRepositoryTrait>,
    ) -> Self {
        ParticipantAggregator {
            participant_repository,
            booking_repository,
        }
    }

    /// Host and guest bookings are tallied separately and merged by
    /// summing per-state counts, so a participant hosting and guesting
    /// bookings in the same state gets one combined row. A participant
    /// with no bookings emits only `total_meetings = 0`.
    pub fn calculate(
        &self,
        snapshot_date: NaiveDate,
        cancel: &CancellationFlag,
    ) -> Result<Vec<ParticipantMetric>> {
        debug!("Calculating participant metrics for {}", snapshot_date);
        let mut metrics = Vec::new();

        for participant in self.participant_repository.list_on_online_events()? {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }

            let as_host = self
                .booking_repository
                .tally_by_state_as_host(participant.id, participant.event_id)?;
            let as_guest = self
                .booking_repository
                .tally_by_state_as_guest(participant.id, participant.event_id)?;

            // BTreeMap keeps the emitted per-state rows in a stable order
            let mut merged: BTreeMap<String, i64> = BTreeMap::new();
            for bucket in as_host.into_iter().chain(as_guest) {
                *merged.entry(bucket.state).or_insert(0) += bucket.tally;
            }

            let total_meetings: i64 = merged.values().sum();

            for (state, tally) in merged {
                metrics.push(ParticipantMetric {
                    snapshot_date,
                    participant_id: participant.id,
                    event_id: participant.event_id,
                    metric_name: format!("{}{}", METRIC_MEETINGS_PREFIX, state),
                    metric_value: tally,
                });
            }

            metrics.push(ParticipantMetric {
                snapshot_date,
                participant_id: participant.id,
                event_id: participant.event_id,
                metric_name: METRIC_TOTAL_MEETINGS.to_string(),
                metric_value: total_meetings,
            });
        }

        debug!("Calculated {} participant metrics", metrics.len());
        Ok(metrics)
    }
}
