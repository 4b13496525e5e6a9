use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use crate::bookings::BookingRepositoryTrait;
use crate::constants::*;
use crate::errors::Result;
use crate::participants::ParticipantRepositoryTrait;
use crate::users::UserRepositoryTrait;

use super::metrics_model::DailyMetric;
use super::percentage::percentage_of;

/// Computes the process-wide daily metrics (scoped to online events,
/// plus the user/administrator opt-in rates which are global).
pub struct GlobalAggregator {
    participant_repository: Arc<dyn ParticipantRepositoryTrait>,
    booking_repository: Arc<dyn BookingRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl GlobalAggregator {
    pub fn new(
        participant_repository: Arc<dyn ParticipantRepositoryTrait>,
        booking_repository: Arc<dyn BookingRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        GlobalAggregator {
            participant_repository,
            booking_repository,
            user_repository,
        }
    }

    /// One `DailyMetric` row per global metric, all stamped with
    /// `snapshot_date`. The per-state meeting rows cover exactly the
    /// states observed in the data; nothing is emitted for states with
    /// no bookings.
    pub fn calculate(&self, snapshot_date: NaiveDate) -> Result<Vec<DailyMetric>> {
        debug!("Calculating global metrics for {}", snapshot_date);
        let mut metrics = Vec::new();

        let count_metric = |name: &str, value: i64, category: &str| DailyMetric {
            aggregation_date: snapshot_date,
            metric_name: name.to_string(),
            metric_value: value,
            metric_percentage: None,
            metric_category: category.to_string(),
        };

        metrics.push(count_metric(
            METRIC_TOTAL_PARTICIPANTS,
            self.participant_repository.count_on_online_events()?,
            CATEGORY_PARTICIPANTS,
        ));
        metrics.push(count_metric(
            METRIC_NEW_PARTICIPANTS,
            self.participant_repository.count_created_on(snapshot_date)?,
            CATEGORY_PARTICIPANTS,
        ));
        metrics.push(count_metric(
            METRIC_REGISTERED_PARTICIPANTS,
            self.participant_repository
                .count_registered_on_online_events()?,
            CATEGORY_PARTICIPANTS,
        ));

        for bucket in self.booking_repository.tally_by_state_on_online_events()? {
            metrics.push(count_metric(
                &format!("{}{}", METRIC_MEETINGS_PREFIX, bucket.state),
                bucket.tally,
                CATEGORY_MEETINGS,
            ));
        }
        metrics.push(count_metric(
            METRIC_TOTAL_MEETINGS,
            self.booking_repository.count_on_online_events()?,
            CATEGORY_MEETINGS,
        ));

        let newsletter = self.user_repository.newsletter_tally()?;
        metrics.push(DailyMetric {
            aggregation_date: snapshot_date,
            metric_name: METRIC_NEWSLETTER_OPTED_IN.to_string(),
            metric_value: newsletter.opted_in,
            metric_percentage: Some(percentage_of(newsletter.opted_in, newsletter.total)),
            metric_category: CATEGORY_NEWSLETTER.to_string(),
        });
        metrics.push(DailyMetric {
            aggregation_date: snapshot_date,
            metric_name: METRIC_NEWSLETTER_OPTED_OUT.to_string(),
            metric_value: newsletter.opted_out,
            metric_percentage: Some(percentage_of(newsletter.opted_out, newsletter.total)),
            metric_category: CATEGORY_NEWSLETTER.to_string(),
        });

        let dashboard = self.user_repository.dashboard_tally()?;
        metrics.push(DailyMetric {
            aggregation_date: snapshot_date,
            metric_name: METRIC_DASHBOARD_OPTED_IN.to_string(),
            metric_value: dashboard.opted_in,
            metric_percentage: Some(percentage_of(dashboard.opted_in, dashboard.total)),
            metric_category: CATEGORY_APP_USAGE.to_string(),
        });
        metrics.push(DailyMetric {
            aggregation_date: snapshot_date,
            metric_name: METRIC_DASHBOARD_OPTED_OUT.to_string(),
            metric_value: dashboard.opted_out,
            metric_percentage: Some(percentage_of(dashboard.opted_out, dashboard.total)),
            metric_category: CATEGORY_APP_USAGE.to_string(),
        });

        debug!("Calculated {} global metrics", metrics.len());
        Ok(metrics)
    }
}
