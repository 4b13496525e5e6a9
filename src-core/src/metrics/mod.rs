mod event_aggregator;
mod global_aggregator;
mod metrics_model;
mod metrics_repository;
mod metrics_service;
mod metrics_traits;
mod participant_aggregator;
mod percentage;


pub use event_aggregator::EventAggregator;
pub use global_aggregator::GlobalAggregator;
pub use metrics_model::{
    DailyMetric, DailyMetricDB, EventMetric, EventMetricDB, NewDailyMetricDB, NewEventMetricDB,
    NewParticipantMetricDB, ParticipantMetric, ParticipantMetricDB,
};
pub use metrics_repository::MetricsRepository;
pub use metrics_service::{CancellationFlag, MetricsService, RunSummary};
pub use metrics_traits::{MetricsRepositoryTrait, MetricsServiceTrait};
pub use participant_aggregator::ParticipantAggregator;
pub use percentage::{format_percentage, percentage_of};
