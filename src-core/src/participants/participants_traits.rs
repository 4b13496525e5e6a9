use chrono::NaiveDate;

use super::participants_model::ParticipantRef;
use crate::errors::Result;

/// Trait defining the contract for Participant repository operations.
/// All reads are scoped the way the aggregators need them; creation and
/// mutation of participants belong to the upstream application, not here.
pub trait ParticipantRepositoryTrait: Send + Sync {
    fn count_on_online_events(&self) -> Result<i64>;
    fn count_created_on(&self, day: NaiveDate) -> Result<i64>;
    fn count_registered_on_online_events(&self) -> Result<i64>;
    fn count_for_event(&self, event_id: i32) -> Result<i64>;
    fn list_on_online_events(&self) -> Result<Vec<ParticipantRef>>;
}
