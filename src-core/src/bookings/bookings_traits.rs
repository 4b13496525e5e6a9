use super::bookings_model::StateTally;
use crate::errors::Result;

/// Trait defining the contract for Booking repository operations.
pub trait BookingRepositoryTrait: Send + Sync {
    fn tally_by_state_on_online_events(&self) -> Result<Vec<StateTally>>;
    fn count_on_online_events(&self) -> Result<i64>;
    fn tally_by_state_for_event(&self, event_id: i32) -> Result<Vec<StateTally>>;
    fn tally_by_state_as_host(&self, participant_id: i32, event_id: i32)
        -> Result<Vec<StateTally>>;
    fn tally_by_state_as_guest(&self, participant_id: i32, event_id: i32)
        -> Result<Vec<StateTally>>;
}
