use super::events_model::Event;
use crate::errors::Result;

/// Trait defining the contract for Event repository operations.
pub trait EventRepositoryTrait: Send + Sync {
    fn list_online(&self) -> Result<Vec<Event>>;
}
