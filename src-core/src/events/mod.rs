mod events_model;
mod events_repository;
mod events_traits;

pub use events_model::Event;
pub use events_repository::EventRepository;
pub use events_traits::EventRepositoryTrait;
