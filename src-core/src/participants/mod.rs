mod participants_model;
mod participants_repository;
mod participants_traits;

pub use participants_model::ParticipantRef;
pub use participants_repository::ParticipantRepository;
pub use participants_traits::ParticipantRepositoryTrait;
