mod users_model;
mod users_repository;
mod users_traits;

pub use users_model::OptInTally;
pub use users_repository::UserRepository;
pub use users_traits::UserRepositoryTrait;
