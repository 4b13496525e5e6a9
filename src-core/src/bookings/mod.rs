mod bookings_model;
mod bookings_repository;
mod bookings_traits;

pub use bookings_model::StateTally;
pub use bookings_repository::BookingRepository;
pub use bookings_traits::BookingRepositoryTrait;
