pub mod bookings;
pub mod constants;
pub mod db;
pub mod errors;
pub mod events;
pub mod metrics;
pub mod participants;
pub mod schema;
pub mod users;

pub use errors::{Error, Result};
