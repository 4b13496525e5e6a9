use super::users_model::OptInTally;
use crate::errors::Result;

/// Trait defining the contract for User/Administrator repository operations.
pub trait UserRepositoryTrait: Send + Sync {
    fn newsletter_tally(&self) -> Result<OptInTally>;
    fn dashboard_tally(&self) -> Result<OptInTally>;
}
