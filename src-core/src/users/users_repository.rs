use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::users_model::OptInTally;
use super::users_traits::UserRepositoryTrait;
use crate::constants::{DASHBOARD_FLAG_OPTED_IN, DASHBOARD_FLAG_OPTED_OUT};
use crate::db::get_connection;
use crate::errors::Result;
use crate::schema::{administrators, users};

pub struct UserRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl UserRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        UserRepository { pool }
    }
}

impl UserRepositoryTrait for UserRepository {
    /// Newsletter opt-in/out tally over all users.
    fn newsletter_tally(&self) -> Result<OptInTally> {
        let mut conn = get_connection(&self.pool)?;
        let total: i64 = users::table.count().get_result(&mut conn)?;
        let opted_in: i64 = users::table
            .filter(users::newsletter_opted_in_at.is_not_null())
            .count()
            .get_result(&mut conn)?;
        let opted_out: i64 = users::table
            .filter(users::newsletter_opted_out_at.is_not_null())
            .count()
            .get_result(&mut conn)?;
        Ok(OptInTally {
            total,
            opted_in,
            opted_out,
        })
    }

    /// Dashboard opt-in/out tally over all administrators. A flag value
    /// other than '1' or '0' counts towards neither bucket.
    fn dashboard_tally(&self) -> Result<OptInTally> {
        let mut conn = get_connection(&self.pool)?;
        let total: i64 = administrators::table.count().get_result(&mut conn)?;
        let opted_in: i64 = administrators::table
            .filter(administrators::dashboard_opt_in.eq(DASHBOARD_FLAG_OPTED_IN))
            .count()
            .get_result(&mut conn)?;
        let opted_out: i64 = administrators::table
            .filter(administrators::dashboard_opt_in.eq(DASHBOARD_FLAG_OPTED_OUT))
            .count()
            .get_result(&mut conn)?;
        Ok(OptInTally {
            total,
            opted_in,
            opted_out,
        })
    }
}
