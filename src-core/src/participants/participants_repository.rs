use chrono::{Duration, NaiveDate, NaiveTime};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::participants_model::ParticipantRef;
use super::participants_traits::ParticipantRepositoryTrait;
use crate::constants::{EVENT_STATE_ONLINE, PARTICIPANT_STATE_REGISTERED};
use crate::db::get_connection;
use crate::errors::{Error, Result};
use crate::schema::{participants, settings};

pub struct ParticipantRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl ParticipantRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        ParticipantRepository { pool }
    }
}

impl ParticipantRepositoryTrait for ParticipantRepository {
    /// Cumulative count of participants on online events.
    fn count_on_online_events(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        participants::table
            .inner_join(settings::table)
            .filter(settings::state.eq(EVENT_STATE_ONLINE))
            .count()
            .get_result(&mut conn)
            .map_err(Error::from)
    }

    /// Participants on online events created within the given calendar day.
    fn count_created_on(&self, day: NaiveDate) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let day_start = day.and_time(NaiveTime::MIN);
        let day_end = day_start + Duration::days(1);
        participants::table
            .inner_join(settings::table)
            .filter(settings::state.eq(EVENT_STATE_ONLINE))
            .filter(participants::created_at.ge(day_start))
            .filter(participants::created_at.lt(day_end))
            .count()
            .get_result(&mut conn)
            .map_err(Error::from)
    }

    fn count_registered_on_online_events(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        participants::table
            .inner_join(settings::table)
            .filter(settings::state.eq(EVENT_STATE_ONLINE))
            .filter(participants::state.eq(PARTICIPANT_STATE_REGISTERED))
            .count()
            .get_result(&mut conn)
            .map_err(Error::from)
    }

    fn count_for_event(&self, event_id: i32) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        participants::table
            .filter(participants::settings_id.eq(event_id))
            .count()
            .get_result(&mut conn)
            .map_err(Error::from)
    }

    /// Lists every participant whose owning event is online, ordered by id.
    fn list_on_online_events(&self) -> Result<Vec<ParticipantRef>> {
        let mut conn = get_connection(&self.pool)?;
        participants::table
            .inner_join(settings::table)
            .filter(settings::state.eq(EVENT_STATE_ONLINE))
            .select((participants::id, participants::settings_id))
            .order(participants::id.asc())
            .load::<(i32, i32)>(&mut conn)
            .map(|rows| {
                rows.into_iter()
                    .map(|(id, event_id)| ParticipantRef { id, event_id })
                    .collect()
            })
            .map_err(Error::from)
    }
}
