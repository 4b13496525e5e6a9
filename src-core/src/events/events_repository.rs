use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::events_model::Event;
use super::events_traits::EventRepositoryTrait;
use crate::constants::EVENT_STATE_ONLINE;
use crate::db::get_connection;
use crate::errors::{Error, Result};
use crate::schema::settings;

pub struct EventRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl EventRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        EventRepository { pool }
    }
}

impl EventRepositoryTrait for EventRepository {
    /// Lists every event whose lifecycle state is "online", ordered by id.
    fn list_online(&self) -> Result<Vec<Event>> {
        let mut conn = get_connection(&self.pool)?;
        settings::table
            .filter(settings::state.eq(EVENT_STATE_ONLINE))
            .select((settings::id, settings::workspace_id))
            .order(settings::id.asc())
            .load::<(i32, i32)>(&mut conn)
            .map(|rows| {
                rows.into_iter()
                    .map(|(id, workspace_id)| Event { id, workspace_id })
                    .collect()
            })
            .map_err(Error::from)
    }
}
