use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel::sql_types::{BigInt, Integer, Text};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::bookings_model::StateTally;
use super::bookings_traits::BookingRepositoryTrait;
use crate::constants::EVENT_STATE_ONLINE;
use crate::db::get_connection;
use crate::errors::{Error, Result};
use crate::schema::{bookings, settings};

/// Grouped counts use raw SQL: diesel's DSL has no ergonomic way to
/// group by a COALESCE expression, and the state labels are free-form.
#[derive(QueryableByName, Debug)]
struct StateTallyRow {
    #[diesel(sql_type = Text)]
    state: String,
    #[diesel(sql_type = BigInt)]
    tally: i64,
}

impl From<StateTallyRow> for StateTally {
    fn from(row: StateTallyRow) -> Self {
        StateTally {
            state: row.state,
            tally: row.tally,
        }
    }
}

pub struct BookingRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl BookingRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        BookingRepository { pool }
    }
}

impl BookingRepositoryTrait for BookingRepository {
    /// Bookings on online events, grouped by coalesced state.
    fn tally_by_state_on_online_events(&self) -> Result<Vec<StateTally>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = sql_query(
            "SELECT COALESCE(b.state, 'unknown') AS state, COUNT(*) AS tally \
             FROM bookings b \
             INNER JOIN settings s ON s.id = b.settings_id \
             WHERE s.state = ? \
             GROUP BY 1 ORDER BY 1",
        )
        .bind::<Text, _>(EVENT_STATE_ONLINE)
        .load::<StateTallyRow>(&mut conn)?;
        Ok(rows.into_iter().map(StateTally::from).collect())
    }

    /// Total bookings on online events (ungrouped).
    fn count_on_online_events(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        bookings::table
            .inner_join(settings::table)
            .filter(settings::state.eq(EVENT_STATE_ONLINE))
            .count()
            .get_result(&mut conn)
            .map_err(Error::from)
    }

    fn tally_by_state_for_event(&self, event_id: i32) -> Result<Vec<StateTally>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = sql_query(
            "SELECT COALESCE(state, 'unknown') AS state, COUNT(*) AS tally \
             FROM bookings \
             WHERE settings_id = ? \
             GROUP BY 1 ORDER BY 1",
        )
        .bind::<Integer, _>(event_id)
        .load::<StateTallyRow>(&mut conn)?;
        Ok(rows.into_iter().map(StateTally::from).collect())
    }

    fn tally_by_state_as_host(&self, participant_id: i32, event_id: i32) -> Result<Vec<StateTally>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = sql_query(
            "SELECT COALESCE(state, 'unknown') AS state, COUNT(*) AS tally \
             FROM bookings \
             WHERE host_id = ? AND settings_id = ? \
             GROUP BY 1 ORDER BY 1",
        )
        .bind::<Integer, _>(participant_id)
        .bind::<Integer, _>(event_id)
        .load::<StateTallyRow>(&mut conn)?;
        Ok(rows.into_iter().map(StateTally::from).collect())
    }

    fn tally_by_state_as_guest(&self, participant_id: i32, event_id: i32) -> Result<Vec<StateTally>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = sql_query(
            "SELECT COALESCE(state, 'unknown') AS state, COUNT(*) AS tally \
             FROM bookings \
             WHERE guest_id = ? AND settings_id = ? \
             GROUP BY 1 ORDER BY 1",
        )
        .bind::<Integer, _>(participant_id)
        .bind::<Integer, _>(event_id)
        .load::<StateTallyRow>(&mut conn)?;
        Ok(rows.into_iter().map(StateTally::from).collect())
    }
}
