use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel::upsert::excluded;
use log::debug;
use std::sync::Arc;

use crate::constants::DATE_FORMAT;
use crate::db::get_connection;
use crate::errors::{Error, Result};

use super::metrics_model::{
    DailyMetric, DailyMetricDB, EventMetric, EventMetricDB, NewDailyMetricDB, NewEventMetricDB,
    NewParticipantMetricDB, ParticipantMetric, ParticipantMetricDB,
};
use super::metrics_traits::MetricsRepositoryTrait;

pub struct MetricsRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl MetricsRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        MetricsRepository { pool }
    }
}

#[async_trait]
impl MetricsRepositoryTrait for MetricsRepository {
    async fn save_daily_metrics(&self, metrics: &[DailyMetric]) -> Result<usize> {
        use crate::schema::daily_metrics::dsl::*;

        if metrics.is_empty() {
            return Ok(0);
        }

        let db_rows: Vec<NewDailyMetricDB> = metrics
            .iter()
            .cloned()
            .map(NewDailyMetricDB::from)
            .collect();
        debug!("Upserting {} daily metrics", db_rows.len());

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(daily_metrics)
            .values(&db_rows)
            .on_conflict((aggregation_date, metric_name))
            .do_update()
            .set((
                metric_value.eq(excluded(metric_value)),
                metric_percentage.eq(excluded(metric_percentage)),
                updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)
            .map_err(Error::from)
    }

    async fn save_event_metrics(&self, metrics: &[EventMetric]) -> Result<usize> {
        use crate::schema::event_metrics::dsl::*;

        if metrics.is_empty() {
            return Ok(0);
        }

        let db_rows: Vec<NewEventMetricDB> = metrics
            .iter()
            .cloned()
            .map(NewEventMetricDB::from)
            .collect();
        debug!("Upserting {} event metrics", db_rows.len());

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(event_metrics)
            .values(&db_rows)
            .on_conflict((snapshot_date, event_id, metric_name))
            .do_update()
            .set((
                metric_value.eq(excluded(metric_value)),
                metric_percentage.eq(excluded(metric_percentage)),
                updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)
            .map_err(Error::from)
    }

    async fn save_participant_metrics(&self, metrics: &[ParticipantMetric]) -> Result<usize> {
        use crate::schema::participant_metrics::dsl::*;

        if metrics.is_empty() {
            return Ok(0);
        }

        let db_rows: Vec<NewParticipantMetricDB> = metrics
            .iter()
            .cloned()
            .map(NewParticipantMetricDB::from)
            .collect();
        debug!("Upserting {} participant metrics", db_rows.len());

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(participant_metrics)
            .values(&db_rows)
            .on_conflict((snapshot_date, participant_id, event_id, metric_name))
            .do_update()
            .set((
                metric_value.eq(excluded(metric_value)),
                updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)
            .map_err(Error::from)
    }

    fn get_daily_metrics(&self, date: NaiveDate) -> Result<Vec<DailyMetric>> {
        use crate::schema::daily_metrics::dsl::*;
        let mut conn = get_connection(&self.pool)?;
        let rows = daily_metrics
            .filter(aggregation_date.eq(date.format(DATE_FORMAT).to_string()))
            .order(metric_name.asc())
            .load::<DailyMetricDB>(&mut conn)?;
        rows.into_iter().map(DailyMetric::try_from).collect()
    }

    fn get_event_metrics(&self, date: NaiveDate) -> Result<Vec<EventMetric>> {
        use crate::schema::event_metrics::dsl::*;
        let mut conn = get_connection(&self.pool)?;
        let rows = event_metrics
            .filter(snapshot_date.eq(date.format(DATE_FORMAT).to_string()))
            .order((event_id.asc(), metric_name.asc()))
            .load::<EventMetricDB>(&mut conn)?;
        rows.into_iter().map(EventMetric::try_from).collect()
    }

    fn get_participant_metrics(&self, date: NaiveDate) -> Result<Vec<ParticipantMetric>> {
        use crate::schema::participant_metrics::dsl::*;
        let mut conn = get_connection(&self.pool)?;
        let rows = participant_metrics
            .filter(snapshot_date.eq(date.format(DATE_FORMAT).to_string()))
            .order((participant_id.asc(), metric_name.asc()))
            .load::<ParticipantMetricDB>(&mut conn)?;
        rows.into_iter().map(ParticipantMetric::try_from).collect()
    }
}
