use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::DATE_FORMAT;
use crate::errors::Error;

use super::percentage::format_percentage;

fn parse_stored_date(raw: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| Error::Unexpected(format!("invalid stored metric date '{}': {}", raw, e)))
}

/// A process-wide metric for one aggregation day. Keyed by
/// (aggregation_date, metric_name); value and percentage are the only
/// fields a rerun may overwrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetric {
    pub aggregation_date: NaiveDate,
    pub metric_name: String,
    pub metric_value: i64,
    pub metric_percentage: Option<Decimal>,
    pub metric_category: String,
}

/// A per-event metric. Carries the event's workspace id, denormalized
/// for downstream filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMetric {
    pub snapshot_date: NaiveDate,
    pub event_id: i32,
    pub workspace_id: i32,
    pub metric_name: String,
    pub metric_value: i64,
    pub metric_percentage: Option<Decimal>,
    pub metric_category: String,
}

/// A per-participant metric. Integer value only; this entity has no
/// percentage field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantMetric {
    pub snapshot_date: NaiveDate,
    pub participant_id: i32,
    pub event_id: i32,
    pub metric_name: String,
    pub metric_value: i64,
}

// --- DB Representations ---
// Dates are stored as YYYY-MM-DD TEXT, percentages as TEXT; id and the
// created_at/updated_at timestamps come from the table defaults.

#[derive(Debug, Clone, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::daily_metrics)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_default_value = false)]
pub struct NewDailyMetricDB {
    pub aggregation_date: String,
    pub metric_name: String,
    pub metric_value: i64,
    pub metric_percentage: Option<String>,
    pub metric_category: String,
}

#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::daily_metrics)]
pub struct DailyMetricDB {
    pub id: i32,
    pub aggregation_date: String,
    pub metric_name: String,
    pub metric_value: i64,
    pub metric_percentage: Option<String>,
    pub metric_category: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::event_metrics)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_default_value = false)]
pub struct NewEventMetricDB {
    pub snapshot_date: String,
    pub event_id: i32,
    pub workspace_id: i32,
    pub metric_name: String,
    pub metric_value: i64,
    pub metric_percentage: Option<String>,
    pub metric_category: String,
}

#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::event_metrics)]
pub struct EventMetricDB {
    pub id: i32,
    pub snapshot_date: String,
    pub event_id: i32,
    pub workspace_id: i32,
    pub metric_name: String,
    pub metric_value: i64,
    pub metric_percentage: Option<String>,
    pub metric_category: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::participant_metrics)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_default_value = false)]
pub struct NewParticipantMetricDB {
    pub snapshot_date: String,
    pub participant_id: i32,
    pub event_id: i32,
    pub metric_name: String,
    pub metric_value: i64,
}

#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::participant_metrics)]
pub struct ParticipantMetricDB {
    pub id: i32,
    pub snapshot_date: String,
    pub participant_id: i32,
    pub event_id: i32,
    pub metric_name: String,
    pub metric_value: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// --- Conversions ---

impl From<DailyMetric> for NewDailyMetricDB {
    fn from(domain: DailyMetric) -> Self {
        Self {
            aggregation_date: domain.aggregation_date.format(DATE_FORMAT).to_string(),
            metric_name: domain.metric_name,
            metric_value: domain.metric_value,
            metric_percentage: domain.metric_percentage.map(format_percentage),
            metric_category: domain.metric_category,
        }
    }
}

impl TryFrom<DailyMetricDB> for DailyMetric {
    type Error = Error;

    fn try_from(db: DailyMetricDB) -> Result<Self, Error> {
        Ok(Self {
            aggregation_date: parse_stored_date(&db.aggregation_date)?,
            metric_name: db.metric_name,
            metric_value: db.metric_value,
            metric_percentage: db
                .metric_percentage
                .and_then(|p| Decimal::from_str(&p).ok()),
            metric_category: db.metric_category,
        })
    }
}

impl From<EventMetric> for NewEventMetricDB {
    fn from(domain: EventMetric) -> Self {
        Self {
            snapshot_date: domain.snapshot_date.format(DATE_FORMAT).to_string(),
            event_id: domain.event_id,
            workspace_id: domain.workspace_id,
            metric_name: domain.metric_name,
            metric_value: domain.metric_value,
            metric_percentage: domain.metric_percentage.map(format_percentage),
            metric_category: domain.metric_category,
        }
    }
}

impl TryFrom<EventMetricDB> for EventMetric {
    type Error = Error;

    fn try_from(db: EventMetricDB) -> Result<Self, Error> {
        Ok(Self {
            snapshot_date: parse_stored_date(&db.snapshot_date)?,
            event_id: db.event_id,
            workspace_id: db.workspace_id,
            metric_name: db.metric_name,
            metric_value: db.metric_value,
            metric_percentage: db
                .metric_percentage
                .and_then(|p| Decimal::from_str(&p).ok()),
            metric_category: db.metric_category,
        })
    }
}

impl From<ParticipantMetric> for NewParticipantMetricDB {
    fn from(domain: ParticipantMetric) -> Self {
        Self {
            snapshot_date: domain.snapshot_date.format(DATE_FORMAT).to_string(),
            participant_id: domain.participant_id,
            event_id: domain.event_id,
            metric_name: domain.metric_name,
            metric_value: domain.metric_value,
        }
    }
}

impl TryFrom<ParticipantMetricDB> for ParticipantMetric {
    type Error = Error;

    fn try_from(db: ParticipantMetricDB) -> Result<Self, Error> {
        Ok(Self {
            snapshot_date: parse_stored_date(&db.snapshot_date)?,
            participant_id: db.participant_id,
            event_id: db.event_id,
            metric_name: db.metric_name,
            metric_value: db.metric_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_row(date: &str) -> DailyMetricDB {
        DailyMetricDB {
            id: 1,
            aggregation_date: date.to_string(),
            metric_name: "total_participants".to_string(),
            metric_value: 3,
            metric_percentage: None,
            metric_category: "participants".to_string(),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn well_formed_stored_date_converts() {
        let metric = DailyMetric::try_from(daily_row("2026-08-29")).unwrap();
        assert_eq!(
            metric.aggregation_date,
            NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
        );
        assert_eq!(metric.metric_value, 3);
    }

    #[test]
    fn corrupt_stored_date_surfaces_as_an_error() {
        let result = DailyMetric::try_from(daily_row("not-a-date"));
        assert!(matches!(result, Err(Error::Unexpected(_))));
    }
}
