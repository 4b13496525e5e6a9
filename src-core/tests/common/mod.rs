use std::sync::Arc;

use diesel::sql_query;
use diesel::sql_types::{Integer, Nullable, Text};
use diesel::RunQueryDsl;
use tempfile::TempDir;

use daily_metrics_core::bookings::BookingRepository;
use daily_metrics_core::db::{self, DbPool};
use daily_metrics_core::events::EventRepository;
use daily_metrics_core::metrics::{MetricsRepository, MetricsService};
use daily_metrics_core::participants::ParticipantRepository;
use daily_metrics_core::users::UserRepository;

/// Fresh SQLite database in a temp directory with the full schema
/// applied. The TempDir must be kept alive for the duration of the test.
pub fn setup_pool() -> (TempDir, Arc<DbPool>) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_file = dir.path().join("metrics.db");
    let db_path = db::init(db_file.to_str().expect("utf-8 path"))
        .expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");
    (dir, pool)
}

pub fn build_service(pool: &Arc<DbPool>) -> MetricsService {
    MetricsService::new(
        Arc::new(EventRepository::new(pool.clone())),
        Arc::new(ParticipantRepository::new(pool.clone())),
        Arc::new(BookingRepository::new(pool.clone())),
        Arc::new(UserRepository::new(pool.clone())),
        Arc::new(MetricsRepository::new(pool.clone())),
    )
}

pub fn metrics_repository(pool: &Arc<DbPool>) -> MetricsRepository {
    MetricsRepository::new(pool.clone())
}

pub fn seed_event(pool: &DbPool, id: i32, workspace_id: i32, state: &str) {
    let mut conn = pool.get().expect("connection");
    sql_query("INSERT INTO settings (id, workspace_id, state) VALUES (?, ?, ?)")
        .bind::<Integer, _>(id)
        .bind::<Integer, _>(workspace_id)
        .bind::<Text, _>(state)
        .execute(&mut conn)
        .expect("seed event");
}

pub fn seed_participant(pool: &DbPool, id: i32, event_id: i32, state: &str, created_at: &str) {
    let mut conn = pool.get().expect("connection");
    sql_query(
        "INSERT INTO participants (id, settings_id, state, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind::<Integer, _>(id)
    .bind::<Integer, _>(event_id)
    .bind::<Text, _>(state)
    .bind::<Text, _>(created_at)
    .execute(&mut conn)
    .expect("seed participant");
}

pub fn seed_booking(
    pool: &DbPool,
    id: i32,
    event_id: i32,
    host_id: i32,
    guest_id: Option<i32>,
    state: Option<&str>,
) {
    let mut conn = pool.get().expect("connection");
    sql_query(
        "INSERT INTO bookings (id, settings_id, host_id, guest_id, state) VALUES (?, ?, ?, ?, ?)",
    )
    .bind::<Integer, _>(id)
    .bind::<Integer, _>(event_id)
    .bind::<Integer, _>(host_id)
    .bind::<Nullable<Integer>, _>(guest_id)
    .bind::<Nullable<Text>, _>(state)
    .execute(&mut conn)
    .expect("seed booking");
}

pub fn seed_user(pool: &DbPool, id: i32, opted_in: bool, opted_out: bool) {
    let mut conn = pool.get().expect("connection");
    let opted_in_at = opted_in.then_some("2026-08-01 09:00:00");
    let opted_out_at = opted_out.then_some("2026-08-02 09:00:00");
    sql_query(
        "INSERT INTO users (id, newsletter_opted_in_at, newsletter_opted_out_at) VALUES (?, ?, ?)",
    )
    .bind::<Integer, _>(id)
    .bind::<Nullable<Text>, _>(opted_in_at)
    .bind::<Nullable<Text>, _>(opted_out_at)
    .execute(&mut conn)
    .expect("seed user");
}

pub fn seed_administrator(pool: &DbPool, id: i32, flag: Option<&str>) {
    let mut conn = pool.get().expect("connection");
    sql_query("INSERT INTO administrators (id, dashboard_opt_in) VALUES (?, ?)")
        .bind::<Integer, _>(id)
        .bind::<Nullable<Text>, _>(flag)
        .execute(&mut conn)
        .expect("seed administrator");
}
