#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sqlx::SqlitePool;
use tempfile::TempDir;
use uuid::Uuid;

use boxoffice_server::models::{Event, EventFields};
use boxoffice_server::{store, MIGRATOR};

/// A migrated, file-backed SQLite database. File-backed rather than
/// in-memory so every pool connection sees the same data, which the
/// concurrency tests depend on. The temp directory lives as long as the
/// handle.
pub struct TestDb {
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub async fn setup() -> TestDb {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("boxoffice-test.db");
    let url = format!("sqlite:{}", path.display());

    let pool = store::connect(&url, 4)
        .await
        .expect("failed to open test database");
    MIGRATOR.run(&pool).await.expect("failed to run migrations");

    TestDb { pool, _dir: dir }
}

pub fn event_fields(title: &str, day: u32, available_tickets: i64) -> EventFields {
    EventFields {
        title: title.to_string(),
        description: Some("integration test event".to_string()),
        date: Utc.with_ymd_and_hms(2026, 9, day, 19, 0, 0).unwrap(),
        location: "Town Hall".to_string(),
        available_tickets,
    }
}

pub async fn seed_event(pool: &SqlitePool, title: &str, available_tickets: i64) -> Event {
    store::events::create(pool, &event_fields(title, 1, available_tickets))
        .await
        .expect("failed to seed event")
}

pub async fn availability(pool: &SqlitePool, event_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT available_tickets FROM events WHERE id = ?")
        .bind(event_id)
        .fetch_one(pool)
        .await
        .expect("event row missing")
}

pub async fn booking_count(pool: &SqlitePool, event_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE event_id = ?")
        .bind(event_id)
        .fetch_one(pool)
        .await
        .expect("count query failed")
}

pub fn event_date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 9, day, 19, 0, 0).unwrap()
}
