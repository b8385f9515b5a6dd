//! Persistence layer over the shared SQLite pool.

pub mod admin;
pub mod bookings;
pub mod events;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::utils::error::AppError;

/// Open the SQLite pool with the settings the booking transaction relies
/// on: WAL for concurrent readers and a busy timeout for write
/// contention. Foreign keys stay unenforced so deleting an event keeps
/// its bookings as orphans.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(10))
        .foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}
