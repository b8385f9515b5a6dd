//! The booking transaction.
//!
//! This is the one correctness-critical path in the system: inserting the
//! booking row and decrementing the event's inventory happen in a single
//! transaction, and the decrement is conditional on enough tickets still
//! being available. Two concurrent bookings racing for the last ticket
//! therefore resolve to exactly one winner; `available_tickets` can never
//! go negative.

use std::time::Duration;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::Booking;
use crate::utils::error::AppError;

/// Attempts per booking before a write-conflict error is surfaced.
const MAX_ATTEMPTS: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_millis(20);

/// Validate and commit a ticket purchase against an event's inventory.
pub async fn book(
    pool: &SqlitePool,
    event_id: Uuid,
    name: &str,
    email: &str,
    tickets: i64,
) -> Result<Booking, AppError> {
    if name.trim().is_empty() || email.trim().is_empty() {
        return Err(AppError::Validation(
            "Name and email are required".into(),
        ));
    }
    if tickets <= 0 {
        return Err(AppError::Validation(
            "Invalid number of tickets".into(),
        ));
    }

    // SQLite allows one writer at a time; a transaction that loses the
    // write race fails with a BUSY/SNAPSHOT error rather than blocking.
    // Retry the whole attempt a bounded number of times, re-reading the
    // inventory each time.
    let mut attempt = 1;
    loop {
        match try_book(pool, event_id, name, email, tickets).await {
            Err(AppError::Database(e)) if is_write_conflict(&e) && attempt < MAX_ATTEMPTS => {
                tracing::debug!(
                    %event_id,
                    attempt,
                    error = ?e,
                    "Booking transaction conflicted, retrying"
                );
                tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                attempt += 1;
            }
            other => return other,
        }
    }
}

async fn try_book(
    pool: &SqlitePool,
    event_id: Uuid,
    name: &str,
    email: &str,
    tickets: i64,
) -> Result<Booking, AppError> {
    let mut tx = pool.begin().await?;

    let available: Option<i64> =
        sqlx::query_scalar("SELECT available_tickets FROM events WHERE id = ?")
            .bind(event_id)
            .fetch_optional(&mut *tx)
            .await?;

    let available = available
        .ok_or_else(|| AppError::NotFound(format!("Event '{event_id}' was not found")))?;

    if tickets > available {
        return Err(AppError::Validation(format!(
            "Only {available} ticket(s) left for this event"
        )));
    }

    // Conditional decrement: if a concurrent booking got in between the
    // read above and this write, zero rows match and the booking is
    // rejected instead of driving the inventory negative.
    let updated = sqlx::query(
        "UPDATE events
         SET available_tickets = available_tickets - ?
         WHERE id = ? AND available_tickets >= ?",
    )
    .bind(tickets)
    .bind(event_id)
    .bind(tickets)
    .execute(&mut *tx)
    .await?;

    if updated.rows_affected() == 0 {
        return Err(AppError::Validation(
            "Not enough tickets left for this event".into(),
        ));
    }

    let booking = Booking {
        id: Uuid::new_v4(),
        event_id,
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        tickets,
        created_at: Utc::now(),
    };

    sqlx::query(
        "INSERT INTO bookings (id, event_id, name, email, tickets, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(booking.id)
    .bind(booking.event_id)
    .bind(&booking.name)
    .bind(&booking.email)
    .bind(booking.tickets)
    .bind(booking.created_at)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(
        booking_id = %booking.id,
        %event_id,
        tickets,
        "Booking committed"
    );

    Ok(booking)
}

/// Bookings recorded against an event, newest first. The event itself may
/// no longer exist; orphaned bookings are still returned.
pub async fn list_for_event(pool: &SqlitePool, event_id: Uuid) -> Result<Vec<Booking>, AppError> {
    let bookings = sqlx::query_as::<_, Booking>(
        "SELECT id, event_id, name, email, tickets, created_at
         FROM bookings WHERE event_id = ? ORDER BY created_at DESC",
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;
    Ok(bookings)
}

/// SQLITE_BUSY (5), SQLITE_LOCKED (6) and their extended codes signal a
/// lost write race rather than a broken request.
fn is_write_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            matches!(db.code().as_deref(), Some("5" | "6" | "261" | "517"))
                || db.message().contains("database is locked")
        }
        _ => false,
    }
}
