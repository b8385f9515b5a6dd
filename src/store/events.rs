//! Event records and their remaining ticket inventory.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{Event, EventFields};
use crate::utils::error::AppError;

/// All events, soonest first.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Event>, AppError> {
    let events = sqlx::query_as::<_, Event>(
        "SELECT id, title, description, date, location, available_tickets
         FROM events ORDER BY date ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(events)
}

pub async fn find(pool: &SqlitePool, id: Uuid) -> Result<Option<Event>, AppError> {
    let event = sqlx::query_as::<_, Event>(
        "SELECT id, title, description, date, location, available_tickets
         FROM events WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(event)
}

pub async fn create(pool: &SqlitePool, fields: &EventFields) -> Result<Event, AppError> {
    validate(fields)?;

    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO events (id, title, description, date, location, available_tickets)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(fields.date)
    .bind(&fields.location)
    .bind(fields.available_tickets)
    .execute(pool)
    .await?;

    tracing::info!(event_id = %id, title = %fields.title, "Event created");

    Ok(Event {
        id,
        title: fields.title.clone(),
        description: fields.description.clone(),
        date: fields.date,
        location: fields.location.clone(),
        available_tickets: fields.available_tickets,
    })
}

/// Replace every mutable field of an event. Not a partial patch.
pub async fn update(pool: &SqlitePool, id: Uuid, fields: &EventFields) -> Result<(), AppError> {
    validate(fields)?;

    let result = sqlx::query(
        "UPDATE events
         SET title = ?, description = ?, date = ?, location = ?, available_tickets = ?
         WHERE id = ?",
    )
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(fields.date)
    .bind(&fields.location)
    .bind(fields.available_tickets)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Event '{id}' was not found")));
    }

    tracing::info!(event_id = %id, "Event updated");
    Ok(())
}

/// Delete an event. Bookings referencing it are left in place as
/// historical orphans; they are never cascaded or mutated.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM events WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Event '{id}' was not found")));
    }

    tracing::info!(event_id = %id, "Event deleted");
    Ok(())
}

fn validate(fields: &EventFields) -> Result<(), AppError> {
    if fields.title.trim().is_empty() {
        return Err(AppError::Validation("Event title must not be empty".into()));
    }
    if fields.location.trim().is_empty() {
        return Err(AppError::Validation(
            "Event location must not be empty".into(),
        ));
    }
    if fields.available_tickets < 0 {
        return Err(AppError::Validation(
            "Available tickets must not be negative".into(),
        ));
    }
    Ok(())
}
