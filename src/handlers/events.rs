//! Public event listing and booking handlers.

use axum::extract::{Path, State};
use axum::response::{Redirect, Response};
use axum::Form;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::BookingRequest;
use crate::store;
use crate::utils::error::AppError;
use crate::utils::response::success;

/// GET /events — all upcoming events, soonest first.
pub async fn list_events(State(pool): State<SqlitePool>) -> Result<Response, AppError> {
    let events = store::events::list(&pool).await?;
    Ok(success(events, "Events retrieved"))
}

/// GET /event/{id} — a single event, for the booking form.
pub async fn show_event(
    State(pool): State<SqlitePool>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let event = store::events::find(&pool, event_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event '{event_id}' was not found")))?;
    Ok(success(event, "Event retrieved"))
}

/// POST /event/{id} — book tickets; back to the event list on success.
pub async fn book_event(
    State(pool): State<SqlitePool>,
    Path(event_id): Path<Uuid>,
    Form(form): Form<BookingRequest>,
) -> Result<Redirect, AppError> {
    store::bookings::book(&pool, event_id, &form.name, &form.email, form.tickets).await?;
    Ok(Redirect::to("/events"))
}
