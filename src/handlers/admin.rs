//! Admin event management. Every handler takes [`AdminSession`], so an
//! anonymous request is redirected to `/login` before the body runs.

use axum::extract::{Path, State};
use axum::response::{Redirect, Response};
use axum::Form;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::AdminSession;
use crate::models::EventFields;
use crate::store;
use crate::utils::error::AppError;
use crate::utils::response::success;

/// GET /admin — dashboard listing of all events.
pub async fn dashboard(
    admin: AdminSession,
    State(pool): State<SqlitePool>,
) -> Result<Response, AppError> {
    let events = store::events::list(&pool).await?;
    tracing::debug!(admin = %admin.username, count = events.len(), "Admin dashboard");
    Ok(success(events, "Events retrieved"))
}

/// POST /admin — create an event.
pub async fn create_event(
    admin: AdminSession,
    State(pool): State<SqlitePool>,
    Form(fields): Form<EventFields>,
) -> Result<Redirect, AppError> {
    let event = store::events::create(&pool, &fields).await?;
    tracing::info!(admin = %admin.username, event_id = %event.id, "Admin created event");
    Ok(Redirect::to("/admin"))
}

/// GET /admin/edit/{id} — the event being edited.
pub async fn edit_event(
    _admin: AdminSession,
    State(pool): State<SqlitePool>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let event = store::events::find(&pool, event_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event '{event_id}' was not found")))?;
    Ok(success(event, "Event retrieved"))
}

/// POST /admin/edit/{id} — replace every mutable field of an event.
pub async fn update_event(
    admin: AdminSession,
    State(pool): State<SqlitePool>,
    Path(event_id): Path<Uuid>,
    Form(fields): Form<EventFields>,
) -> Result<Redirect, AppError> {
    store::events::update(&pool, event_id, &fields).await?;
    tracing::info!(admin = %admin.username, %event_id, "Admin updated event");
    Ok(Redirect::to("/admin"))
}

/// POST /admin/delete/{id} — delete an event; its bookings stay behind.
pub async fn delete_event(
    admin: AdminSession,
    State(pool): State<SqlitePool>,
    Path(event_id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    store::events::delete(&pool, event_id).await?;
    tracing::info!(admin = %admin.username, %event_id, "Admin deleted event");
    Ok(Redirect::to("/admin"))
}
