use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A committed reservation of tickets against one event. Bookings are
/// append-only: the system never mutates or deletes them, even when the
/// referenced event is gone.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub email: String,
    pub tickets: i64,
    pub created_at: DateTime<Utc>,
}

/// The public booking form posted to `/event/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub tickets: i64,
}
