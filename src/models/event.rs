use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub location: String,
    pub available_tickets: i64,
}

/// Mutable event fields, as submitted by the admin create and edit forms.
/// Updates replace every field; there is no partial patch.
#[derive(Debug, Clone, Deserialize)]
pub struct EventFields {
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub location: String,
    pub available_tickets: i64,
}
