use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The single administrator credential record. `password_hash` is an
/// Argon2id PHC-format string and never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminAccount {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// The login form posted to `/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
