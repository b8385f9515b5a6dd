//! The administrator credential record.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::password;
use crate::models::AdminAccount;
use crate::utils::error::AppError;

pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<AdminAccount>, AppError> {
    let account = sqlx::query_as::<_, AdminAccount>(
        "SELECT id, username, password_hash FROM admins WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(account)
}

/// Insert the administrator account if it does not exist yet. Runs on
/// every startup; a second run is a no-op, so an operator-changed
/// password is never overwritten.
pub async fn seed(pool: &SqlitePool, username: &str, plain_password: &str) -> Result<(), AppError> {
    if find_by_username(pool, username).await?.is_some() {
        return Ok(());
    }

    let password_hash = password::hash_password(plain_password)?;

    sqlx::query("INSERT INTO admins (id, username, password_hash) VALUES (?, ?, ?)")
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .execute(pool)
        .await?;

    tracing::info!(%username, "Seeded admin account");
    Ok(())
}
