//! Session gate for admin-only routes.
//!
//! Login state lives in a signed session cookie managed by
//! `tower-sessions`. The [`AdminSession`] extractor is the guard: routes
//! that take it as an argument reject anonymous requests with a redirect
//! to `/login` before the handler body runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_sessions::Session;

use crate::utils::error::AppError;

/// Session key holding the authenticated admin's username.
pub const ADMIN_USER_KEY: &str = "admin_user";

/// An authenticated admin request. Present only after a successful login;
/// extraction fails with a `/login` redirect otherwise.
pub struct AdminSession {
    pub session: Session,
    pub username: String,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Internal(format!("session layer missing: {msg}")))?;

        let username = session
            .get::<String>(ADMIN_USER_KEY)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(AdminSession { session, username })
    }
}

/// Mark a session as authenticated for `username`. Rotates the session id
/// so a pre-login cookie cannot be replayed as an admin one.
pub async fn establish(session: &Session, username: &str) -> Result<(), AppError> {
    session.cycle_id().await?;
    session.insert(ADMIN_USER_KEY, username.to_string()).await?;
    Ok(())
}

/// Drop all session state. Safe to call on an anonymous session.
pub async fn clear(session: &Session) -> Result<(), AppError> {
    session.flush().await?;
    Ok(())
}
