//! Admin login and logout.

use axum::extract::State;
use axum::response::{Redirect, Response};
use axum::Form;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::auth::{password, session};
use crate::models::LoginRequest;
use crate::store;
use crate::utils::error::AppError;
use crate::utils::response::empty_success;

/// GET /login — login is form-driven; rendering is someone else's job.
pub async fn login_form() -> Response {
    empty_success("POST username and password to log in")
}

/// POST /login — verify credentials and establish the admin session.
///
/// Unknown username and wrong password produce the same generic outcome;
/// the response never discloses which field was wrong.
pub async fn login(
    State(pool): State<SqlitePool>,
    session: Session,
    Form(form): Form<LoginRequest>,
) -> Result<Redirect, AppError> {
    let account = store::admin::find_by_username(&pool, &form.username).await?;

    let verified = match &account {
        Some(account) => password::verify_password(&form.password, &account.password_hash)?,
        None => false,
    };

    if !verified {
        tracing::warn!(username = %form.username, "Failed admin login attempt");
        return Err(AppError::InvalidCredentials);
    }

    session::establish(&session, &form.username).await?;
    tracing::info!(username = %form.username, "Admin logged in");
    Ok(Redirect::to("/admin"))
}

/// GET /logout — drop the session unconditionally. Idempotent.
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    session::clear(&session).await?;
    Ok(Redirect::to("/events"))
}
