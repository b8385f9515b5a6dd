use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Admin login required")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Password hashing error: {0}")]
    Crypto(String),

    #[error("Session error")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Crypto(_)
            | AppError::Session(_)
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Crypto(_) => "CRYPTO_ERROR",
            AppError::Session(_) => "SESSION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => {
                warn!(error = ?self, message = %msg, "Request rejected");
            }
            AppError::InvalidCredentials | AppError::Unauthorized => {
                warn!(error = ?self, "Authentication required");
            }
            AppError::Crypto(msg) | AppError::Internal(msg) => {
                error!(error = ?self, message = %msg, "Application error");
            }
            AppError::Session(e) => {
                error!(error = ?e, "Session error");
            }
            AppError::Database(e) => {
                error!(error = ?e, "Database error");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log internal details before deciding what the client sees
        self.log();

        // Authentication failures send the browser back to the login page
        // instead of a bare status code.
        if matches!(self, AppError::InvalidCredentials | AppError::Unauthorized) {
            return Redirect::to("/login").into_response();
        }

        let status = self.status_code();
        let code = self.code();

        // Only expose high-level messages to the client
        let public_message = match &self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Crypto(_) | AppError::Internal(_) | AppError::Session(_) => {
                "An internal error occurred".to_string()
            }
            AppError::Database(_) => "A database error occurred".to_string(),
            AppError::InvalidCredentials | AppError::Unauthorized => unreachable!(),
        };

        error_response(code, public_message, None, status)
    }
}
