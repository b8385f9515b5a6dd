use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::time::Duration;
use tower_sessions::cookie::Key;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{admin, auth, events, health_check};

/// Session lifetime, refreshed on every request.
const SESSION_IDLE_MINUTES: i64 = 30;

pub fn create_routes(pool: SqlitePool, session_key: Key) -> Router {
    let session_store = MemoryStore::default();
    // Cookies are signed, not secure-only: TLS termination happens
    // upstream of this service.
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(SESSION_IDLE_MINUTES)))
        .with_signed(session_key);

    Router::new()
        .route("/health", get(health_check))
        .route("/events", get(events::list_events))
        .route("/event/:id", get(events::show_event).post(events::book_event))
        .route("/admin", get(admin::dashboard).post(admin::create_event))
        .route(
            "/admin/edit/:id",
            get(admin::edit_event).post(admin::update_event),
        )
        .route("/admin/delete/:id", post(admin::delete_event))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
        .with_state(pool)
}
