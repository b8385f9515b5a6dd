use std::env;
use std::net::SocketAddr;

use tower_sessions::cookie::Key;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

/// Minimum length for an externally provided session secret. `Key`
/// derivation refuses anything shorter.
const MIN_SESSION_SECRET_LEN: usize = 32;

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub session_secret: Option<String>,
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3001)));

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:boxoffice.db".to_string()),
            bind_addr,
            session_secret: env::var("SESSION_SECRET").ok(),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
        }
    }

    /// Cookie signing key. Derived from `SESSION_SECRET` when one is
    /// configured; otherwise a random per-process key, which logs out
    /// every admin on restart.
    pub fn session_key(&self) -> Key {
        match &self.session_secret {
            Some(secret) if secret.len() >= MIN_SESSION_SECRET_LEN => {
                Key::derive_from(secret.as_bytes())
            }
            Some(_) => {
                tracing::warn!(
                    "SESSION_SECRET is shorter than {} bytes, using a random key instead",
                    MIN_SESSION_SECRET_LEN
                );
                Key::generate()
            }
            None => {
                tracing::warn!("SESSION_SECRET not set, sessions will not survive a restart");
                Key::generate()
            }
        }
    }
}
