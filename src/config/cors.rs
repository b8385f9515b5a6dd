use std::env;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Origins allowed when `CORS_ALLOWED_ORIGINS` is unset: the usual local
/// dev servers for the presentation layer.
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

const PREFLIGHT_MAX_AGE_SECS: u64 = 86400;

/// Browser CORS policy. Credentials are allowed because the admin session
/// rides in a cookie, which also rules out a wildcard origin; invalid or
/// missing configuration falls back to the defaults rather than `*`.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(PREFLIGHT_MAX_AGE_SECS))
}

fn allowed_origins() -> Vec<HeaderValue> {
    let configured =
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string());

    let origins: Vec<HeaderValue> = parse_origins(&configured);

    if origins.is_empty() {
        tracing::warn!("CORS: no valid origins configured, falling back to defaults");
        parse_origins(DEFAULT_ALLOWED_ORIGINS)
    } else {
        tracing::info!("CORS: configured with {} allowed origin(s)", origins.len());
        origins
    }
}

fn parse_origins(list: &str) -> Vec<HeaderValue> {
    list.split(',')
        .filter_map(|origin| {
            let trimmed = origin.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("CORS: invalid origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_origins_are_valid() {
        assert_eq!(parse_origins(DEFAULT_ALLOWED_ORIGINS).len(), 2);
    }

    #[test]
    fn garbage_origins_are_skipped() {
        let origins = parse_origins("http://ok.example, ,\u{7f}bad");
        assert_eq!(origins.len(), 1);
    }
}
