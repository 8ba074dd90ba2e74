use axum::http::{header, HeaderValue, Method};
use std::env;
use tower_http::cors::CorsLayer;

pub const DEFAULT_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "https://realestatecommunity-99b97.web.app",
    "https://real-estate-community.web.app",
];

/// Credentialed CORS for the client origins.
///
/// `CORS_ORIGINS` (comma separated) replaces the built-in allow-list.
/// A wildcard is not accepted because browsers refuse `*` with credentials.
pub fn build_cors_layer() -> CorsLayer {
    let origins = match env::var("CORS_ORIGINS") {
        Ok(raw) => parse_origins(&raw),
        Err(_) => Vec::new(),
    };
    let origins = if origins.is_empty() {
        DEFAULT_ORIGINS
            .into_iter()
            .map(HeaderValue::from_static)
            .collect()
    } else {
        origins
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "*")
        .filter_map(|s| s.parse().ok())
        .collect()
}
