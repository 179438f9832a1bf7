//! CORS Middleware Configuration
//!
//! Browser clients call the JSON API from another origin. Preflights allow
//! the methods the record routes use and the headers a JSON client sends.

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::CorsSettings;

const METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

/// Create CORS layer from settings. No configured origins means any origin.
pub fn create_cors_layer(settings: &CorsSettings) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin(&settings.allowed_origins))
        .allow_methods(METHODS)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(settings.max_age))
}

fn allowed_origin(configured: &[String]) -> AllowOrigin {
    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin.escape_debug(), "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        Any.into()
    } else {
        origins.into()
    }
}
