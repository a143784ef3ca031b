//! Khabar application composition root
//!
//! Composes the domain routers into a single application.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Router,
};
use khabar_auth::{AuthConfig, SessionBackend};
use khabar_cms::{CmsClient, CmsConfig, CmsState};
use khabar_common::config::Config;
use tower_http::cors::CorsLayer;

/// Largest request body accepted (login payloads and proxied CMS writes)
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create the main application router from environment configuration
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let auth_config = AuthConfig::from_env(config.environment.is_production());
    let cms_config = CmsConfig::from_env();

    build_app(auth_config, cms_config)
}

/// Create the application router from explicit configuration
pub fn build_app(auth_config: AuthConfig, cms_config: CmsConfig) -> Result<Router, anyhow::Error> {
    let cms = CmsClient::new(cms_config)
        .map_err(|e| anyhow::anyhow!("Failed to create CMS client: {}", e))?;

    let cms_state = CmsState {
        sessions: SessionBackend::new(auth_config),
        cms,
    };

    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Khabar API v0.0.1-SNAPSHOT" }),
        )
        .merge(khabar_cms::routes().with_state(cms_state));

    Ok(app)
}

/// CORS for browser clients on other origins.
///
/// Credentials (the session cookie) are allowed, so origins must be listed
/// explicitly. Unparseable origins are skipped.
pub fn build_cors_layer(origins: &str) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .expose_headers([
            header::HeaderName::from_static("x-wp-total"),
            header::HeaderName::from_static("x-wp-totalpages"),
        ])
}

/// Request body size limit
pub fn body_limit_layer() -> DefaultBodyLimit {
    DefaultBodyLimit::max(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
