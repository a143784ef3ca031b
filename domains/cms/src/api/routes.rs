//! Route definitions for CMS domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{proxy, session};
use super::middleware::CmsState;

/// Create admin session routes
fn session_routes() -> Router<CmsState> {
    Router::new()
        .route("/api/admin/login", post(session::login))
        .route("/api/admin/logout", post(session::logout))
        .route("/api/admin/session", get(session::session))
}

/// Create WordPress proxy routes
///
/// `get` also answers HEAD.
fn proxy_routes() -> Router<CmsState> {
    let forward = || {
        get(proxy::forward)
            .post(proxy::forward)
            .put(proxy::forward)
            .patch(proxy::forward)
            .delete(proxy::forward)
    };

    Router::new()
        .route("/api/wordpress", forward())
        .route("/api/wordpress/{*path}", forward())
}

/// Create all CMS domain API routes
pub fn routes() -> Router<CmsState> {
    Router::new()
        .merge(session_routes())
        .merge(proxy_routes())
}
