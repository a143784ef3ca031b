//! Admin session API handlers
//!
//! Implements:
//! - POST /api/admin/login - Check admin credentials and set the session cookie
//! - POST /api/admin/logout - Clear the session cookie
//! - GET /api/admin/session - Return the current session

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use khabar_auth::{AdminPrincipal, AdminSession, LoginCredentials, SessionBackend, SessionPayload};
use khabar_common::{Error, Result};
use serde::Serialize;

/// Response for `POST /api/admin/logout`
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// POST /api/admin/login
pub async fn login(
    State(sessions): State<SessionBackend>,
    jar: CookieJar,
    payload: std::result::Result<Json<LoginCredentials>, JsonRejection>,
) -> Result<(CookieJar, Json<AdminPrincipal>)> {
    let Json(credentials) = payload.map_err(|e| Error::Validation(e.body_text()))?;

    let login = sessions.login(&credentials).map_err(|e| {
        tracing::warn!(error = %e, "Admin login failed");
        e
    })?;

    tracing::info!(email = %login.principal.email, "Admin logged in");

    Ok((jar.add(login.cookie), Json(login.principal)))
}

/// POST /api/admin/logout
///
/// Always succeeds, with or without a current session.
pub async fn logout(
    State(sessions): State<SessionBackend>,
    jar: CookieJar,
) -> (CookieJar, Json<LogoutResponse>) {
    tracing::info!("Admin logged out");

    (
        jar.add(sessions.logout_cookie()),
        Json(LogoutResponse { success: true }),
    )
}

/// GET /api/admin/session
pub async fn session(AdminSession(session): AdminSession) -> Json<SessionPayload> {
    Json(session)
}
