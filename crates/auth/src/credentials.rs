//! Admin login credential check

use khabar_common::constant_time_eq;
use serde::Deserialize;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::payload::{AdminPrincipal, ADMIN_ID};

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Check submitted credentials against the configured admin.
///
/// Email matches case-insensitively, password exactly; both sides are
/// trimmed first. The signing secret is required here too so a login never
/// succeeds without a way to mint the session.
pub(crate) fn authenticate_admin(
    config: &AuthConfig,
    credentials: &LoginCredentials,
) -> Result<AdminPrincipal, AuthError> {
    let admin_email = config
        .admin_email
        .as_deref()
        .ok_or(AuthError::NotConfigured("ADMIN_EMAIL"))?;
    let admin_password = config
        .admin_password
        .as_deref()
        .ok_or(AuthError::NotConfigured("ADMIN_PASSWORD"))?;
    if config.session_secret.is_none() {
        return Err(AuthError::NotConfigured("ADMIN_SESSION_SECRET"));
    }

    let email_matches =
        credentials.email.trim().to_lowercase() == admin_email.trim().to_lowercase();
    let password_matches = constant_time_eq(
        credentials.password.trim().as_bytes(),
        admin_password.trim().as_bytes(),
    );

    if !(email_matches & password_matches) {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(AdminPrincipal {
        id: ADMIN_ID.to_string(),
        email: admin_email.trim().to_string(),
        name: config.admin_name.clone(),
        role: config.admin_role.clone(),
    })
}
