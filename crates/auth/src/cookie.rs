//! Session cookie construction

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::config::SESSION_MAX_AGE_SECS;

/// Name of the cookie carrying the admin session token
pub const SESSION_COOKIE_NAME: &str = "admin_session";

/// Cookie set on successful login
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::seconds(SESSION_MAX_AGE_SECS as i64))
        .build()
}

/// Cookie set on logout: empty value, expires immediately
pub fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::ZERO)
        .build()
}
