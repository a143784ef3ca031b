//! Axum extractors for admin sessions
//!
//! Generic over any state `S` where `SessionBackend: FromRef<S>`.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::SessionBackend;
use crate::error::AuthError;
use crate::payload::SessionPayload;

/// Authenticated admin extractor; rejects with 401 when the session cookie
/// is absent or does not verify.
#[derive(Debug)]
pub struct AdminSession(pub SessionPayload);

impl<S> FromRequestParts<S> for AdminSession
where
    SessionBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let MaybeAdmin(session) = MaybeAdmin::from_request_parts(parts, state)
            .await
            .unwrap_or(MaybeAdmin(None));

        session.map(AdminSession).ok_or(AuthError::Unauthorized)
    }
}

/// Optional admin session; never rejects.
///
/// Used where anonymous callers are allowed through and the session only
/// changes what happens next (e.g. the CMS proxy).
#[derive(Debug)]
pub struct MaybeAdmin(pub Option<SessionPayload>);

impl MaybeAdmin {
    pub fn is_admin(&self) -> bool {
        self.0.is_some()
    }
}

impl<S> FromRequestParts<S> for MaybeAdmin
where
    SessionBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = SessionBackend::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);

        Ok(MaybeAdmin(backend.session_from_jar(&jar)))
    }
}
