//! Session backend
//!
//! Stateless: holds only the immutable auth configuration. Sessions live
//! entirely in the signed cookie.

use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::config::{AuthConfig, SESSION_MAX_AGE_SECS};
use crate::cookie::{cleared_session_cookie, session_cookie, SESSION_COOKIE_NAME};
use crate::credentials::{authenticate_admin, LoginCredentials};
use crate::error::AuthError;
use crate::payload::{AdminPrincipal, SessionPayload};
use crate::token::{create_token, verify_token, SessionVerification};

/// Concrete session backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for SessionBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.sessions.clone()
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionBackend {
    config: Arc<AuthConfig>,
}

/// Result of a successful login
#[derive(Debug)]
pub struct AdminLogin {
    pub principal: AdminPrincipal,
    pub cookie: Cookie<'static>,
}

impl SessionBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Check credentials and mint a 24-hour session cookie
    pub fn login(&self, credentials: &LoginCredentials) -> Result<AdminLogin, AuthError> {
        let principal = authenticate_admin(&self.config, credentials)?;

        let secret = self
            .config
            .session_secret
            .as_deref()
            .ok_or(AuthError::NotConfigured("ADMIN_SESSION_SECRET"))?;
        let token = create_token(&principal, secret, SESSION_MAX_AGE_SECS)?;

        Ok(AdminLogin {
            principal,
            cookie: session_cookie(token, self.config.secure_cookies),
        })
    }

    /// Cookie that clears the session on the client
    pub fn logout_cookie(&self) -> Cookie<'static> {
        cleared_session_cookie(self.config.secure_cookies)
    }

    /// Verify a raw token. Without a configured secret no token is valid.
    pub fn verify(&self, token: &str) -> SessionVerification {
        match self.config.session_secret.as_deref() {
            Some(secret) => verify_token(token, secret),
            None => {
                tracing::debug!("Session secret not configured; treating request as anonymous");
                SessionVerification::Invalid
            }
        }
    }

    /// Verify the session cookie in `jar`, if any
    pub fn session_from_jar(&self, jar: &CookieJar) -> Option<SessionPayload> {
        let cookie = jar.get(SESSION_COOKIE_NAME)?;
        if cookie.value().is_empty() {
            return None;
        }
        self.verify(cookie.value()).into_payload()
    }
}
