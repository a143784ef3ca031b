//! Admin authentication for Khabar
//!
//! Provides the signed session token codec, the admin credential check,
//! session cookies, and axum extractors that work with any domain state
//! implementing `FromRef<S>` for `SessionBackend`.

mod backend;
mod config;
mod cookie;
mod credentials;
mod error;
mod extractors;
mod payload;
mod token;

pub use backend::{AdminLogin, SessionBackend};
pub use config::{AuthConfig, SESSION_MAX_AGE_SECS};
pub use cookie::{cleared_session_cookie, session_cookie, SESSION_COOKIE_NAME};
pub use credentials::LoginCredentials;
pub use error::AuthError;
pub use extractors::{AdminSession, MaybeAdmin};
pub use payload::{AdminPrincipal, SessionPayload, ADMIN_ID};
pub use token::{create_token, verify_token, SessionVerification};
