//! Authentication configuration

use khabar_common::config::{optional_var, raw_var};

/// Lifetime of an admin session (24 hours)
pub const SESSION_MAX_AGE_SECS: u64 = 24 * 60 * 60;

/// Admin authentication configuration.
///
/// Credentials and the signing secret stay optional so that a missing value
/// surfaces as a configuration error on login rather than at startup.
#[derive(Clone)]
pub struct AuthConfig {
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
    pub admin_name: String,
    pub admin_role: String,
    pub session_secret: Option<String>,
    /// Mark the session cookie `Secure` (production)
    pub secure_cookies: bool,
}

impl std::fmt::Debug for AuthConfig {
    #[mutants::skip] // Debug output only; redaction covered by test_debug_redacts_secrets
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("admin_email", &self.admin_email)
            .field("admin_password", &self.admin_password.as_ref().map(|_| "[REDACTED]"))
            .field("admin_name", &self.admin_name)
            .field("admin_role", &self.admin_role)
            .field("session_secret", &self.session_secret.as_ref().map(|_| "[REDACTED]"))
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}

impl AuthConfig {
    /// Create auth config from environment variables
    pub fn from_env(secure_cookies: bool) -> Self {
        let config = Self {
            admin_email: optional_var("ADMIN_EMAIL"),
            admin_password: optional_var("ADMIN_PASSWORD"),
            admin_name: optional_var("ADMIN_NAME").unwrap_or_else(|| "Admin".to_string()),
            admin_role: optional_var("ADMIN_ROLE").unwrap_or_else(|| "admin".to_string()),
            // HMAC key: raw bytes, never trimmed
            session_secret: raw_var("ADMIN_SESSION_SECRET"),
            secure_cookies,
        };

        if config.session_secret.is_none() {
            tracing::warn!("ADMIN_SESSION_SECRET is not set; admin sessions are disabled");
        }

        config
    }
}
