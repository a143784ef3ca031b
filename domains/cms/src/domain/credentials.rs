//! Upstream CMS credential selection

use axum::http::HeaderValue;
use base64::{engine::general_purpose::STANDARD, Engine};

use super::error::ProxyError;
use crate::config::CmsConfig;

/// Credentials attached to admin requests forwarded upstream
#[derive(Clone, PartialEq, Eq)]
pub enum UpstreamCredentials {
    Bearer(String),
    Basic { username: String, password: String },
}

impl std::fmt::Debug for UpstreamCredentials {
    #[mutants::skip] // Debug output only
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpstreamCredentials::Bearer(_) => f.write_str("Bearer([REDACTED])"),
            UpstreamCredentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
        }
    }
}

impl UpstreamCredentials {
    /// First configured option wins: bearer token, then username + password.
    pub fn from_config(config: &CmsConfig) -> Option<Self> {
        if let Some(token) = &config.bearer_token {
            return Some(UpstreamCredentials::Bearer(token.clone()));
        }

        match (&config.username, &config.app_password) {
            (Some(username), Some(password)) => Some(UpstreamCredentials::Basic {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }

    /// Value for the upstream `Authorization` header
    pub fn header_value(&self) -> Result<HeaderValue, ProxyError> {
        let value = match self {
            UpstreamCredentials::Bearer(token) => format!("Bearer {}", token),
            UpstreamCredentials::Basic { username, password } => {
                format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
            }
        };

        let mut header = HeaderValue::from_str(&value)
            .map_err(|_| ProxyError::Credentials("not a valid header value".to_string()))?;
        header.set_sensitive(true);
        Ok(header)
    }
}
