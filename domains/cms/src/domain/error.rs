//! Proxy failure reasons

use axum::response::{IntoResponse, Response};
use khabar_common::Error;

/// Why a proxied CMS request did not produce an upstream response
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// No valid admin session and the request is not an allow-listed public read
    #[error("Unauthorized")]
    Unauthorized,

    #[error("WORDPRESS_API_URL is not configured")]
    ConfigMissing,

    #[error("Invalid upstream URL {url}: {reason}")]
    InvalidTarget { url: String, reason: String },

    #[error("Invalid upstream credentials: {0}")]
    Credentials(String),

    /// Transport failure: connection refused, DNS, TLS, timeout
    #[error("Upstream request failed: {0}")]
    Upstream(String),
}

impl From<ProxyError> for Error {
    fn from(error: ProxyError) -> Self {
        match error {
            ProxyError::Unauthorized => Error::Authorization(error.to_string()),
            ProxyError::ConfigMissing | ProxyError::Credentials(_) => {
                Error::Configuration(error.to_string())
            }
            ProxyError::InvalidTarget { .. } => Error::Internal(error.to_string()),
            ProxyError::Upstream(_) => Error::Upstream(error.to_string()),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        Error::from(self).into_response()
    }
}
