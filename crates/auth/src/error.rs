//! Authentication errors

use axum::response::{IntoResponse, Response};
use khabar_common::Error;

/// Authentication error
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A required admin setting (credential or signing secret) is missing
    #[error("Admin login is not configured: {0} is not set")]
    NotConfigured(&'static str),

    /// Submitted login credentials do not match. Deliberately does not say
    /// which field was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No valid admin session on the request
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Failed to create session token: {0}")]
    TokenCreation(String),
}

impl From<AuthError> for Error {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::NotConfigured(_) => Error::Configuration(error.to_string()),
            AuthError::InvalidCredentials => Error::Authentication(error.to_string()),
            AuthError::Unauthorized => Error::Authorization(error.to_string()),
            AuthError::TokenCreation(_) => Error::Internal(error.to_string()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        Error::from(self).into_response()
    }
}
