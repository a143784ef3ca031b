//! Session payload types

use serde::{Deserialize, Serialize};

/// Fixed identifier of the single configured admin principal
pub const ADMIN_ID: &str = "admin";

/// The admin identity carried inside a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminPrincipal {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl AdminPrincipal {
    /// Stamp this principal with an absolute expiry (Unix seconds)
    pub fn into_payload(self, exp: i64) -> SessionPayload {
        SessionPayload {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            exp,
        }
    }
}

/// Decoded contents of a session token.
///
/// Deserialization doubles as schema validation: a token whose payload
/// lacks any of these fields, or carries them with the wrong JSON type,
/// fails to parse and is treated as invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    /// Principal ID (always `"admin"` for minted tokens)
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    /// Expires at (Unix seconds)
    pub exp: i64,
}

impl SessionPayload {
    pub fn principal(&self) -> AdminPrincipal {
        AdminPrincipal {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}
