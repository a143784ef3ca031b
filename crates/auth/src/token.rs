//! Signed session token codec
//!
//! Token format: `<payload>.<signature>` where `payload` is the session JSON
//! encoded as unpadded URL-safe base64 and `signature` is the HMAC-SHA256 of
//! the encoded payload string, keyed by the raw secret bytes and encoded the
//! same way. Timestamps are Unix seconds.

use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig},
        DecodePaddingMode,
    },
    Engine,
};
use chrono::Utc;
use hmac::{digest::InvalidLength, Hmac, Mac};
use khabar_common::constant_time_eq;
use sha2::Sha256;

use crate::error::AuthError;
use crate::payload::{AdminPrincipal, SessionPayload};

type HmacSha256 = Hmac<Sha256>;

/// URL-safe alphabet, no padding on output, padding optional on input.
const TOKEN_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Outcome of verifying a session token.
///
/// Every failure (malformed, mis-signed, undecodable, expired) collapses to
/// `Invalid`; callers never learn which check rejected the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionVerification {
    Valid(SessionPayload),
    Invalid,
}

impl SessionVerification {
    pub fn is_valid(&self) -> bool {
        matches!(self, SessionVerification::Valid(_))
    }

    pub fn into_payload(self) -> Option<SessionPayload> {
        match self {
            SessionVerification::Valid(payload) => Some(payload),
            SessionVerification::Invalid => None,
        }
    }
}

/// Mint a token for `principal` that expires `max_age_seconds` from now
pub fn create_token(
    principal: &AdminPrincipal,
    secret: &str,
    max_age_seconds: u64,
) -> Result<String, AuthError> {
    create_token_at(principal, secret, max_age_seconds, Utc::now().timestamp())
}

/// Verify a token against `secret` and the current clock
pub fn verify_token(token: &str, secret: &str) -> SessionVerification {
    verify_token_at(token, secret, Utc::now().timestamp())
}

pub(crate) fn create_token_at(
    principal: &AdminPrincipal,
    secret: &str,
    max_age_seconds: u64,
    now: i64,
) -> Result<String, AuthError> {
    let exp = i64::try_from(max_age_seconds)
        .ok()
        .and_then(|max_age| now.checked_add(max_age))
        .ok_or_else(|| AuthError::TokenCreation("session lifetime out of range".to_string()))?;

    let payload = principal.clone().into_payload(exp);
    let json = serde_json::to_vec(&payload)
        .map_err(|e| AuthError::TokenCreation(format!("failed to encode payload: {}", e)))?;

    let encoded_payload = TOKEN_BASE64.encode(json);
    let signature = sign(&encoded_payload, secret)
        .map_err(|e| AuthError::TokenCreation(format!("unusable signing key: {}", e)))?;

    Ok(format!("{}.{}", encoded_payload, signature))
}

pub(crate) fn verify_token_at(token: &str, secret: &str, now: i64) -> SessionVerification {
    match decode_verified(token, secret, now) {
        Ok(payload) => SessionVerification::Valid(payload),
        Err(reason) => {
            tracing::debug!(reason, "Session token rejected");
            SessionVerification::Invalid
        }
    }
}

fn decode_verified(token: &str, secret: &str, now: i64) -> Result<SessionPayload, &'static str> {
    let (encoded_payload, signature) = token.split_once('.').ok_or("missing separator")?;
    if encoded_payload.is_empty() || signature.is_empty() {
        return Err("empty segment");
    }

    let expected = sign(encoded_payload, secret).map_err(|_| "unusable signing key")?;
    if !constant_time_eq(expected.as_bytes(), signature.as_bytes()) {
        return Err("signature mismatch");
    }

    let json = TOKEN_BASE64
        .decode(encoded_payload)
        .map_err(|_| "payload is not base64")?;
    let payload: SessionPayload =
        serde_json::from_slice(&json).map_err(|_| "payload does not match session schema")?;

    if payload.exp < now {
        return Err("expired");
    }

    Ok(payload)
}

fn sign(encoded_payload: &str, secret: &str) -> Result<String, InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())?;
    mac.update(encoded_payload.as_bytes());
    Ok(TOKEN_BASE64.encode(mac.finalize().into_bytes()))
}
