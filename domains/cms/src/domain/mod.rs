//! Domain layer for the CMS proxy gate
//!
//! Pure decisions (who may pass, which headers cross, which credentials go
//! upstream) kept apart from the HTTP client that performs the forwarding.

pub mod access;
pub mod credentials;
pub mod error;
pub mod headers;
