//! Shared utilities, configuration, and error handling for Khabar
//!
//! This crate provides common functionality used across the Khabar services:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Crypto helpers

pub mod config;
pub mod crypto;
pub mod error;

pub use config::{Config, Environment};
pub use crypto::constant_time_eq;
pub use error::{Error, Result};
