//! Outbound side of the proxy

pub mod client;

pub use client::{CmsClient, ProxiedResponse, ProxyRequest};
