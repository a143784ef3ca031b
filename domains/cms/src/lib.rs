//! CMS domain: admin login/logout and the WordPress reverse-proxy gate

pub mod api;
pub mod config;
pub mod domain;
pub mod upstream;

pub use config::{CmsConfig, DEFAULT_UPSTREAM_TIMEOUT};
pub use domain::access::{authorize, is_public_read, Access, PUBLIC_READ_PREFIXES};
pub use domain::credentials::UpstreamCredentials;
pub use domain::error::ProxyError;
pub use upstream::{CmsClient, ProxiedResponse, ProxyRequest};

// Re-export API types
pub use api::routes;
pub use api::CmsState;
