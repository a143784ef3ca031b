//! Upstream CMS configuration

use std::time::Duration;

use khabar_common::config::optional_var;

/// Default upper bound on a single upstream call
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// WordPress REST API connection settings
#[derive(Clone)]
pub struct CmsConfig {
    /// Base URL of the REST API, e.g. `https://cms.example.com/wp-json`
    pub base_url: Option<String>,
    /// Bearer token (takes precedence over Basic credentials)
    pub bearer_token: Option<String>,
    pub username: Option<String>,
    /// WordPress application password
    pub app_password: Option<String>,
    pub upstream_timeout: Duration,
}

impl std::fmt::Debug for CmsConfig {
    #[mutants::skip] // Debug output only
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmsConfig")
            .field("base_url", &self.base_url)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "[REDACTED]"))
            .field("username", &self.username)
            .field("app_password", &self.app_password.as_ref().map(|_| "[REDACTED]"))
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}

impl CmsConfig {
    /// Create CMS config from environment variables
    pub fn from_env() -> Self {
        let upstream_timeout = optional_var("WORDPRESS_TIMEOUT_SECS")
            .and_then(|v| match v.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    tracing::warn!(value = %v, "Ignoring invalid WORDPRESS_TIMEOUT_SECS");
                    None
                }
            })
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT);

        let config = Self {
            base_url: optional_var("WORDPRESS_API_URL"),
            bearer_token: optional_var("WORDPRESS_API_TOKEN"),
            username: optional_var("WORDPRESS_USERNAME"),
            app_password: optional_var("WORDPRESS_APP_PASSWORD"),
            upstream_timeout,
        };

        if config.base_url.is_none() {
            tracing::warn!("WORDPRESS_API_URL is not set; CMS proxy requests will fail");
        }

        config
    }
}
