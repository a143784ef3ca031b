//! Upstream WordPress client
//!
//! Forwards one request per call, exactly once, with no retries. Response
//! bodies are streamed back without buffering.

use axum::{
    body::{Body, Bytes},
    http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
};
use reqwest::{Client, Url};

use crate::config::CmsConfig;
use crate::domain::{
    access::{authorize, is_public_read, Access},
    credentials::UpstreamCredentials,
    error::ProxyError,
    headers::{outbound_request_headers, relayed_response_headers},
};

/// An inbound request bound for the CMS
#[derive(Debug)]
pub struct ProxyRequest {
    pub method: Method,
    /// Upstream API path below the base URL, e.g. `wp/v2/posts/42`
    pub path: String,
    /// Raw query string, copied verbatim
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Upstream response relayed to the caller
#[derive(Debug)]
pub struct ProxiedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Body,
}

impl IntoResponse for ProxiedResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(self.body);
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// HTTP client for the configured WordPress REST API
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: Client,
    config: CmsConfig,
}

impl CmsClient {
    /// Create a client whose every upstream call is bounded by the configured timeout
    pub fn new(config: CmsConfig) -> Result<Self, ProxyError> {
        let http = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(|e| ProxyError::Upstream(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Authorize, then forward.
    ///
    /// The gate decision completes before any upstream I/O starts; a
    /// rejected request never reaches the CMS. Public access is decided
    /// twice: on the raw path, then on the path the parsed upstream URL
    /// actually points at.
    pub async fn proxy(
        &self,
        request: ProxyRequest,
        has_session: bool,
    ) -> Result<ProxiedResponse, ProxyError> {
        let access = authorize(&request.method, &request.path, has_session).inspect_err(|_| {
            tracing::debug!(
                method = %request.method,
                path = %request.path,
                "Rejected anonymous CMS request"
            );
        })?;

        let url = self.target_url(&request.path, request.query.as_deref())?;
        if access == Access::Public && !self.resolves_to_public_read(&request.method, &url)? {
            tracing::debug!(
                method = %request.method,
                path = %request.path,
                resolved = %url.path(),
                "Rejected anonymous CMS request after URL normalisation"
            );
            return Err(ProxyError::Unauthorized);
        }

        self.forward(request, url, access).await
    }

    /// Upstream URL: base URL + path + verbatim query string
    pub fn target_url(&self, path: &str, query: Option<&str>) -> Result<Url, ProxyError> {
        let base = self
            .config
            .base_url
            .as_deref()
            .ok_or(ProxyError::ConfigMissing)?
            .trim_end_matches('/');

        let path = path.trim_start_matches('/');
        let mut url = if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path)
        };

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }

        Url::parse(&url).map_err(|e| ProxyError::InvalidTarget {
            url,
            reason: e.to_string(),
        })
    }

    /// Whether `url`, relative to the configured base path, is still an
    /// allow-listed public read
    fn resolves_to_public_read(&self, method: &Method, url: &Url) -> Result<bool, ProxyError> {
        let base = self.target_url("", None)?;
        let base_path = base.path().trim_end_matches('/');

        Ok(url
            .path()
            .strip_prefix(base_path)
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .is_some_and(|rest| is_public_read(method, rest)))
    }

    async fn forward(
        &self,
        request: ProxyRequest,
        url: Url,
        access: Access,
    ) -> Result<ProxiedResponse, ProxyError> {
        let mut headers = outbound_request_headers(&request.headers);
        if access == Access::Admin {
            match UpstreamCredentials::from_config(&self.config) {
                Some(credentials) => {
                    headers.insert(AUTHORIZATION, credentials.header_value()?);
                }
                None => tracing::warn!(
                    path = %request.path,
                    "Forwarding admin request without upstream credentials; \
                     set WORDPRESS_API_TOKEN or WORDPRESS_USERNAME and WORDPRESS_APP_PASSWORD"
                ),
            }
        }

        tracing::debug!(method = %request.method, url = %url, ?access, "Forwarding CMS request");

        let has_body = request.method != Method::GET && request.method != Method::HEAD;
        let mut builder = self.http.request(request.method, url).headers(headers);
        if has_body {
            builder = builder.body(request.body);
        }

        let response = builder.send().await.map_err(|e| {
            let message = if e.is_timeout() {
                "upstream request timed out".to_string()
            } else {
                e.to_string()
            };
            tracing::error!(error = %e, path = %request.path, "CMS upstream request failed");
            ProxyError::Upstream(message)
        })?;

        let status = response.status();
        let headers = relayed_response_headers(response.headers());

        Ok(ProxiedResponse {
            status,
            headers,
            body: Body::from_stream(response.bytes_stream()),
        })
    }
}
