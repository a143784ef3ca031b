//! WordPress proxy handler
//!
//! Forwards `/api/wordpress/{*path}` to the configured REST API.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, Uri},
};
use khabar_auth::MaybeAdmin;

use crate::domain::error::ProxyError;
use crate::upstream::{CmsClient, ProxiedResponse, ProxyRequest};

/// Mount point of the proxy
pub const PROXY_PREFIX: &str = "/api/wordpress";

/// Any method on /api/wordpress/{*path}
pub async fn forward(
    State(cms): State<CmsClient>,
    session: MaybeAdmin,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ProxiedResponse, ProxyError> {
    let request = ProxyRequest {
        method,
        path: upstream_path(&uri).to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    };

    cms.proxy(request, session.is_admin()).await
}

/// Raw (still percent-encoded) path below the proxy mount point
fn upstream_path(uri: &Uri) -> &str {
    uri.path()
        .strip_prefix(PROXY_PREFIX)
        .unwrap_or_default()
        .trim_start_matches('/')
}
