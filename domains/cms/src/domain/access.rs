//! Authorization decision for proxied CMS requests

use axum::http::Method;

use super::error::ProxyError;

/// Upstream collections anonymous visitors may read.
///
/// The public site renders posts, categories, and media straight from the
/// CMS, so these GET routes work without an admin session.
pub const PUBLIC_READ_PREFIXES: [&str; 3] = ["wp/v2/posts", "wp/v2/categories", "wp/v2/media"];

/// How a request was let through the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Valid admin session; upstream credentials are attached
    Admin,
    /// Anonymous allow-listed read; forwarded without upstream credentials
    Public,
}

/// Decide whether a request may be forwarded.
///
/// A valid session always wins; otherwise only a GET to an allow-listed
/// collection passes.
pub fn authorize(method: &Method, path: &str, has_session: bool) -> Result<Access, ProxyError> {
    if has_session {
        return Ok(Access::Admin);
    }
    if is_public_read(method, path) {
        return Ok(Access::Public);
    }
    Err(ProxyError::Unauthorized)
}

/// GET to one of the public collections (or an item below it)
pub fn is_public_read(method: &Method, path: &str) -> bool {
    if method != Method::GET {
        return false;
    }

    let path = path.trim_matches('/');
    if path.split('/').any(is_unsafe_segment) {
        return false;
    }

    PUBLIC_READ_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Segments the upstream URL parser could resolve away from the
/// allow-listed prefix: `.` and `..` (plain or percent-encoded), and
/// anything holding a backslash, which http(s) URLs treat as `/`.
fn is_unsafe_segment(segment: &str) -> bool {
    let segment = segment.to_ascii_lowercase();
    if segment.contains('\\') || segment.contains("%5c") {
        return true;
    }
    matches!(
        segment.as_str(),
        "." | ".." | "%2e" | "%2e%2e" | ".%2e" | "%2e."
    )
}
