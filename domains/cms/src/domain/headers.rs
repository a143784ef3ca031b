//! Header scrubbing for both directions of the proxy

use axum::http::{
    header::{
        AUTHORIZATION, CONNECTION, CONTENT_ENCODING, CONTENT_LENGTH, COOKIE, HOST, SET_COOKIE,
        TRANSFER_ENCODING,
    },
    HeaderMap, HeaderName,
};

/// Headers never copied onto the upstream request
const STRIPPED_REQUEST_HEADERS: [HeaderName; 5] =
    [HOST, CONNECTION, CONTENT_LENGTH, COOKIE, AUTHORIZATION];

/// Headers never relayed back to the client
const STRIPPED_RESPONSE_HEADERS: [HeaderName; 4] =
    [SET_COOKIE, CONTENT_ENCODING, CONTENT_LENGTH, TRANSFER_ENCODING];

/// Inbound headers to copy onto the upstream request
pub fn outbound_request_headers(inbound: &HeaderMap) -> HeaderMap {
    without(inbound, &STRIPPED_REQUEST_HEADERS)
}

/// Upstream response headers to hand back to the client
pub fn relayed_response_headers(upstream: &HeaderMap) -> HeaderMap {
    without(upstream, &STRIPPED_RESPONSE_HEADERS)
}

fn without(headers: &HeaderMap, stripped: &[HeaderName]) -> HeaderMap {
    let mut kept = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !stripped.contains(name) {
            // append, not insert: repeated headers all survive
            kept.append(name.clone(), value.clone());
        }
    }
    kept
}
