//! Response middleware for cooperating HTTP/2 servers.
//!
//! # Responsibilities
//! - Look up preload resources for the request path
//! - Append one `Link` header per resource to the response
//!
//! # Design Decisions
//! - Headers are appended, never replacing `Link` headers set downstream
//! - The server in front decides whether to turn the headers into pushes

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::manifest::PushManifest;

/// Append preload `Link` headers for every push resource associated with
/// the request path.
///
/// Wire up with `axum::middleware::from_fn_with_state`, sharing the
/// compiled manifest behind an `Arc`.
pub async fn push_headers(
    State(manifest): State<Arc<PushManifest>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;

    for value in manifest.link_headers(&path) {
        match HeaderValue::from_str(&value) {
            Ok(value) => {
                response.headers_mut().append(header::LINK, value);
            }
            Err(_) => {
                // Unreachable for values generated from a compiled
                // manifest: resource paths are validated URI paths.
                warn!(header = %value, "skipping unrepresentable Link header");
            }
        }
    }

    response
}
