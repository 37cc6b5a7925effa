//! Admission control middleware.
//!
//! Counts every request against a fixed window in the shared counter
//! store before any other work happens. The window is keyed by client
//! address: the first `X-Forwarded-For` entry when an edge proxy is in
//! front, else the peer socket address.

use crate::ApiError;

use pulse_auth::FixedWindowLimiter;

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// Middleware: count the request against `limiter`, rejecting with 429
/// once the window ceiling is exceeded.
pub async fn admit(
    State(limiter): State<FixedWindowLimiter>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let key = client_key(request.headers(), request.extensions().get::<ConnectInfo<SocketAddr>>());

    limiter.check(&key).await?;

    Ok(next.run(request).await)
}

/// Resolve the window key for this request.
///
/// `X-Forwarded-For` may carry a comma-separated chain; the first entry
/// is the originating client.
pub fn client_key(headers: &HeaderMap, peer: Option<&ConnectInfo<SocketAddr>>) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for")
        && let Ok(value) = forwarded.to_str()
        && let Some(first) = value.split(',').next()
    {
        let first = first.trim();
        if !first.is_empty() {
            return first.to_string();
        }
    }

    match peer {
        Some(ConnectInfo(addr)) => addr.ip().to_string(),
        None => "unknown".to_string(),
    }
}
