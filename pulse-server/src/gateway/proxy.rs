//! Forwarding half of the dispatcher.
//!
//! The inbound request is consumed, its body buffered, and a fresh
//! backend request issued with `reqwest`. Hop-by-hop headers never
//! cross the proxy in either direction, and `x-user-id` is always
//! stripped from the inbound set so only the gateway's verified value
//! reaches a backend.

use crate::{ApiError, ApiResult, GatewayState, Route, RouteTable};

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue, header},
    response::Response,
};
use http_body_util::BodyExt;

const USER_ID_HEADER: &str = "x-user-id";

/// Headers that describe the connection rather than the message
const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Forward `request` to the backend behind `route`, stamping the
/// verified user id when present.
pub async fn forward(
    state: &GatewayState,
    route: &Route,
    user_id: Option<&str>,
    request: Request,
) -> ApiResult<Response> {
    let (parts, body) = request.into_parts();

    let url = RouteTable::target_url(route, parts.uri.path(), parts.uri.query());

    let mut headers = outbound_headers(&parts.headers);

    if let Some(id) = user_id {
        let value = HeaderValue::from_str(id)
            .map_err(|_| ApiError::internal("Verified user id is not a valid header value"))?;
        headers.insert(USER_ID_HEADER, value);
    }

    let bytes = body
        .collect()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to read request body: {}", e)))?
        .to_bytes();

    log::debug!("Proxying {} {} -> {}", parts.method, parts.uri.path(), url);

    let backend_response = state
        .client
        .request(parts.method, url)
        .headers(headers)
        .body(bytes)
        .send()
        .await
        .map_err(|e| {
            log::error!("Backend request failed: {}", e);
            ApiError::upstream("Upstream service unavailable")
        })?;

    into_axum_response(backend_response).await
}

/// Copy the inbound headers a backend should see.
///
/// The content type collapses to `application/json` unless the request
/// is a multipart upload, which must pass through with its boundary
/// parameter intact.
fn outbound_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for (name, value) in inbound {
        if HOP_BY_HOP.contains(name)
            || *name == header::HOST
            || *name == header::CONTENT_LENGTH
            || *name == USER_ID_HEADER
        {
            continue;
        }
        headers.append(name, value.clone());
    }

    let multipart = inbound
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"));

    if !multipart {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
    }

    headers
}

async fn into_axum_response(backend: reqwest::Response) -> ApiResult<Response> {
    let status = backend.status();

    let mut builder = Response::builder().status(status);

    for (name, value) in backend.headers() {
        if HOP_BY_HOP.contains(name) || *name == header::CONTENT_LENGTH {
            continue;
        }
        builder = builder.header(name, value);
    }

    let bytes = backend.bytes().await.map_err(|e| {
        log::error!("Failed to read backend response body: {}", e);
        ApiError::upstream("Upstream service unavailable")
    })?;

    builder
        .body(Body::from(bytes))
        .map_err(|e| ApiError::internal(format!("Failed to assemble response: {}", e)))
}
