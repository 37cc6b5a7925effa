#![allow(dead_code)]

//! Test infrastructure for pulse-server integration tests

use pulse_auth::{
    FixedWindowLimiter, InMemoryCounterStore, JwtValidator, RateLimitConfig, TokenSigner,
};
use pulse_config::UpstreamConfig;
use pulse_server::{GatewayState, IdentityState, RouteTable, TokenService};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, header},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-0123456789abcdef";

/// Create a test pool with in-memory SQLite.
///
/// A single connection, because every `:memory:` connection is its own
/// database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/pulse-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_limiter(tier: &'static str, max_requests: u32, window_secs: u64) -> FixedWindowLimiter {
    FixedWindowLimiter::new(
        Arc::new(InMemoryCounterStore::new()),
        tier,
        RateLimitConfig {
            max_requests,
            window_secs,
        },
    )
}

pub fn test_signer() -> Arc<TokenSigner> {
    Arc::new(TokenSigner::new(TEST_SECRET, 60))
}

/// IdentityState over `pool`, with ceilings high enough to stay out of
/// the way
pub fn identity_state_with_pool(pool: SqlitePool) -> IdentityState {
    IdentityState {
        pool: pool.clone(),
        tokens: TokenService::new(test_signer(), pool, 7),
        ingress_limiter: test_limiter("ingress", 10_000, 1),
        sensitive_limiter: test_limiter("sensitive", 10_000, 900),
    }
}

pub async fn create_identity_state() -> IdentityState {
    identity_state_with_pool(create_test_pool().await)
}

/// GatewayState pointed at `upstream`, validating with the shared test
/// secret
pub fn gateway_state(upstream: &UpstreamConfig) -> GatewayState {
    GatewayState {
        validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        client: reqwest::Client::new(),
        routes: Arc::new(RouteTable::from_config(upstream)),
    }
}

/// POST a JSON body and return (status, parsed body)
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (axum::http::StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Register a user and return the response body (assumes success)
pub async fn register_user(app: &Router, user_name: &str, email: &str) -> serde_json::Value {
    let (status, json) = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({
            "userName": user_name,
            "email": email,
            "password": "hunter22",
        }),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::CREATED, "register failed: {}", json);

    json
}
