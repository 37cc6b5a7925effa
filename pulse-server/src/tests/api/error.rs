use crate::ApiError;

use pulse_auth::AuthError;
use pulse_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_unauthenticated_returns_401_with_envelope() {
    let error = ApiError::unauthenticated("Invalid token");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid token");
}

#[tokio::test]
async fn test_rate_limited_returns_429() {
    let error: ApiError = AuthError::RateLimitExceeded {
        limit: 100,
        window_secs: 900,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_upstream_returns_502() {
    let error = ApiError::upstream("Upstream service unavailable");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["message"], "Upstream service unavailable");
}

#[tokio::test]
async fn test_internal_error_hides_detail_from_client() {
    let error = ApiError::internal("connection pool exhausted on shard 7");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["message"], "Internal server error");
}

#[test]
fn test_missing_header_converts_to_unauthenticated() {
    let error: ApiError = AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_expired_token_converts_to_unauthenticated() {
    let error: ApiError = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_refresh_token_not_found_converts_to_unauthenticated() {
    let error: ApiError = AuthError::RefreshTokenNotFound {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_duplicate_user_converts_to_validation() {
    let error: ApiError = DbError::Duplicate {
        field: "user",
        value: "sam@example.com".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_counter_store_failure_converts_to_internal() {
    let error: ApiError = AuthError::CounterStore {
        message: "connection refused".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
