use crate::gateway::bearer::bearer_token;

use pulse_auth::AuthError;

use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};

#[test]
fn test_valid_bearer_header() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));

    assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
}

#[test]
fn test_missing_header() {
    let headers = HeaderMap::new();

    let result = bearer_token(&headers);
    assert!(matches!(result, Err(AuthError::MissingHeader { .. })));
}

#[test]
fn test_wrong_scheme() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));

    let result = bearer_token(&headers);
    assert!(matches!(result, Err(AuthError::InvalidScheme { .. })));
}

#[test]
fn test_bearer_with_empty_token() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));

    let result = bearer_token(&headers);
    assert!(matches!(result, Err(AuthError::InvalidScheme { .. })));
}
