use pulse_auth::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use axum::http::{HeaderMap, header::AUTHORIZATION};
use error_location::ErrorLocation;

/// Extract the bearer token from the `Authorization` header.
#[track_caller]
pub fn bearer_token(headers: &HeaderMap) -> AuthErrorResult<&str> {
    let value = headers.get(AUTHORIZATION).ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let value = value.to_str().map_err(|_| AuthError::InvalidScheme {
        location: ErrorLocation::from(Location::caller()),
    })?;

    value
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })
}
