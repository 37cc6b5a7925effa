//! REST API error types
//!
//! These errors produce the `{success, message}` JSON envelope with
//! the status code the client is expected to act on: 401 means
//! re-authenticate, 429 means back off, 502 means the backend behind
//! the gateway is unreachable.

use crate::MessageResponse;

use pulse_auth::AuthError;
use pulse_core::CoreError;
use pulse_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed, or expired credential (401)
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// Admission ceiling exceeded (429)
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error, duplicate user, or bad login (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// No route for the requested path (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Backend behind the gateway unreachable or timed out (502)
    #[error("Upstream unavailable: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthenticated<S: Into<String>>(message: S) -> Self {
        ApiError::Unauthenticated {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ApiError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        ApiError::Upstream {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status_code();

        let message = match self {
            ApiError::Unauthenticated { message, .. } => message,
            ApiError::RateLimited { message, .. } => message,
            ApiError::Validation { message, .. } => message,
            ApiError::NotFound { message, .. } => message,
            ApiError::Upstream { message, .. } => message,
            // Internal detail is logged above, never sent to the client
            ApiError::Internal { .. } => "Internal server error".to_string(),
        };

        (status, Json(MessageResponse::failed(message))).into_response()
    }
}

/// Convert auth-layer errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::MissingHeader { .. } => ApiError::Unauthenticated {
                message: "Authentication required".to_string(),
                location,
            },
            AuthError::InvalidScheme { .. } => ApiError::Unauthenticated {
                message: "Authentication required".to_string(),
                location,
            },
            AuthError::InvalidToken { .. }
            | AuthError::JwtDecode { .. }
            | AuthError::InvalidClaim { .. } => ApiError::Unauthenticated {
                message: "Invalid token".to_string(),
                location,
            },
            AuthError::TokenExpired { .. } => ApiError::Unauthenticated {
                message: "Token expired".to_string(),
                location,
            },
            AuthError::RefreshTokenNotFound { .. }
            | AuthError::RefreshTokenExpired { .. }
            | AuthError::RefreshTokenInvalid { .. } => ApiError::Unauthenticated {
                message: "Invalid or expired refresh token".to_string(),
                location,
            },
            AuthError::RateLimitExceeded { .. } => ApiError::RateLimited {
                message: "Too many requests, please try again later".to_string(),
                location,
            },
            AuthError::JwtEncode { source, .. } => ApiError::Internal {
                message: format!("Token signing failed: {}", source),
                location,
            },
            AuthError::CounterStore { message, .. } => ApiError::Internal {
                message: format!("Counter store failure: {}", message),
                location,
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::Duplicate { .. } => ApiError::Validation {
                message: "User already exists".to_string(),
                location,
            },
            // Store detail stays in the logs
            other => {
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        let message = match e {
            CoreError::InvalidUserName { .. } => "Invalid user name".to_string(),
            CoreError::InvalidEmail { .. } => "Invalid email address".to_string(),
            CoreError::Validation { message, .. } => message,
            CoreError::Uuid { .. } => "Invalid identifier".to_string(),
        };

        ApiError::Validation { message, location }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
