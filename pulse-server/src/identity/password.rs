//! bcrypt helpers.
//!
//! Hashing and verification each cost tens of milliseconds on purpose;
//! both run on the blocking pool so the async runtime keeps serving
//! other requests.

use crate::{ApiError, ApiResult};

pub async fn hash(password: String) -> ApiResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| ApiError::internal(format!("Hashing task failed: {}", e)))?
        .map_err(|e| {
            log::error!("bcrypt hash failed: {}", e);
            ApiError::internal("Password hashing failed")
        })
}

pub async fn verify(password: String, password_hash: String) -> ApiResult<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|e| ApiError::internal(format!("Verification task failed: {}", e)))?
        .map_err(|e| {
            log::error!("bcrypt verify failed: {}", e);
            ApiError::internal("Password verification failed")
        })
}
