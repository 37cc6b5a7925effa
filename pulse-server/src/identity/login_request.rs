use crate::{ApiError, ApiResult};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login email (required)
    pub email: String,

    /// Plaintext password (required)
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> ApiResult<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ApiError::validation("Email and password are required"));
        }

        Ok(())
    }
}
