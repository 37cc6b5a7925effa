use crate::{ApiError, ApiResult};

use serde::Deserialize;

/// Body shared by the refresh and logout endpoints.
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: String,
}

impl RefreshTokenRequest {
    pub fn validate(&self) -> ApiResult<()> {
        if self.refresh_token.is_empty() {
            return Err(ApiError::validation("Refresh token missing"));
        }

        Ok(())
    }
}
