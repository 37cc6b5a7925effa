use crate::{ApiError, ApiResult};

use pulse_core::User;

use serde::Deserialize;

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name, unique (required)
    #[serde(rename = "userName")]
    pub user_name: String,

    /// Login email, unique (required)
    pub email: String,

    /// Plaintext password, hashed before storage (required)
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> ApiResult<()> {
        User::validate_user_name(&self.user_name)?;
        User::validate_email(&self.email)?;

        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(ApiError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(())
    }
}
