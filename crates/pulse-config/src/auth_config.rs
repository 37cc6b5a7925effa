use crate::{ConfigError, ConfigErrorResult, MIN_JWT_SECRET_BYTES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret shared by the gateway and identity service.
    /// Required; there is no unauthenticated mode.
    pub jwt_secret: Option<String>,
    /// Access token lifetime in minutes
    pub access_token_ttl_mins: i64,
    /// Refresh token lifetime in days
    pub refresh_token_ttl_days: i64,
    /// Interval between expired-refresh-token purge runs (0 = disabled)
    pub purge_interval_secs: u64,
}

pub const DEFAULT_ACCESS_TOKEN_TTL_MINS: i64 = 60;
pub const DEFAULT_REFRESH_TOKEN_TTL_DAYS: i64 = 7;
pub const DEFAULT_PURGE_INTERVAL_SECS: u64 = 3600;

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_token_ttl_mins: DEFAULT_ACCESS_TOKEN_TTL_MINS,
            refresh_token_ttl_days: DEFAULT_REFRESH_TOKEN_TTL_DAYS,
            purge_interval_secs: DEFAULT_PURGE_INTERVAL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set PULSE_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_BYTES => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} bytes",
                    MIN_JWT_SECRET_BYTES
                )));
            }
            Some(_) => {}
        }

        if self.access_token_ttl_mins <= 0 {
            return Err(ConfigError::auth(format!(
                "auth.access_token_ttl_mins must be positive, got {}",
                self.access_token_ttl_mins
            )));
        }

        if self.refresh_token_ttl_days <= 0 {
            return Err(ConfigError::auth(format!(
                "auth.refresh_token_ttl_days must be positive, got {}",
                self.refresh_token_ttl_days
            )));
        }

        Ok(())
    }
}
