use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Rate limit constraints
pub const MIN_RATE_LIMIT_REQUESTS: u32 = 1;
pub const MAX_RATE_LIMIT_REQUESTS: u32 = 10000;

pub const MIN_RATE_LIMIT_WINDOW_SECS: u64 = 1;
pub const MAX_RATE_LIMIT_WINDOW_SECS: u64 = 3600;

// Tier defaults
pub const DEFAULT_GENERAL_MAX_REQUESTS: u32 = 100;
pub const DEFAULT_GENERAL_WINDOW_SECS: u64 = 900;
pub const DEFAULT_SENSITIVE_MAX_REQUESTS: u32 = 50;
pub const DEFAULT_SENSITIVE_WINDOW_SECS: u64 = 900;
pub const DEFAULT_INGRESS_MAX_REQUESTS: u32 = 10;
pub const DEFAULT_INGRESS_WINDOW_SECS: u64 = 1;

/// One fixed-window tier: `max_requests` per `window_secs`, keyed by
/// client address.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl RateLimitConfig {
    pub fn validate(&self, tier: &str) -> ConfigErrorResult<()> {
        if self.max_requests < MIN_RATE_LIMIT_REQUESTS
            || self.max_requests > MAX_RATE_LIMIT_REQUESTS
        {
            return Err(ConfigError::config(format!(
                "rate_limit.{}.max_requests must be {}-{}, got {}",
                tier, MIN_RATE_LIMIT_REQUESTS, MAX_RATE_LIMIT_REQUESTS, self.max_requests
            )));
        }

        if self.window_secs < MIN_RATE_LIMIT_WINDOW_SECS
            || self.window_secs > MAX_RATE_LIMIT_WINDOW_SECS
        {
            return Err(ConfigError::config(format!(
                "rate_limit.{}.window_secs must be {}-{}, got {}",
                tier, MIN_RATE_LIMIT_WINDOW_SECS, MAX_RATE_LIMIT_WINDOW_SECS, self.window_secs
            )));
        }

        Ok(())
    }
}

/// The three admission-control tiers.
///
/// - `general`: every request through the gateway
/// - `sensitive`: register/login on top of the ingress tier
/// - `ingress`: every request into the identity service
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitTiers {
    pub general: RateLimitConfig,
    pub sensitive: RateLimitConfig,
    pub ingress: RateLimitConfig,
}

impl Default for RateLimitTiers {
    fn default() -> Self {
        Self {
            general: RateLimitConfig {
                max_requests: DEFAULT_GENERAL_MAX_REQUESTS,
                window_secs: DEFAULT_GENERAL_WINDOW_SECS,
            },
            sensitive: RateLimitConfig {
                max_requests: DEFAULT_SENSITIVE_MAX_REQUESTS,
                window_secs: DEFAULT_SENSITIVE_WINDOW_SECS,
            },
            ingress: RateLimitConfig {
                max_requests: DEFAULT_INGRESS_MAX_REQUESTS,
                window_secs: DEFAULT_INGRESS_WINDOW_SECS,
            },
        }
    }
}

impl RateLimitTiers {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.general.validate("general")?;
        self.sensitive.validate("sensitive")?;
        self.ingress.validate("ingress")?;

        Ok(())
    }
}
