use crate::{ConfigError, ConfigErrorResult, DEFAULT_REDIS_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Counter store shared by every gateway/identity instance
    pub url: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_REDIS_URL),
        }
    }
}

impl RedisConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.url.starts_with("redis://") && !self.url.starts_with("rediss://") {
            return Err(ConfigError::config(format!(
                "redis.url must start with redis:// or rediss://, got {}",
                self.url
            )));
        }

        Ok(())
    }
}
