use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

/// Backend target addresses for the dispatcher, one per route prefix
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub identity_url: String,
    pub post_url: String,
    pub media_url: String,
    pub search_url: String,
    /// Single timeout applied to every proxied backend call
    pub proxy_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            identity_url: String::from("http://127.0.0.1:4001"),
            post_url: String::from("http://127.0.0.1:4002"),
            media_url: String::from("http://127.0.0.1:4003"),
            search_url: String::from("http://127.0.0.1:4004"),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
        }
    }
}

impl UpstreamConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, url) in [
            ("identity_url", &self.identity_url),
            ("post_url", &self.post_url),
            ("media_url", &self.media_url),
            ("search_url", &self.search_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::upstream(format!(
                    "upstream.{} must start with http:// or https://, got {}",
                    name, url
                )));
            }

            if url.ends_with('/') {
                return Err(ConfigError::upstream(format!(
                    "upstream.{} must not end with a slash, got {}",
                    name, url
                )));
            }
        }

        if self.proxy_timeout_secs == 0 {
            return Err(ConfigError::upstream(
                "upstream.proxy_timeout_secs must be positive",
            ));
        }

        Ok(())
    }
}
