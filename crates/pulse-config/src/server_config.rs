use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, MIN_PORT};

use serde::Deserialize;

/// Bind address for one service. The gateway and the identity service
/// each carry their own copy with different default ports.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: 0,
        }
    }
}

impl ServerConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self, section: &str) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign" - OS picks an available port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::config(format!(
                "{}.port must be 0 (auto) or >= {}, got {}",
                section, MIN_PORT, self.port
            )));
        }

        Ok(())
    }
}
