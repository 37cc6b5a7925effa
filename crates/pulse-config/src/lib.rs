mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod redis_config;
mod server_config;
mod upstream_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::{RateLimitConfig, RateLimitTiers};
pub use redis_config::RedisConfig;
pub use server_config::ServerConfig;
pub use upstream_config::UpstreamConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_GATEWAY_PORT: u16 = 3000;
const DEFAULT_IDENTITY_PORT: u16 = 4001;
const DEFAULT_DATABASE_FILENAME: &str = "pulse.db";
const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const MIN_PORT: u16 = 1024;
const MIN_JWT_SECRET_BYTES: usize = 32;

#[cfg(test)]
mod tests;
