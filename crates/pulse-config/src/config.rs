use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DEFAULT_GATEWAY_PORT, DEFAULT_IDENTITY_PORT,
    DatabaseConfig, LoggingConfig, RateLimitTiers, RedisConfig, ServerConfig, UpstreamConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gateway: ServerConfig,
    pub identity: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitTiers,
    pub upstream: UpstreamConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway: ServerConfig::with_port(DEFAULT_GATEWAY_PORT),
            identity: ServerConfig::with_port(DEFAULT_IDENTITY_PORT),
            database: DatabaseConfig::default(),
            redis: RedisConfig::default(),
            auth: AuthConfig::default(),
            rate_limit: RateLimitTiers::default(),
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for PULSE_CONFIG_DIR env var, else use ./.pulse/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PULSE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PULSE_CONFIG_DIR env var > ./.pulse/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("PULSE_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".pulse"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.gateway.validate("gateway")?;
        self.identity.validate("identity")?;
        self.auth.validate()?;
        self.redis.validate()?;
        self.rate_limit.validate()?;
        self.upstream.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  gateway: {}", self.gateway.bind_addr());
        info!("  identity: {}", self.identity.bind_addr());
        info!("  database: {}", self.database.path);
        info!("  redis: {}", self.redis.url);

        info!(
            "  auth: access ttl {}m, refresh ttl {}d, purge every {}s",
            self.auth.access_token_ttl_mins,
            self.auth.refresh_token_ttl_days,
            self.auth.purge_interval_secs
        );

        info!(
            "  rate_limit: general {}/{}s, sensitive {}/{}s, ingress {}/{}s",
            self.rate_limit.general.max_requests,
            self.rate_limit.general.window_secs,
            self.rate_limit.sensitive.max_requests,
            self.rate_limit.sensitive.window_secs,
            self.rate_limit.ingress.max_requests,
            self.rate_limit.ingress.window_secs
        );

        info!(
            "  upstream: posts={}, media={}, search={}, identity={}, timeout={}s",
            self.upstream.post_url,
            self.upstream.media_url,
            self.upstream.search_url,
            self.upstream.identity_url,
            self.upstream.proxy_timeout_secs
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Servers
        Self::apply_env_string("PULSE_GATEWAY_HOST", &mut self.gateway.host);
        Self::apply_env_parse("PULSE_GATEWAY_PORT", &mut self.gateway.port);
        Self::apply_env_string("PULSE_IDENTITY_HOST", &mut self.identity.host);
        Self::apply_env_parse("PULSE_IDENTITY_PORT", &mut self.identity.port);

        // Stores
        Self::apply_env_string("PULSE_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_string("PULSE_REDIS_URL", &mut self.redis.url);

        // Auth
        Self::apply_env_option_string("PULSE_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse(
            "PULSE_ACCESS_TOKEN_TTL_MINS",
            &mut self.auth.access_token_ttl_mins,
        );
        Self::apply_env_parse(
            "PULSE_REFRESH_TOKEN_TTL_DAYS",
            &mut self.auth.refresh_token_ttl_days,
        );
        Self::apply_env_parse(
            "PULSE_PURGE_INTERVAL_SECS",
            &mut self.auth.purge_interval_secs,
        );

        // Rate limit tiers
        Self::apply_env_parse(
            "PULSE_RATE_LIMIT_GENERAL_MAX",
            &mut self.rate_limit.general.max_requests,
        );
        Self::apply_env_parse(
            "PULSE_RATE_LIMIT_GENERAL_WINDOW_SECS",
            &mut self.rate_limit.general.window_secs,
        );
        Self::apply_env_parse(
            "PULSE_RATE_LIMIT_SENSITIVE_MAX",
            &mut self.rate_limit.sensitive.max_requests,
        );
        Self::apply_env_parse(
            "PULSE_RATE_LIMIT_SENSITIVE_WINDOW_SECS",
            &mut self.rate_limit.sensitive.window_secs,
        );
        Self::apply_env_parse(
            "PULSE_RATE_LIMIT_INGRESS_MAX",
            &mut self.rate_limit.ingress.max_requests,
        );
        Self::apply_env_parse(
            "PULSE_RATE_LIMIT_INGRESS_WINDOW_SECS",
            &mut self.rate_limit.ingress.window_secs,
        );

        // Upstreams
        Self::apply_env_string("PULSE_IDENTITY_SERVICE_URL", &mut self.upstream.identity_url);
        Self::apply_env_string("PULSE_POST_SERVICE_URL", &mut self.upstream.post_url);
        Self::apply_env_string("PULSE_MEDIA_SERVICE_URL", &mut self.upstream.media_url);
        Self::apply_env_string("PULSE_SEARCH_SERVICE_URL", &mut self.upstream.search_url);
        Self::apply_env_parse(
            "PULSE_PROXY_TIMEOUT_SECS",
            &mut self.upstream.proxy_timeout_secs,
        );

        // Logging
        Self::apply_env_parse("PULSE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PULSE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PULSE_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
