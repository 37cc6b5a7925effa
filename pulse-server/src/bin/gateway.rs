use pulse_server::{GatewayState, RouteTable, build_gateway_router, logger};

use pulse_auth::{FixedWindowLimiter, JwtValidator, RedisCounterStore};
use pulse_config::{Config, ConfigError};

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    logger::initialize_from_config(&config)?;

    info!("Starting pulse-gateway v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;

    // Shared counter store; an unreachable store aborts startup
    info!("Connecting to counter store: {}", config.redis.url);
    let store = RedisCounterStore::connect(&config.redis.url).await?;

    let general_limiter = FixedWindowLimiter::new(
        Arc::new(store),
        "general",
        pulse_auth::RateLimitConfig {
            max_requests: config.rate_limit.general.max_requests,
            window_secs: config.rate_limit.general.window_secs,
        },
    );

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream.proxy_timeout_secs))
        .build()?;

    let state = GatewayState {
        validator: Arc::new(JwtValidator::with_hs256(secret.as_bytes())),
        client,
        routes: Arc::new(RouteTable::from_config(&config.upstream)),
    };

    let app = build_gateway_router(state, general_limiter);

    let bind_addr = config.gateway.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Gateway listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
