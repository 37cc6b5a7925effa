use pulse_server::{IdentityState, TokenService, build_identity_router, identity::purge, logger};

use pulse_auth::{FixedWindowLimiter, RedisCounterStore, TokenSigner};
use pulse_config::{Config, ConfigError};

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    logger::initialize_from_config(&config)?;

    info!("Starting pulse-identity v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    info!("Running database migrations...");
    sqlx::migrate!("../crates/pulse-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Shared counter store; an unreachable store aborts startup
    info!("Connecting to counter store: {}", config.redis.url);
    let store = Arc::new(RedisCounterStore::connect(&config.redis.url).await?);

    let ingress_limiter = FixedWindowLimiter::new(
        store.clone(),
        "ingress",
        pulse_auth::RateLimitConfig {
            max_requests: config.rate_limit.ingress.max_requests,
            window_secs: config.rate_limit.ingress.window_secs,
        },
    );

    let sensitive_limiter = FixedWindowLimiter::new(
        store,
        "sensitive",
        pulse_auth::RateLimitConfig {
            max_requests: config.rate_limit.sensitive.max_requests,
            window_secs: config.rate_limit.sensitive.window_secs,
        },
    );

    let signer = Arc::new(TokenSigner::new(
        secret.as_bytes(),
        config.auth.access_token_ttl_mins,
    ));

    let tokens = TokenService::new(signer, pool.clone(), config.auth.refresh_token_ttl_days);

    let _purge_task = purge::spawn(pool.clone(), config.auth.purge_interval_secs);

    let state = IdentityState {
        pool,
        tokens,
        ingress_limiter,
        sensitive_limiter,
    };

    let app = build_identity_router(state);

    let bind_addr = config.identity.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Identity service listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
