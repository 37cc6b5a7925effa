use crate::{AuthError, CounterStore, Result as AuthErrorResult};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::info;
use redis::Script;
use redis::aio::ConnectionManager;

/// INCR plus first-write EXPIRE as one server-side script, so the
/// increment and the window start are atomic for every instance
/// sharing this store.
const INCREMENT_SCRIPT: &str = r"
local count = redis.call('INCR', KEYS[1])
if count == 1 then
    redis.call('EXPIRE', KEYS[1], ARGV[1])
end
return count
";

/// Redis-backed counter store shared by every gateway and identity
/// instance, so horizontal scaling does not multiply the limits.
#[derive(Clone)]
pub struct RedisCounterStore {
    manager: ConnectionManager,
}

impl RedisCounterStore {
    /// Connect to Redis. The services refuse to start without a
    /// reachable counter store.
    pub async fn connect(url: &str) -> AuthErrorResult<Self> {
        let client = redis::Client::open(url).map_err(|e| AuthError::CounterStore {
            message: format!("Invalid Redis URL: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let manager =
            ConnectionManager::new(client)
                .await
                .map_err(|e| AuthError::CounterStore {
                    message: format!("Redis connection failed: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        info!("Connected to Redis counter store at {}", url);

        Ok(Self { manager })
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn increment_with_expiry(&self, key: &str, window_secs: u64) -> AuthErrorResult<u64> {
        let mut conn = self.manager.clone();

        let count: i64 = Script::new(INCREMENT_SCRIPT)
            .key(key)
            .arg(window_secs)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| AuthError::CounterStore {
                message: format!("Redis INCR failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(count as u64)
    }
}
