use crate::{AuthError, CounterStore, RateLimitConfig, Result as AuthErrorResult};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;

/// Fixed-window admission control over a shared counter store.
///
/// Best-effort protection against floods and brute-force attempts,
/// not a hard security boundary.
#[derive(Clone)]
pub struct FixedWindowLimiter {
    store: Arc<dyn CounterStore>,
    config: RateLimitConfig,
    tier: &'static str,
}

impl FixedWindowLimiter {
    pub fn new(store: Arc<dyn CounterStore>, tier: &'static str, config: RateLimitConfig) -> Self {
        Self {
            store,
            config,
            tier,
        }
    }

    /// Count this request against the caller's window, rejecting once
    /// the ceiling is exceeded
    pub async fn check(&self, client_key: &str) -> AuthErrorResult<()> {
        let key = format!("rl:{}:{}", self.tier, client_key);

        let count = self
            .store
            .increment_with_expiry(&key, self.config.window_secs)
            .await?;

        if count > u64::from(self.config.max_requests) {
            return Err(AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
