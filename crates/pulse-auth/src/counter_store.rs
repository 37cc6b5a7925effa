use crate::Result as AuthErrorResult;

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

/// Shared window counters behind the fixed-window limiters.
///
/// The contract is a single atomic increment-with-expiry: the returned
/// count is the value after this call's increment, for a window that
/// started at most `window_secs` ago. There is no separate read; the
/// increment result is the ceiling-check input, which closes the race
/// where two concurrent requests both observe "under limit".
#[async_trait]
pub trait CounterStore: Send + Sync {
    async fn increment_with_expiry(&self, key: &str, window_secs: u64) -> AuthErrorResult<u64>;
}

struct Window {
    count: u64,
    expires_at: Instant,
}

/// Process-local counter store for tests and single-node deployments.
///
/// Horizontal scaling multiplies the effective limit with this store;
/// multi-instance deployments must use [`crate::RedisCounterStore`].
#[derive(Default)]
pub struct InMemoryCounterStore {
    windows: Mutex<HashMap<String, Window>>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn increment_with_expiry(&self, key: &str, window_secs: u64) -> AuthErrorResult<u64> {
        let now = Instant::now();
        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());

        // Drop dead windows once the map grows; bounds memory without
        // a background task.
        if windows.len() > 1024 {
            windows.retain(|_, w| w.expires_at > now);
        }

        let window = windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            expires_at: now + Duration::from_secs(window_secs),
        });

        if window.expires_at <= now {
            window.count = 0;
            window.expires_at = now + Duration::from_secs(window_secs);
        }

        window.count += 1;

        Ok(window.count)
    }
}
