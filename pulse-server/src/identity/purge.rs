//! Background reclamation of expired refresh tokens.
//!
//! Expiry is also enforced at lookup time; this task only bounds the
//! table size.

use pulse_db::RefreshTokenRepository;

use std::time::Duration;

use chrono::Utc;
use log::{info, warn};
use sqlx::SqlitePool;
use tokio::task::JoinHandle;

/// Spawn the interval-driven purge task. `interval_secs == 0` disables
/// it.
pub fn spawn(pool: SqlitePool, interval_secs: u64) -> Option<JoinHandle<()>> {
    if interval_secs == 0 {
        info!("Refresh token purge disabled");
        return None;
    }

    info!("Refresh token purge every {}s", interval_secs);

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        // The immediate first tick would purge at startup; skip it
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let repo = RefreshTokenRepository::new(pool.clone());
            match repo.purge_expired(Utc::now()).await {
                Ok(0) => {}
                Ok(purged) => info!("Purged {} expired refresh tokens", purged),
                Err(e) => warn!("Refresh token purge failed: {}", e),
            }
        }
    }))
}
