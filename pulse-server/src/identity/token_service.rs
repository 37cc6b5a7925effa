//! Issue, rotate, and revoke credential pairs.
//!
//! Rotation rides on `RefreshTokenRepository::find_and_remove`: the
//! presented value is consumed in the same statement that reads it, so
//! a value can fund at most one rotation no matter how many callers
//! present it concurrently.

use crate::ApiResult;

use pulse_auth::{AuthError, TokenSigner, generate_refresh_value};
use pulse_core::{RefreshToken, TokenPair, User};
use pulse_db::{RefreshTokenRepository, UserRepository};

use std::panic::Location;
use std::sync::Arc;

use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct TokenService {
    signer: Arc<TokenSigner>,
    pool: SqlitePool,
    refresh_ttl_days: i64,
}

impl TokenService {
    pub fn new(signer: Arc<TokenSigner>, pool: SqlitePool, refresh_ttl_days: i64) -> Self {
        Self {
            signer,
            pool,
            refresh_ttl_days,
        }
    }

    /// Issue a fresh credential pair for `user` and persist its
    /// refresh half.
    pub async fn issue_pair(&self, user: &User) -> ApiResult<TokenPair> {
        let access_token = self.signer.issue_access_token(user)?;
        let refresh_token = generate_refresh_value();

        let record = RefreshToken::new(
            refresh_token.clone(),
            user.id,
            Utc::now() + Duration::days(self.refresh_ttl_days),
        );

        RefreshTokenRepository::new(self.pool.clone())
            .insert(&record)
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Rotate `presented` into a new pair.
    ///
    /// The presented value is gone after this call regardless of
    /// outcome: consumed on success, already absent on failure.
    pub async fn refresh(&self, presented: &str) -> ApiResult<TokenPair> {
        let record = RefreshTokenRepository::new(self.pool.clone())
            .find_and_remove(presented)
            .await?
            .ok_or_else(|| AuthError::RefreshTokenNotFound {
                location: ErrorLocation::from(Location::caller()),
            })?;

        if record.is_expired(Utc::now()) {
            // The atomic removal already reclaimed the record
            return Err(AuthError::RefreshTokenExpired {
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }

        let user = UserRepository::new(self.pool.clone())
            .find_by_id(record.user_id)
            .await?
            .ok_or_else(|| AuthError::RefreshTokenInvalid {
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.issue_pair(&user).await
    }

    /// Revoke `presented`. Idempotent: revoking an unknown or already
    /// revoked value succeeds.
    pub async fn revoke(&self, presented: &str) -> ApiResult<()> {
        let removed = RefreshTokenRepository::new(self.pool.clone())
            .remove(presented)
            .await?;

        if removed == 0 {
            log::debug!("Logout with unknown refresh token (already revoked or never issued)");
        }

        Ok(())
    }
}
