//! The credential store: persisted refresh-token records.
//!
//! This repository is the only writer of `pulse_refresh_tokens`. The
//! single-use rotation invariant rests on `find_and_remove` being one
//! `DELETE ... RETURNING` statement: two concurrent refresh calls for
//! the same value race on the row delete and at most one gets the
//! record back. There is no separate read-then-delete window.

use crate::{DbError, Result as DbErrorResult};

use pulse_core::RefreshToken;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct RefreshTokenRepository {
    pool: SqlitePool,
}

impl RefreshTokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, record: &RefreshToken) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO pulse_refresh_tokens (token, user_id, expires_at, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(&record.token)
        .bind(record.user_id.to_string())
        .bind(record.expires_at.timestamp())
        .bind(record.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Atomically look up and delete the record for `token`.
    ///
    /// Returns the record if it existed (possibly already past its
    /// expiry; the caller decides how to surface that). Returns `None`
    /// if it never existed, was already rotated away, or was revoked.
    pub async fn find_and_remove(&self, token: &str) -> DbErrorResult<Option<RefreshToken>> {
        let row = sqlx::query(
            r#"
              DELETE FROM pulse_refresh_tokens
              WHERE token = ?
              RETURNING token, user_id, expires_at, created_at
              "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_refresh_token).transpose()
    }

    /// Delete the record for `token` if present. Idempotent: absence
    /// is not an error.
    pub async fn remove(&self, token: &str) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM pulse_refresh_tokens WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Background reclamation of records past their expiry
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> DbErrorResult<u64> {
        let cutoff = now.timestamp();

        let result = sqlx::query("DELETE FROM pulse_refresh_tokens WHERE expires_at <= ?")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn count_for_user(&self, user_id: Uuid) -> DbErrorResult<i64> {
        let count =
            sqlx::query_scalar("SELECT COUNT(*) FROM pulse_refresh_tokens WHERE user_id = ?")
                .bind(user_id.to_string())
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

#[track_caller]
fn row_to_refresh_token(row: SqliteRow) -> DbErrorResult<RefreshToken> {
    let user_id: String = row.try_get("user_id")?;
    let expires_at: i64 = row.try_get("expires_at")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(RefreshToken {
        token: row.try_get("token")?,
        user_id: Uuid::parse_str(&user_id).map_err(|e| DbError::CorruptRow {
            message: format!("Invalid UUID in refresh_token.user_id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        expires_at: DateTime::from_timestamp(expires_at, 0).ok_or_else(|| DbError::CorruptRow {
            message: "Invalid timestamp in refresh_token.expires_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::CorruptRow {
            message: "Invalid timestamp in refresh_token.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}
