use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Persisted single-use refresh credential.
///
/// A record is either live (lookup succeeds, not expired) or gone
/// (rotated away, revoked, or expired). Expiry is enforced both by the
/// background purge and by an explicit check at lookup time, since the
/// purge is not instantaneous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    /// Opaque random value, globally unique, primary key
    pub token: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    pub fn new(token: String, user_id: Uuid, expires_at: DateTime<Utc>) -> Self {
        Self {
            token,
            user_id,
            expires_at,
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
