use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::Serialize;
use uuid::Uuid;

pub const MIN_USER_NAME_LENGTH: usize = 3;
pub const MAX_USER_NAME_LENGTH: usize = 50;
pub const MAX_EMAIL_LENGTH: usize = 254;

/// A registered caller identity.
///
/// The password hash never leaves the identity service; it is excluded
/// from serialization entirely.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(user_name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Validate user name shape (length, no surrounding whitespace)
    #[track_caller]
    pub fn validate_user_name(value: &str) -> CoreErrorResult<()> {
        if value.len() < MIN_USER_NAME_LENGTH
            || value.len() > MAX_USER_NAME_LENGTH
            || value.trim() != value
        {
            return Err(CoreError::InvalidUserName {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Minimal email shape check; real deliverability is not our problem
    #[track_caller]
    pub fn validate_email(value: &str) -> CoreErrorResult<()> {
        let well_formed = value.len() <= MAX_EMAIL_LENGTH
            && value.split('@').count() == 2
            && value.split('@').all(|part| !part.is_empty());

        if !well_formed {
            return Err(CoreError::InvalidEmail {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
