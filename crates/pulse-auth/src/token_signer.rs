use crate::{AuthError, Claims, Result as AuthErrorResult};

use pulse_core::User;

use std::panic::Location;

use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Signs access tokens with the process-wide HS256 secret.
///
/// Issuing is pure computation plus one signature; the persisted half
/// of the credential pair (the refresh token) is the caller's concern.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    access_ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &[u8], access_ttl_mins: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            access_ttl: Duration::minutes(access_ttl_mins),
        }
    }

    /// Create a signed access token for the given user
    #[track_caller]
    pub fn issue_access_token(&self, user: &User) -> AuthErrorResult<String> {
        let now = Utc::now();

        let claims = Claims {
            sub: user.id.to_string(),
            user_name: user.user_name.clone(),
            iat: now.timestamp(),
            exp: (now + self.access_ttl).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| AuthError::JwtEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
