use crate::RefreshToken;

use chrono::{Duration, Utc};
use uuid::Uuid;

#[test]
fn given_future_expiry_when_checked_then_not_expired() {
    let now = Utc::now();
    let token = RefreshToken::new("abc".to_string(), Uuid::new_v4(), now + Duration::days(7));

    assert!(!token.is_expired(now));
}

#[test]
fn given_past_expiry_when_checked_then_expired() {
    let now = Utc::now();
    let token = RefreshToken::new("abc".to_string(), Uuid::new_v4(), now - Duration::seconds(1));

    assert!(token.is_expired(now));
}

#[test]
fn given_expiry_equal_to_now_when_checked_then_expired() {
    let now = Utc::now();
    let token = RefreshToken::new("abc".to_string(), Uuid::new_v4(), now);

    assert!(token.is_expired(now));
}
