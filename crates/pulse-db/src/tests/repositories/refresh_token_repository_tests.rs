use super::{seed_user, setup_db};

use crate::RefreshTokenRepository;

use pulse_core::RefreshToken;

use chrono::{Duration, Utc};

#[tokio::test]
async fn given_inserted_record_when_found_and_removed_then_returned_once() {
    let pool = setup_db().await;
    let user = seed_user(&pool, "sam").await;
    let repo = RefreshTokenRepository::new(pool);

    let record = RefreshToken::new(
        "token-a".to_string(),
        user.id,
        Utc::now() + Duration::days(7),
    );
    repo.insert(&record).await.unwrap();

    let found = repo.find_and_remove("token-a").await.unwrap().unwrap();

    // Timestamps persist at second precision
    assert_eq!(found.token, record.token);
    assert_eq!(found.user_id, record.user_id);
    assert_eq!(found.expires_at.timestamp(), record.expires_at.timestamp());
}

#[tokio::test]
async fn given_removed_record_when_found_again_then_absent() {
    let pool = setup_db().await;
    let user = seed_user(&pool, "sam").await;
    let repo = RefreshTokenRepository::new(pool);

    let record = RefreshToken::new(
        "token-a".to_string(),
        user.id,
        Utc::now() + Duration::days(7),
    );
    repo.insert(&record).await.unwrap();

    assert!(repo.find_and_remove("token-a").await.unwrap().is_some());
    assert!(repo.find_and_remove("token-a").await.unwrap().is_none());
}

#[tokio::test]
async fn given_unknown_token_when_found_and_removed_then_absent() {
    let pool = setup_db().await;
    let repo = RefreshTokenRepository::new(pool);

    let found = repo.find_and_remove("no-such-token").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn given_unknown_token_when_removed_then_zero_rows_and_no_error() {
    let pool = setup_db().await;
    let repo = RefreshTokenRepository::new(pool);

    let removed = repo.remove("no-such-token").await.unwrap();

    assert_eq!(removed, 0);
}

#[tokio::test]
async fn given_multiple_tokens_per_user_when_counted_then_all_live() {
    let pool = setup_db().await;
    let user = seed_user(&pool, "sam").await;
    let repo = RefreshTokenRepository::new(pool);

    // One caller may hold several live refresh tokens (one per device)
    for n in 0..3 {
        let record = RefreshToken::new(
            format!("token-{}", n),
            user.id,
            Utc::now() + Duration::days(7),
        );
        repo.insert(&record).await.unwrap();
    }

    assert_eq!(repo.count_for_user(user.id).await.unwrap(), 3);
}

#[tokio::test]
async fn given_expired_and_live_records_when_purged_then_only_expired_removed() {
    let pool = setup_db().await;
    let user = seed_user(&pool, "sam").await;
    let repo = RefreshTokenRepository::new(pool);

    let now = Utc::now();
    let expired = RefreshToken::new("stale".to_string(), user.id, now - Duration::days(1));
    let live = RefreshToken::new("fresh".to_string(), user.id, now + Duration::days(7));
    repo.insert(&expired).await.unwrap();
    repo.insert(&live).await.unwrap();

    let purged = repo.purge_expired(now).await.unwrap();

    assert_eq!(purged, 1);
    assert!(repo.find_and_remove("stale").await.unwrap().is_none());
    assert!(repo.find_and_remove("fresh").await.unwrap().is_some());
}

#[tokio::test]
async fn given_duplicate_token_value_when_inserted_then_rejected() {
    let pool = setup_db().await;
    let user = seed_user(&pool, "sam").await;
    let repo = RefreshTokenRepository::new(pool);

    let record = RefreshToken::new(
        "token-a".to_string(),
        user.id,
        Utc::now() + Duration::days(7),
    );
    repo.insert(&record).await.unwrap();

    let result = repo.insert(&record).await;

    assert!(result.is_err());
}
