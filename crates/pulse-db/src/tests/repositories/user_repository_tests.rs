use super::{seed_user, setup_db};

use crate::{DbError, UserRepository};

use pulse_core::User;

#[tokio::test]
async fn given_created_user_when_found_by_id_then_returned() {
    let pool = setup_db().await;
    let user = seed_user(&pool, "sam").await;
    let repo = UserRepository::new(pool);

    let found = repo.find_by_id(user.id).await.unwrap().unwrap();

    assert_eq!(found.user_name, "sam");
    assert_eq!(found.email, "sam@test.local");
}

#[tokio::test]
async fn given_created_user_when_found_by_email_then_returned() {
    let pool = setup_db().await;
    let user = seed_user(&pool, "sam").await;
    let repo = UserRepository::new(pool);

    let found = repo.find_by_email("sam@test.local").await.unwrap().unwrap();

    assert_eq!(found.id, user.id);
}

#[tokio::test]
async fn given_unknown_email_when_looked_up_then_absent() {
    let pool = setup_db().await;
    let repo = UserRepository::new(pool);

    assert!(repo.find_by_email("nobody@test.local").await.unwrap().is_none());
}

#[tokio::test]
async fn given_existing_user_when_same_email_registered_then_duplicate_error() {
    let pool = setup_db().await;
    seed_user(&pool, "sam").await;
    let repo = UserRepository::new(pool);

    let clone = User::new(
        "different-name".to_string(),
        "sam@test.local".to_string(),
        "$2b$12$other-hash".to_string(),
    );
    let result = repo.create(&clone).await;

    assert!(matches!(result, Err(DbError::Duplicate { .. })));
}

#[tokio::test]
async fn given_existing_user_when_matched_by_either_field_then_found() {
    let pool = setup_db().await;
    seed_user(&pool, "sam").await;
    let repo = UserRepository::new(pool);

    let by_email = repo
        .find_by_email_or_user_name("sam@test.local", "other")
        .await
        .unwrap();
    let by_name = repo
        .find_by_email_or_user_name("other@test.local", "sam")
        .await
        .unwrap();

    assert!(by_email.is_some());
    assert!(by_name.is_some());
}
