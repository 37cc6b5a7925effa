mod refresh_token_repository_tests;
mod user_repository_tests;

use pulse_core::User;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub async fn setup_db() -> SqlitePool {
    // Single connection: every in-memory SQLite connection is its own
    // database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn seed_user(pool: &SqlitePool, user_name: &str) -> User {
    let user = User::new(
        user_name.to_string(),
        format!("{}@test.local", user_name),
        "$2b$12$test-hash".to_string(),
    );

    crate::UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to seed user");

    user
}
