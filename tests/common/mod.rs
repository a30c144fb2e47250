use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tempfile::TempDir;

use checkin::database;
use checkin::error::StoreResult;
use checkin::models::{NewUser, User};

/// File-backed database so every pooled connection sees the same data.
/// The returned guard keeps the temp directory alive for the test.
pub async fn setup_pool() -> (TempDir, SqlitePool) {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("checkin.db");
    let url = format!("sqlite://{}?mode=rwc", db_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("connect test database");

    database::ensure_schema(&pool).await.expect("bootstrap schema");

    (dir, pool)
}

pub async fn create_test_user(pool: &SqlitePool, name: &str, role: &str) -> StoreResult<User> {
    checkin::database::user_repo::create_user(
        pool,
        NewUser {
            full_name: name,
            image_url: None,
            position: "Engineer",
            company: "Acme",
            role,
        },
    )
    .await
}
