// Test utilities shared across unit tests
// Only compiled when running tests

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, Transaction};
use std::sync::Arc;

use crate::app_data::AppData;
use crate::config::SecretManager;
use crate::types::internal::{Claims, RequestContext, Role};

pub const TEST_JWT_SECRET: &str = "test-secret-key-minimum-32-characters-long";
pub const TEST_PEPPER: &str = "test-pepper-for-unit-tests";

pub fn test_secret_manager() -> Arc<SecretManager> {
    Arc::new(SecretManager::new(TEST_JWT_SECRET, TEST_PEPPER).expect("Failed to build test SecretManager"))
}

/// Fresh in-memory database with all migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None).await.expect("Failed to run migrations");

    db
}

pub async fn setup_test_app_data() -> Arc<AppData> {
    let db = setup_test_db().await;
    Arc::new(AppData::init(db, test_secret_manager()))
}

/// AppData over a shared connection, e.g. a sea-orm mock the test reads back
pub fn app_data_with(db: Arc<DatabaseConnection>) -> Arc<AppData> {
    Arc::new(AppData::init(db, test_secret_manager()))
}

/// Recorded statements of a mock connection once every other holder is gone
pub fn mock_transaction_log(db: Arc<DatabaseConnection>) -> Vec<Transaction> {
    Arc::try_unwrap(db)
        .expect("mock connection still shared")
        .into_transaction_log()
}

/// Authenticated API context for `user_id`
pub fn ctx_for(user_id: &str, role: Role) -> RequestContext {
    RequestContext::new()
        .with_auth(Claims {
            sub: user_id.to_string(),
            role,
            exp: i64::MAX,
            iat: 0,
        })
        .with_actor_id(user_id)
}
