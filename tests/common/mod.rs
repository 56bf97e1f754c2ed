// Common test utilities for integration tests

use metaverse_backend::AppData;
use metaverse_backend::api::build_app;
use metaverse_backend::config::SecretManager;
use migration::{Migrator, MigratorTrait};
use poem::Route;
use poem::test::TestClient;
use sea_orm::{Database, DatabaseConnection};
use serde_json::json;
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "integration-secret-key-minimum-32-chars";
pub const TEST_PEPPER: &str = "integration-pepper-value";

pub fn test_secret_manager() -> Arc<SecretManager> {
    Arc::new(SecretManager::new(TEST_JWT_SECRET, TEST_PEPPER).expect("Failed to build SecretManager"))
}

/// Creates an in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Full HTTP application over a fresh database
pub async fn test_client() -> (TestClient<Route>, Arc<AppData>) {
    let app_data = Arc::new(AppData::init(setup_test_db().await, test_secret_manager()));
    let app = build_app(Arc::clone(&app_data), "http://localhost:3000/api/v1");

    (TestClient::new(app), app_data)
}

/// Sign up and sign in, returning the user id and a bearer token
pub async fn register(client: &TestClient<Route>, username: &str, role: &str) -> (String, String) {
    let signup = client
        .post("/api/v1/signup")
        .body_json(&json!({ "username": username, "password": "password123", "type": role }))
        .send()
        .await;
    signup.assert_status_is_ok();
    let user_id = signup
        .json()
        .await
        .value()
        .object()
        .get("userId")
        .string()
        .to_string();

    let signin = client
        .post("/api/v1/signin")
        .body_json(&json!({ "username": username, "password": "password123" }))
        .send()
        .await;
    signin.assert_status_is_ok();
    let token = signin
        .json()
        .await
        .value()
        .object()
        .get("token")
        .string()
        .to_string();

    (user_id, token)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
