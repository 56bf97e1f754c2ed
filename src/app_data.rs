use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::SecretManager;
use crate::providers::{AccessProvider, PasswordProvider, PlacementValidator, TokenProvider};
use crate::stores::{CatalogStore, SpaceStore, UserStore};

/// Centralized application data, built once in main.rs
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(db, secret_manager)
///   ↓ creates once
///   ├─ db (Arc<DatabaseConnection>, shared pool handle)
///   ├─ stores: user / catalog / space
///   └─ providers: token / password / access / placement
///   ↓ wrapped in Arc<AppData>
///   ├─ AuthCoordinator::new(app_data)
///   ├─ CatalogCoordinator::new(app_data)
///   ├─ SpaceCoordinator::new(app_data)
///   └─ UserCoordinator::new(app_data)
/// ```
pub struct AppData {
    pub db: Arc<DatabaseConnection>,
    pub secret_manager: Arc<SecretManager>,
    pub user_store: Arc<UserStore>,
    pub catalog_store: Arc<CatalogStore>,
    pub space_store: Arc<SpaceStore>,
    pub token_provider: Arc<TokenProvider>,
    pub password_provider: Arc<PasswordProvider>,
    pub access_provider: Arc<AccessProvider>,
    pub placement_validator: Arc<PlacementValidator>,
}

impl AppData {
    /// Wire stores and providers around an already migrated connection
    ///
    /// Accepts an owned connection or one that is already shared.
    pub fn init(db: impl Into<Arc<DatabaseConnection>>, secret_manager: Arc<SecretManager>) -> Self {
        tracing::debug!("Initializing AppData");

        Self {
            db: db.into(),
            user_store: Arc::new(UserStore::new()),
            catalog_store: Arc::new(CatalogStore::new()),
            space_store: Arc::new(SpaceStore::new()),
            token_provider: Arc::new(TokenProvider::new(Arc::clone(&secret_manager))),
            password_provider: Arc::new(PasswordProvider::new(Arc::clone(&secret_manager))),
            access_provider: Arc::new(AccessProvider::new()),
            placement_validator: Arc::new(PlacementValidator::new()),
            secret_manager,
        }
    }
}
