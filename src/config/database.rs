use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::config::BootstrapSettings;
use crate::errors::InternalError;
use crate::errors::internal::DatabaseError;

/// Connect to the main database
///
/// Does NOT run migrations, call `migrate_database` separately.
pub async fn init_database(bootstrap_settings: &BootstrapSettings) -> Result<DatabaseConnection, InternalError> {
    let database_url = bootstrap_settings.database_url();

    let db = Database::connect(database_url)
        .await
        .map_err(|source| DatabaseError::Connect {
            url: database_url.to_string(),
            source,
        })?;

    tracing::debug!("Connected to database: {}", database_url);

    Ok(db)
}

/// Apply all pending schema migrations
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration { source })?;

    tracing::info!("Database migrations applied");

    Ok(())
}
