//! Database connection and schema bootstrap

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::config::Config;
use crate::entity::products;
use crate::error::DomainError;

/// Lifetime for the single connection that holds an in-memory database.
/// Recycling it would silently drop every table.
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Open a connection pool for the configured database
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DomainError> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.max_connections(config.pool_size());

    if config.is_in_memory() {
        options
            .min_connections(1)
            .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME)
            .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME);
    }

    Database::connect(options)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))
}

/// Create the `products` table if it does not exist yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut create_products = schema.create_table_from_entity(products::Entity);
    create_products.if_not_exists();

    db.execute(backend.build(&create_products))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    tracing::debug!(backend = ?backend, "Schema ready");
    Ok(())
}
