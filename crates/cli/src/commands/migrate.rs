//! Database migration command.
//!
//! The storefront has no tables of its own; the only schema is the
//! tower-sessions table that holds visitor sessions (and so their carts).
//!
//! # Environment Variables
//!
//! - `TAGSMITH_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string

use tagsmith_storefront::{config::StorefrontConfig, db};
use tower_sessions_sqlx_store::PostgresStore;

use super::CommandError;

/// Create or update the session store schema.
///
/// Safe to run repeatedly.
///
/// # Errors
///
/// Returns an error if no database is configured, the connection fails or
/// the schema cannot be created.
pub async fn sessions() -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env()?;
    let database_url = config.require_database_url()?;

    tracing::info!("Connecting to session database...");
    let pool = db::create_pool(database_url).await?;

    tracing::info!("Creating session table...");
    PostgresStore::new(pool)
        .migrate()
        .await
        .map_err(|e| CommandError::Migration(e.to_string()))?;

    tracing::info!("Session migrations complete");
    Ok(())
}
