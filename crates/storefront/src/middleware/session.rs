//! Session middleware configuration.
//!
//! The visitor's session is the cart's storage medium. The server keeps
//! sessions in `PostgreSQL`; the in-memory layer exists for tests, which drive
//! the router without a database.

use std::time::Duration as StdDuration;

use sqlx::PgPool;
use tokio::task::JoinHandle;
use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::session_store::ExpiredDeletion;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, SessionStore};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "tagsmith_session";

/// How often expired sessions are purged from `PostgreSQL`.
const EXPIRED_DELETION_INTERVAL: StdDuration = StdDuration::from_secs(60 * 60);

/// Session layer backed by `PostgreSQL`.
///
/// The session table must already exist (`tagsmith migrate`).
#[must_use]
pub fn postgres_session_layer(
    store: PostgresStore,
    config: &StorefrontConfig,
) -> SessionManagerLayer<PostgresStore> {
    configure(store, config)
}

/// The `PostgreSQL` session store over `pool`.
#[must_use]
pub fn postgres_store(pool: &PgPool) -> PostgresStore {
    PostgresStore::new(pool.clone())
}

/// Purge expired sessions in the background for the life of the process.
pub fn spawn_expired_deletion(store: PostgresStore) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = store
            .continuously_delete_expired(EXPIRED_DELETION_INTERVAL)
            .await
        {
            tracing::error!(error = %e, "Expired session cleanup stopped");
        }
    })
}

/// Session layer backed by process memory, for tests and local harnesses.
///
/// Expired records are never purged and everything is lost on restart, so the
/// server binary does not use it.
#[must_use]
pub fn memory_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    configure(MemoryStore::default(), config)
}

/// Shared cookie settings.
///
/// Every response re-saves a non-empty session, so viewing the cart keeps it
/// alive as well as changing it.
fn configure<S: SessionStore>(store: S, config: &StorefrontConfig) -> SessionManagerLayer<S> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::days(config.cart_ttl_days)))
        .with_always_save(true)
        .with_secure(config.is_secure())
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
