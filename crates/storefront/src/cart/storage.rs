//! Snapshot storage port.
//!
//! [`CartStorage`] is a plain string key-value interface. The storefront backs
//! it with the visitor's session; tests back it with [`MemoryStorage`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tower_sessions::Session;

/// Key the cart snapshot is stored under.
pub const CART_STORAGE_KEY: &str = "cart";

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The session layer failed to load or record a value.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// The backend cannot serve requests.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value storage holding cart snapshots.
pub trait CartStorage: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: String)
    -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// Storage backed by the visitor's tower-sessions session.
///
/// The session plays the role browser-local storage plays for a client-side
/// cart: one store per visitor, kept across visits by the session cookie.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    session: Session,
}

impl SessionStorage {
    /// Wrap a request's session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

impl CartStorage for SessionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.session.get::<String>(key).await?)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.session.insert(key, value).await?;
        Ok(())
    }
}

/// In-memory storage for tests and tooling.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a cart snapshot.
    #[must_use]
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(CART_STORAGE_KEY.to_string(), snapshot.into());
        Self {
            values: Arc::new(Mutex::new(values)),
        }
    }

    /// The raw cart snapshot currently stored, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(CART_STORAGE_KEY).cloned())
    }
}

impl CartStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        values.insert(key.to_string(), value);
        Ok(())
    }
}
