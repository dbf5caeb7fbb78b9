//! Cart store: read-modify-write over a snapshot storage port.

use tagsmith_core::{Cart, LineItem, Price};

use super::storage::{CART_STORAGE_KEY, CartStorage};

/// Cart operations over an injected [`CartStorage`].
///
/// Every call starts from a fresh read of the stored snapshot. Storage failures
/// never reach the caller: an unreadable snapshot reads as an empty cart and a
/// failed write leaves the cart as it was read.
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store over `storage`.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the current cart.
    ///
    /// A missing snapshot is an empty cart. A snapshot that cannot be loaded or
    /// parsed is logged and also treated as an empty cart.
    pub async fn read_cart(&self) -> Cart {
        let snapshot = match self.storage.get(CART_STORAGE_KEY).await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load cart snapshot, using empty cart");
                return Cart::new();
            }
        };

        Cart::from_snapshot(&snapshot).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Discarding unreadable cart snapshot");
            Cart::new()
        })
    }

    /// Add a line, merging with an existing line of the same `(id, text)`.
    ///
    /// Returns the cart as persisted.
    pub async fn add_item(&self, candidate: LineItem) -> Cart {
        let current = self.read_cart().await;
        let mut updated = current.clone();

        tracing::debug!(id = %candidate.id, quantity = %candidate.quantity, "Adding cart line");
        let id = candidate.id.clone();
        if !updated.add(candidate) {
            tracing::warn!(%id, "Refusing cart merge that overflows the line quantity");
            return current;
        }

        self.persist(updated, current).await
    }

    /// Remove the line at `index` in display order.
    ///
    /// An out-of-range index leaves the cart untouched and writes nothing.
    /// Returns the cart as persisted.
    pub async fn remove_item(&self, index: usize) -> Cart {
        let current = self.read_cart().await;
        let mut updated = current.clone();

        match updated.remove(index) {
            Some(removed) => {
                tracing::debug!(index, id = %removed.id, "Removed cart line");
                self.persist(updated, current).await
            }
            None => {
                tracing::debug!(index, lines = current.len(), "Ignoring out-of-range cart removal");
                current
            }
        }
    }

    /// Total units across all lines, for the cart badge.
    pub async fn total_quantity(&self) -> u64 {
        self.read_cart().await.total_quantity()
    }

    /// Cart total rounded to cents for display.
    pub async fn total_price(&self) -> Price {
        self.read_cart().await.total_price().rounded()
    }

    /// Write `updated`, falling back to `previous` if the write fails.
    async fn persist(&self, updated: Cart, previous: Cart) -> Cart {
        let snapshot = match updated.to_snapshot() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize cart snapshot");
                return previous;
            }
        };

        match self.storage.set(CART_STORAGE_KEY, snapshot).await {
            Ok(()) => updated,
            Err(e) => {
                tracing::error!(error = %e, "Failed to save cart snapshot");
                previous
            }
        }
    }
}
