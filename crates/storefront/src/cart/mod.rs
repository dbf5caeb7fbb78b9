//! Cart state engine.
//!
//! The cart is persisted as one JSON snapshot under a single storage key.
//! Every operation reads the snapshot, works on a [`tagsmith_core::Cart`], and
//! writes the whole snapshot back; nothing is cached between operations.
//!
//! - [`storage`] - The snapshot storage port and its session/in-memory adapters
//! - [`store`] - [`CartStore`], the read-modify-write operations
//! - [`commands`] - Entry points the UI layer calls for visitor actions

pub mod commands;
pub mod storage;
pub mod store;

pub use commands::{
    CommandError, CustomOrderReceipt, on_add_to_cart, on_remove_item, on_submit_custom_order,
};
pub use storage::{CART_STORAGE_KEY, CartStorage, MemoryStorage, SessionStorage, StorageError};
pub use store::CartStore;
