//! Tagsmith Core - cart engine types.
//!
//! This crate provides the types and pure logic shared by the Tagsmith components:
//! - `storefront` - Public storefront serving the catalog and cart
//! - `cli` - Command-line tools for migrations, catalog listing and quotes
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access, no HTTP. Persistence of the cart snapshot lives in the storefront,
//! which reads a [`Cart`] from its storage port, mutates it here, and writes it
//! back.
//!
//! # Modules
//!
//! - [`types`] - Newtypes for line item ids, prices, quantities, materials and shapes
//! - [`cart`] - The ordered line item sequence and its merge rule
//! - [`pricing`] - Custom tag pricing
//! - [`custom_order`] - Validation of custom order form input
//! - [`contact`] - Validation of contact form input

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod contact;
pub mod custom_order;
pub mod pricing;
pub mod types;

pub use cart::Cart;
pub use contact::{ContactError, ContactMessage, RawContactMessage};
pub use custom_order::{CustomOrder, CustomOrderError, RawCustomOrder};
pub use pricing::{CustomQuote, calculate_custom_price, quote};
pub use types::*;
