//! Core types for Tagsmith.
//!
//! This module provides type-safe wrappers for the cart domain.

pub mod email;
pub mod id;
pub mod line_item;
pub mod material;
pub mod price;
pub mod product;
pub mod quantity;
pub mod shape;

pub use email::{Email, EmailError};
pub use id::*;
pub use line_item::LineItem;
pub use material::Material;
pub use price::Price;
pub use product::StockProduct;
pub use quantity::{Quantity, QuantityError};
pub use shape::{Shape, ShapeError};
