//! Stock catalog products.

use serde::{Deserialize, Serialize};

use super::{Price, Shape, Sku};

/// A ready-made tag offered at a fixed price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockProduct {
    pub sku: Sku,
    pub name: String,
    pub shape: Shape,
    pub description: String,
    pub price: Price,
}
