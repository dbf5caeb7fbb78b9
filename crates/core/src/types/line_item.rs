//! Cart line items.

use serde::{Deserialize, Serialize};

use super::{LineItemId, Price, Quantity, StockProduct};

/// One row in the cart: a product configuration and how many of it.
///
/// Two line items describe the same configuration when both `id` and `text`
/// match. An absent `text` (stock items) and an empty `text` (a custom order
/// submitted without personalization) are different identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog SKU for stock items, generated token for custom items.
    pub id: LineItemId,
    /// Display name.
    pub name: String,
    /// Unit price at the time the item was first added.
    pub price: Price,
    /// Number of units.
    pub quantity: Quantity,
    /// Personalization text, only present on custom items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl LineItem {
    /// A single unit of a stock product.
    #[must_use]
    pub fn stock(product: &StockProduct) -> Self {
        Self {
            id: LineItemId::from(product.sku.clone()),
            name: product.name.clone(),
            price: product.price,
            quantity: Quantity::ONE,
            text: None,
        }
    }

    /// Whether `other` describes the same configuration as this item.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.id == other.id && self.text == other.text
    }

    /// Unit price times quantity, at full precision.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}
