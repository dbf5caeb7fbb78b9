//! Command handlers for visitor actions.
//!
//! Each handler corresponds to one UI event: clicking "Add to Cart" on a stock
//! product, clicking "Remove" on a cart line, or submitting the custom order
//! form. Handlers know nothing about HTTP; route handlers translate requests
//! into these calls and render the returned cart.

use chrono::{DateTime, Utc};
use tagsmith_core::{
    Cart, CustomOrder, CustomOrderError, CustomQuote, LineItem, RawCustomOrder, Sku,
};
use thiserror::Error;

use super::storage::CartStorage;
use super::store::CartStore;
use crate::catalog::Catalog;

/// Errors a command can report back to the visitor.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The requested SKU is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(Sku),

    /// The custom order form did not validate.
    #[error(transparent)]
    InvalidCustomOrder(#[from] CustomOrderError),
}

/// Outcome of a successful custom order submission.
#[derive(Debug, Clone)]
pub struct CustomOrderReceipt {
    /// The validated order, for the summary shown to the visitor.
    pub order: CustomOrder,
    /// Unit price and line total.
    pub quote: CustomQuote,
    /// The line that was added.
    pub line: LineItem,
    /// The cart after the add.
    pub cart: Cart,
}

/// Add one unit of a stock product.
///
/// # Errors
///
/// Returns [`CommandError::UnknownProduct`] if `sku` is not in `catalog`.
pub async fn on_add_to_cart<S: CartStorage>(
    store: &CartStore<S>,
    catalog: &Catalog,
    sku: &Sku,
) -> Result<Cart, CommandError> {
    let product = catalog
        .find(sku)
        .ok_or_else(|| CommandError::UnknownProduct(sku.clone()))?;

    Ok(store.add_item(LineItem::stock(product)).await)
}

/// Remove the cart line at `index`; out-of-range indexes are ignored.
pub async fn on_remove_item<S: CartStorage>(store: &CartStore<S>, index: usize) -> Cart {
    store.remove_item(index).await
}

/// Validate, price and add a custom order.
///
/// Nothing is written when validation fails.
///
/// # Errors
///
/// Returns [`CommandError::InvalidCustomOrder`] with the first validation
/// problem found.
pub async fn on_submit_custom_order<S: CartStorage>(
    store: &CartStore<S>,
    form: &RawCustomOrder,
    submitted_at: DateTime<Utc>,
) -> Result<CustomOrderReceipt, CommandError> {
    let order = CustomOrder::parse(form)?;
    let quote = order.quote();
    let line = order.to_line_item(submitted_at);
    let cart = store.add_item(line.clone()).await;

    Ok(CustomOrderReceipt {
        order,
        quote,
        line,
        cart,
    })
}
