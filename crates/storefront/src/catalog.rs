//! Fixed catalog of stock tags.
//!
//! The catalog is read-only input to rendering and to the add-to-cart command;
//! nothing in the storefront mutates it.

use tagsmith_core::{Price, Shape, Sku, StockProduct};

/// The stock products offered on the storefront.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<StockProduct>,
}

impl Catalog {
    /// A catalog holding exactly `products`, in display order.
    #[must_use]
    pub const fn new(products: Vec<StockProduct>) -> Self {
        Self { products }
    }

    /// The standard stock range.
    #[must_use]
    pub fn stock() -> Self {
        Self::new(vec![
            product(
                "rect-small",
                "Small Rectangle Tag",
                Shape::Rectangle,
                "3 x 5 cm tag made of durable paper.",
                50,
            ),
            product(
                "rect-large",
                "Large Rectangle Tag",
                Shape::Rectangle,
                "5 x 8 cm tag made of plastic.",
                75,
            ),
            product(
                "round-medium",
                "Medium Round Tag",
                Shape::Round,
                "4 cm diameter tag made of metal.",
                100,
            ),
            product(
                "oval-standard",
                "Standard Oval Tag",
                Shape::Oval,
                "4 x 6 cm tag made of plastic.",
                80,
            ),
            product(
                "star-tag",
                "Star Tag",
                Shape::Star,
                "5 cm star-shaped tag made of paper.",
                90,
            ),
        ])
    }

    /// All products in display order.
    #[must_use]
    pub fn products(&self) -> &[StockProduct] {
        &self.products
    }

    /// Look up a product by SKU.
    #[must_use]
    pub fn find(&self, sku: &Sku) -> Option<&StockProduct> {
        self.products.iter().find(|product| &product.sku == sku)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::stock()
    }
}

fn product(sku: &str, name: &str, shape: Shape, description: &str, cents: i64) -> StockProduct {
    StockProduct {
        sku: Sku::new(sku),
        name: name.to_string(),
        shape,
        description: description.to_string(),
        price: Price::from_cents(cents),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_stock_catalog() {
        let catalog = Catalog::stock();
        assert_eq!(catalog.products().len(), 5);

        let star = catalog.find(&Sku::new("star-tag")).unwrap();
        assert_eq!(star.price, Price::from_cents(90));
        assert_eq!(star.shape, Shape::Star);
    }

    #[test]
    fn test_skus_are_unique() {
        let catalog = Catalog::stock();
        let skus: HashSet<&str> = catalog.products().iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus.len(), catalog.products().len());
    }

    #[test]
    fn test_unknown_sku() {
        assert!(Catalog::stock().find(&Sku::new("hexagon-tag")).is_none());
    }
}
