//! The cart: an ordered sequence of line items.
//!
//! A [`Cart`] is the in-memory form of one persisted snapshot. It serializes
//! transparently as a JSON array of line items, in display order.

use serde::{Deserialize, Serialize};

use crate::types::{LineItem, Price};

/// Ordered line items, insertion order being display order.
///
/// No two entries share an `(id, text)` identity; [`Cart::add`] merges instead
/// of duplicating.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Parse a persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the snapshot is not a valid line item array.
    pub fn from_snapshot(snapshot: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(snapshot)
    }

    /// Serialize into a snapshot.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if serialization fails.
    pub fn to_snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Line items in display order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a candidate line.
    ///
    /// If a line with the same `(id, text)` exists its quantity grows by the
    /// candidate's quantity and its name and price stay as first added.
    /// Otherwise the candidate is appended unchanged.
    ///
    /// A merge whose sum would overflow `u32` is refused and the existing line
    /// keeps its quantity; the return value is `false` in that case only.
    pub fn add(&mut self, candidate: LineItem) -> bool {
        match self.items.iter_mut().find(|item| item.same_identity(&candidate)) {
            Some(existing) => match existing.quantity.checked_merge(candidate.quantity) {
                Some(merged) => {
                    existing.quantity = merged;
                    true
                }
                None => false,
            },
            None => {
                self.items.push(candidate);
                true
            }
        }
    }

    /// Remove the line at `index`, returning it.
    ///
    /// Returns `None` and leaves the cart untouched when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<LineItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Sum of `price * quantity` across all lines, unrounded.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

impl FromIterator<LineItem> for Cart {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        let mut cart = Self::new();
        for item in iter {
            cart.add(item);
        }
        cart
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{LineItemId, Quantity};

    fn line(id: &str, cents: i64, quantity: u32, text: Option<&str>) -> LineItem {
        LineItem {
            id: LineItemId::new(id),
            name: format!("{id} tag"),
            price: Price::from_cents(cents),
            quantity: Quantity::new(quantity).unwrap(),
            text: text.map(String::from),
        }
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    #[test]
    fn test_merge_sums_quantity_and_keeps_first_price() {
        let mut cart = Cart::new();
        cart.add(line("rect-small", 50, 2, None));
        let mut repriced = line("rect-small", 99, 3, None);
        repriced.name = "Renamed".to_string();
        cart.add(repriced);

        assert_eq!(cart.len(), 1);
        let merged = &cart.items()[0];
        assert_eq!(merged.quantity.get(), 5);
        assert_eq!(merged.price, Price::from_cents(50));
        assert_eq!(merged.name, "rect-small tag");
    }

    #[test]
    fn test_overflowing_merge_is_refused() {
        let mut cart = Cart::new();
        assert!(cart.add(line("star-tag", 90, u32::MAX, None)));
        assert!(!cart.add(line("star-tag", 90, 5, None)));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity.get(), u32::MAX);
    }

    #[test]
    fn test_distinct_ids_never_merge() {
        let mut forward = Cart::new();
        forward.add(line("a", 50, 1, None));
        forward.add(line("b", 75, 1, None));

        let mut backward = Cart::new();
        backward.add(line("b", 75, 1, None));
        backward.add(line("a", 50, 1, None));

        assert_eq!(forward.len(), 2);
        assert_eq!(backward.len(), 2);
        assert_eq!(forward.items()[0].id.as_str(), "a");
        assert_eq!(backward.items()[0].id.as_str(), "b");
    }

    #[test]
    fn test_same_id_different_text_stays_separate() {
        let mut cart = Cart::new();
        cart.add(line("custom-1", 80, 1, Some("Max")));
        cart.add(line("custom-1", 80, 1, Some("Rex")));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_remove_exact_index() {
        let mut cart: Cart = [
            line("a", 50, 1, None),
            line("b", 75, 1, None),
            line("c", 100, 1, None),
        ]
        .into_iter()
        .collect();

        let removed = cart.remove(1).unwrap();
        assert_eq!(removed.id.as_str(), "b");
        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart: Cart = [line("a", 50, 1, None)].into_iter().collect();
        let before = cart.clone();
        assert!(cart.remove(1).is_none());
        assert!(cart.remove(usize::MAX).is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_totals() {
        let cart: Cart = [line("a", 50, 3, None), line("b", 75, 2, Some("x"))]
            .into_iter()
            .collect();
        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.total_price(), Price::from_cents(300));

        let reversed: Cart = cart.items().iter().rev().cloned().collect();
        assert_eq!(reversed.total_price(), cart.total_price());
    }

    #[test]
    fn test_total_price_keeps_precision() {
        let mut item = line("custom-1", 0, 3, Some(""));
        item.price = Price::new(Decimal::new(333, 3));
        let cart: Cart = [item].into_iter().collect();
        assert_eq!(cart.total_price().amount(), Decimal::new(999, 3));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let cart: Cart = [
            line("rect-small", 50, 2, None),
            line("custom-17-abc", 80, 4, Some("Buddy")),
            line("custom-18-def", 120, 1, Some("")),
        ]
        .into_iter()
        .collect();

        let snapshot = cart.to_snapshot().unwrap();
        assert_eq!(Cart::from_snapshot(&snapshot).unwrap(), cart);
    }

    #[test]
    fn test_snapshot_is_plain_array() {
        let cart: Cart = [line("rect-small", 50, 1, None)].into_iter().collect();
        let value: serde_json::Value = serde_json::from_str(&cart.to_snapshot().unwrap()).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_malformed_snapshots_are_errors() {
        assert!(Cart::from_snapshot("not json").is_err());
        assert!(Cart::from_snapshot("{\"id\":\"a\"}").is_err());
        assert!(
            Cart::from_snapshot(r#"[{"id":"a","name":"A","price":"0.5","quantity":0}]"#).is_err()
        );
    }
}
