//! Custom tag pricing.
//!
//! A custom tag costs its material's base price, adjusted by ten cents for
//! every centimetre its longest dimension differs from the 5 cm reference size.
//! Stock tags are not priced here; they carry a fixed catalog price.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{Material, Price, Quantity};

/// Size in centimetres at which a tag costs exactly its material's base price.
pub const REFERENCE_SIZE_CM: i64 = 5;

/// Price change per centimetre of difference from the reference size.
fn price_per_cm() -> Decimal {
    Decimal::new(10, 2)
}

/// Unit price of a custom tag.
///
/// The result is not clamped: sizes far enough below the reference produce a
/// negative price. Callers that take visitor input validate the size first (see
/// [`crate::CustomOrder::parse`]).
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use tagsmith_core::{Material, Price, calculate_custom_price};
///
/// let price = calculate_custom_price(Decimal::from(10), Material::Paper);
/// assert_eq!(price, Price::from_cents(100));
/// ```
#[must_use]
pub fn calculate_custom_price(size_cm: Decimal, material: Material) -> Price {
    let adjustment = price_per_cm() * (size_cm - Decimal::from(REFERENCE_SIZE_CM));
    Price::new(material.base_price() + adjustment)
}

/// Price breakdown shown before a custom tag is added to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomQuote {
    /// Price of one tag; this is what the line item stores.
    pub unit_price: Price,
    /// Unit price times the requested quantity.
    pub line_total: Price,
}

/// Quote `quantity` custom tags.
#[must_use]
pub fn quote(size_cm: Decimal, material: Material, quantity: Quantity) -> CustomQuote {
    let unit_price = calculate_custom_price(size_cm, material);
    CustomQuote {
        unit_price,
        line_total: unit_price.times(quantity),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn size(value: i64) -> Decimal {
        Decimal::from(value)
    }

    #[test]
    fn test_reference_size_is_base_price() {
        assert_eq!(
            calculate_custom_price(size(5), Material::Plastic),
            Price::from_cents(80)
        );
        assert_eq!(
            calculate_custom_price(size(5), Material::Metal),
            Price::from_cents(120)
        );
    }

    #[test]
    fn test_larger_tags_cost_more() {
        assert_eq!(
            calculate_custom_price(size(10), Material::Paper),
            Price::from_cents(100)
        );
    }

    #[test]
    fn test_unknown_material_smaller_size() {
        let material = Material::from_form_value("unknown");
        assert_eq!(
            calculate_custom_price(size(3), material),
            Price::from_cents(30)
        );
    }

    #[test]
    fn test_fractional_size() {
        assert_eq!(
            calculate_custom_price(Decimal::new(75, 1), Material::Metal),
            Price::from_cents(145)
        );
    }

    #[test]
    fn test_tiny_sizes_go_negative() {
        let price = calculate_custom_price(Decimal::ZERO, Material::Plastic);
        assert_eq!(price, Price::from_cents(30));

        let price = calculate_custom_price(size(-5), Material::Paper);
        assert!(price.is_negative());
    }

    #[test]
    fn test_quote_multiplies_unit_price() {
        let quote = quote(size(6), Material::Plastic, Quantity::new(4).unwrap());
        assert_eq!(quote.unit_price, Price::from_cents(90));
        assert_eq!(quote.line_total, Price::from_cents(360));
    }
}
