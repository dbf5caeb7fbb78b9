//! Custom order form validation.
//!
//! The custom order form posts raw strings. [`CustomOrder::parse`] turns them
//! into typed values before anything is priced, so a non-numeric size or
//! quantity becomes a message for the visitor instead of a nonsense price.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::{CustomQuote, quote};
use crate::types::{LineItem, LineItemId, Material, Quantity, Shape};

/// Largest tag we make, in centimetres.
pub const MAX_SIZE_CM: i64 = 30;

/// Largest quantity accepted in one custom order.
pub const MAX_QUANTITY: u32 = 1000;

/// Maximum personalization text length, in characters.
pub const MAX_TEXT_CHARS: usize = 40;

/// Errors found while validating a custom order.
///
/// The display strings are shown to visitors as-is.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomOrderError {
    #[error("Please choose a shape.")]
    UnknownShape(String),
    #[error("Size must be a number of centimetres.")]
    InvalidSize(String),
    #[error("Size must be greater than 0 and at most {max} cm.")]
    SizeOutOfRange {
        /// Largest accepted size.
        max: i64,
    },
    #[error("Quantity must be a whole number.")]
    InvalidQuantity(String),
    #[error("Quantity must be between 1 and {max}.")]
    QuantityOutOfRange {
        /// Largest accepted quantity.
        max: u32,
    },
    #[error("Color must be a hex value like #00796b.")]
    InvalidColor(String),
    #[error("Text must be at most {max} characters.")]
    TextTooLong {
        /// Maximum accepted length.
        max: usize,
    },
}

/// Custom order form fields exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCustomOrder {
    pub shape: String,
    pub size: String,
    pub material: String,
    pub color: String,
    pub text: String,
    pub quantity: String,
}

/// A validated custom order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomOrder {
    pub shape: Shape,
    /// Longest dimension in centimetres.
    pub size_cm: Decimal,
    pub material: Material,
    /// Hex color, normalized to lowercase.
    pub color: String,
    /// Personalization text; empty when none was given.
    pub text: String,
    pub quantity: Quantity,
}

impl CustomOrder {
    /// Validate raw form input.
    ///
    /// Unknown materials are accepted and priced as paper.
    ///
    /// # Errors
    ///
    /// Returns the first [`CustomOrderError`] found, checking shape, size,
    /// quantity, color and text in that order.
    pub fn parse(raw: &RawCustomOrder) -> Result<Self, CustomOrderError> {
        let shape = Shape::from_str(raw.shape.trim())
            .map_err(|_| CustomOrderError::UnknownShape(raw.shape.clone()))?;
        let size_cm = parse_size(&raw.size)?;
        let quantity = parse_quantity(&raw.quantity)?;
        let color = parse_color(&raw.color)?;

        let text = raw.text.trim().to_owned();
        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(CustomOrderError::TextTooLong {
                max: MAX_TEXT_CHARS,
            });
        }

        Ok(Self {
            shape,
            size_cm,
            material: Material::from_form_value(raw.material.trim()),
            color,
            text,
            quantity,
        })
    }

    /// Display name of the resulting line item (e.g., "Round Custom Tag").
    #[must_use]
    pub fn item_name(&self) -> String {
        format!("{} Custom Tag", self.shape.title())
    }

    /// Unit price and line total for this order.
    #[must_use]
    pub fn quote(&self) -> CustomQuote {
        quote(self.size_cm, self.material, self.quantity)
    }

    /// The cart line for this order, with a freshly generated id.
    ///
    /// Every call yields a distinct id, so identical orders never merge.
    #[must_use]
    pub fn to_line_item(&self, submitted_at: DateTime<Utc>) -> LineItem {
        LineItem {
            id: LineItemId::custom(submitted_at),
            name: self.item_name(),
            price: self.quote().unit_price,
            quantity: self.quantity,
            text: Some(self.text.clone()),
        }
    }
}

/// Parse a size in centimetres, accepting only `0 < size <= MAX_SIZE_CM`.
///
/// # Errors
///
/// Returns [`CustomOrderError::InvalidSize`] or [`CustomOrderError::SizeOutOfRange`].
pub fn parse_size(raw: &str) -> Result<Decimal, CustomOrderError> {
    let size = Decimal::from_str(raw.trim())
        .map_err(|_| CustomOrderError::InvalidSize(raw.to_owned()))?;
    if size <= Decimal::ZERO || size > Decimal::from(MAX_SIZE_CM) {
        return Err(CustomOrderError::SizeOutOfRange { max: MAX_SIZE_CM });
    }
    Ok(size)
}

/// Parse a quantity in `1..=MAX_QUANTITY`.
///
/// # Errors
///
/// Returns [`CustomOrderError::InvalidQuantity`] or
/// [`CustomOrderError::QuantityOutOfRange`].
pub fn parse_quantity(raw: &str) -> Result<Quantity, CustomOrderError> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| CustomOrderError::InvalidQuantity(raw.to_owned()))?;
    u32::try_from(value)
        .ok()
        .filter(|value| *value <= MAX_QUANTITY)
        .and_then(|value| Quantity::new(value).ok())
        .ok_or(CustomOrderError::QuantityOutOfRange { max: MAX_QUANTITY })
}

fn parse_color(raw: &str) -> Result<String, CustomOrderError> {
    let color = raw.trim();
    let valid = color.len() == 7
        && color.starts_with('#')
        && color.chars().skip(1).all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(color.to_ascii_lowercase())
    } else {
        Err(CustomOrderError::InvalidColor(raw.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn raw() -> RawCustomOrder {
        RawCustomOrder {
            shape: "round".to_string(),
            size: "6".to_string(),
            material: "plastic".to_string(),
            color: "#00796B".to_string(),
            text: " Rex ".to_string(),
            quantity: "3".to_string(),
        }
    }

    #[test]
    fn test_parse_valid_order() {
        let order = CustomOrder::parse(&raw()).unwrap();
        assert_eq!(order.shape, Shape::Round);
        assert_eq!(order.size_cm, Decimal::from(6));
        assert_eq!(order.material, Material::Plastic);
        assert_eq!(order.color, "#00796b");
        assert_eq!(order.text, "Rex");
        assert_eq!(order.quantity.get(), 3);
        assert_eq!(order.item_name(), "Round Custom Tag");
    }

    #[test]
    fn test_quote() {
        let quote = CustomOrder::parse(&raw()).unwrap().quote();
        assert_eq!(quote.unit_price, Price::from_cents(90));
        assert_eq!(quote.line_total, Price::from_cents(270));
    }

    #[test]
    fn test_non_numeric_size_rejected() {
        let mut form = raw();
        form.size = "big".to_string();
        assert_eq!(
            CustomOrder::parse(&form),
            Err(CustomOrderError::InvalidSize("big".to_string()))
        );
    }

    #[test]
    fn test_size_bounds() {
        for bad in ["0", "-2", "30.5"] {
            let mut form = raw();
            form.size = bad.to_string();
            assert_eq!(
                CustomOrder::parse(&form),
                Err(CustomOrderError::SizeOutOfRange { max: MAX_SIZE_CM }),
                "size {bad}"
            );
        }

        let mut form = raw();
        form.size = "0.5".to_string();
        let order = CustomOrder::parse(&form).unwrap();
        assert!(!order.quote().unit_price.is_negative());
    }

    #[test]
    fn test_quantity_validation() {
        let mut form = raw();
        form.quantity = "two".to_string();
        assert!(matches!(
            CustomOrder::parse(&form),
            Err(CustomOrderError::InvalidQuantity(_))
        ));

        for bad in ["0", "-1", "1001"] {
            form.quantity = bad.to_string();
            assert_eq!(
                CustomOrder::parse(&form),
                Err(CustomOrderError::QuantityOutOfRange { max: MAX_QUANTITY }),
                "quantity {bad}"
            );
        }

        form.quantity = "2.5".to_string();
        assert!(matches!(
            CustomOrder::parse(&form),
            Err(CustomOrderError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_unknown_shape_rejected() {
        let mut form = raw();
        form.shape = String::new();
        assert!(matches!(
            CustomOrder::parse(&form),
            Err(CustomOrderError::UnknownShape(_))
        ));
    }

    #[test]
    fn test_unknown_material_accepted() {
        let mut form = raw();
        form.material = "wood".to_string();
        let order = CustomOrder::parse(&form).unwrap();
        assert_eq!(order.material, Material::Other);
    }

    #[test]
    fn test_color_validation() {
        let mut form = raw();
        form.color = "teal".to_string();
        assert!(matches!(
            CustomOrder::parse(&form),
            Err(CustomOrderError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_text_length() {
        let mut form = raw();
        form.text = "x".repeat(MAX_TEXT_CHARS + 1);
        assert_eq!(
            CustomOrder::parse(&form),
            Err(CustomOrderError::TextTooLong {
                max: MAX_TEXT_CHARS
            })
        );
    }

    #[test]
    fn test_identical_orders_get_distinct_lines() {
        let order = CustomOrder::parse(&raw()).unwrap();
        let now = Utc::now();
        let first = order.to_line_item(now);
        let second = order.to_line_item(now);

        assert!(!first.same_identity(&second));
        assert_eq!(first.price, Price::from_cents(90));
        assert_eq!(first.quantity.get(), 3);
        assert_eq!(first.text.as_deref(), Some("Rex"));
    }

    #[test]
    fn test_empty_text_kept_as_empty_string() {
        let mut form = raw();
        form.text = String::new();
        let line = CustomOrder::parse(&form).unwrap().to_line_item(Utc::now());
        assert_eq!(line.text.as_deref(), Some(""));
    }
}
