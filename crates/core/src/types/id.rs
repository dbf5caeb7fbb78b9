//! Newtype IDs for type-safe references.
//!
//! Use the `define_id!` macro to create string-backed ID wrappers that prevent
//! accidentally mixing a catalog SKU with a cart line identity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>`, `From<String>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use tagsmith_core::define_id;
/// define_id!(OrderRef);
/// define_id!(CouponCode);
///
/// let order = OrderRef::new("ord-1");
/// let coupon = CouponCode::new("ord-1");
///
/// // These are different types, so this won't compile:
/// // let _: OrderRef = coupon;
/// assert_eq!(order.as_str(), coupon.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(Sku);
define_id!(LineItemId);

/// Prefix shared by every generated custom line item id.
pub const CUSTOM_ID_PREFIX: &str = "custom-";

impl LineItemId {
    /// Generate a fresh id for a custom order submitted at `submitted_at`.
    ///
    /// The id embeds the submission time in milliseconds plus a random v4 UUID,
    /// so two submissions in the same millisecond still get distinct ids.
    #[must_use]
    pub fn custom(submitted_at: DateTime<Utc>) -> Self {
        Self(format!(
            "{CUSTOM_ID_PREFIX}{}-{}",
            submitted_at.timestamp_millis(),
            Uuid::new_v4().simple()
        ))
    }

    /// Whether this id was generated for a custom order.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.0.starts_with(CUSTOM_ID_PREFIX)
    }
}

impl From<Sku> for LineItemId {
    fn from(sku: Sku) -> Self {
        Self(sku.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_stock_line_id_is_sku() {
        let id = LineItemId::from(Sku::new("rect-small"));
        assert_eq!(id.as_str(), "rect-small");
        assert!(!id.is_custom());
    }

    #[test]
    fn test_custom_ids_are_fresh() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

        let first = LineItemId::custom(at);
        let second = LineItemId::custom(at);

        assert_ne!(first, second);
        assert!(first.is_custom());
        assert!(first.as_str().starts_with("custom-1700000000000-"));
    }

    #[test]
    fn test_id_serializes_transparently() {
        let json = serde_json::to_string(&Sku::new("star-tag")).unwrap();
        assert_eq!(json, "\"star-tag\"");
    }
}
