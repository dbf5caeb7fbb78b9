//! Tag materials.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Material a custom tag is made of.
///
/// Form values are matched exactly; anything that is not `paper`, `plastic` or
/// `metal` becomes [`Material::Other`], which is priced like paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    #[default]
    Paper,
    Plastic,
    Metal,
    #[serde(other)]
    Other,
}

impl Material {
    /// Interpret a raw form value.
    #[must_use]
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "paper" => Self::Paper,
            "plastic" => Self::Plastic,
            "metal" => Self::Metal,
            _ => Self::Other,
        }
    }

    /// Unit price of a tag of this material at the reference size.
    #[must_use]
    pub fn base_price(self) -> Decimal {
        match self {
            Self::Paper | Self::Other => Decimal::new(50, 2),
            Self::Plastic => Decimal::new(80, 2),
            Self::Metal => Decimal::new(120, 2),
        }
    }

    /// Lowercase name as used in forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paper => "paper",
            Self::Plastic => "plastic",
            Self::Metal => "metal",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
