//! Tag shapes.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a shape name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown shape: {0}")]
pub struct ShapeError(pub String);

/// Outline of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Rectangle,
    Round,
    Oval,
    Star,
}

impl Shape {
    /// Every shape, in the order offered to visitors.
    pub const ALL: [Self; 4] = [Self::Rectangle, Self::Round, Self::Oval, Self::Star];

    /// Lowercase name as used in forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Round => "round",
            Self::Oval => "oval",
            Self::Star => "star",
        }
    }

    /// Capitalized name for display (e.g., "Round").
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Round => "Round",
            Self::Oval => "Oval",
            Self::Star => "Star",
        }
    }
}

impl FromStr for Shape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| ShapeError(s.to_owned()))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for shape in Shape::ALL {
            assert_eq!(shape.as_str().parse::<Shape>(), Ok(shape));
        }
    }

    #[test]
    fn test_unknown_shape() {
        assert_eq!(
            "hexagon".parse::<Shape>(),
            Err(ShapeError("hexagon".to_string()))
        );
    }
}
