//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;
use std::str::FromStr;

use tagsmith_core::Shape;

/// Fill color of catalog shape icons.
pub const ICON_FILL: &str = "#00796b";

/// Renders a 100x100 SVG icon for a shape name.
///
/// Unknown shape names fall back to the rectangle.
///
/// Usage in templates: `{{ product.shape|shape_icon|safe }}`
#[askama::filter_fn]
pub fn shape_icon(shape: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let shape = Shape::from_str(&shape.to_string()).unwrap_or_default();
    Ok(shape_svg(shape, ICON_FILL))
}

/// SVG markup for `shape` filled with `fill`.
///
/// `fill` is written into an attribute unescaped; callers pass a constant or a
/// validated `#rrggbb` color.
#[must_use]
pub fn shape_svg(shape: Shape, fill: &str) -> String {
    let element = match shape {
        Shape::Rectangle => {
            format!(r#"<rect x="10" y="10" width="80" height="80" fill="{fill}"/>"#)
        }
        Shape::Round => format!(r#"<circle cx="50" cy="50" r="40" fill="{fill}"/>"#),
        Shape::Oval => format!(r#"<ellipse cx="50" cy="50" rx="45" ry="30" fill="{fill}"/>"#),
        Shape::Star => format!(
            r#"<polygon points="50,15 61,35 85,35 66,50 71,72 50,60 29,72 34,50 15,35 39,35" fill="{fill}"/>"#
        ),
    };
    format!(
        r#"<svg class="product-image" width="100" height="100" viewBox="0 0 100 100" role="img" aria-label="{} tag">{element}</svg>"#,
        shape.title()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_svg_elements() {
        assert!(shape_svg(Shape::Rectangle, ICON_FILL).contains("<rect "));
        assert!(shape_svg(Shape::Round, ICON_FILL).contains("<circle "));
        assert!(shape_svg(Shape::Oval, ICON_FILL).contains("<ellipse "));
        assert!(shape_svg(Shape::Star, ICON_FILL).contains("<polygon "));
    }

    #[test]
    fn test_shape_svg_fill() {
        let svg = shape_svg(Shape::Round, "#ff0000");
        assert!(svg.contains(r##"fill="#ff0000""##));
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
    }
}
