//! Storefront page and its view models.
//!
//! Every HTML response renders the same single page: the catalog, the custom
//! order form, the contact form and the cart modal. Handlers differ only in
//! which parts they fill in (an open modal, a notice, a custom order summary
//! or a form error).

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tagsmith_core::{
    Cart, CustomOrder, CustomQuote, Material, RawContactMessage, RawCustomOrder,
    Shape, StockProduct,
};
use tower_sessions::Session;
use tracing::instrument;

use super::cart::CartView;
use super::session_cart;
use crate::catalog::Catalog;
use crate::filters;
use crate::state::AppState;

/// Default color offered by the custom order form.
pub const DEFAULT_COLOR: &str = "#00796b";

/// Materials offered by the custom order form.
const MATERIAL_CHOICES: [Material; 3] = [Material::Paper, Material::Plastic, Material::Metal];

/// Stock product card.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub shape: String,
    pub price: String,
}

impl From<&StockProduct> for ProductCardView {
    fn from(product: &StockProduct) -> Self {
        Self {
            sku: product.sku.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            shape: product.shape.to_string(),
            price: product.price.display(),
        }
    }
}

/// An `<option>` in a select field.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Current values of the custom order form.
///
/// Holds the raw strings so a rejected submission is echoed back unchanged.
#[derive(Debug, Clone)]
pub struct CustomFormView {
    pub shapes: Vec<SelectOption>,
    pub materials: Vec<SelectOption>,
    pub size: String,
    pub color: String,
    pub text: String,
    pub quantity: String,
}

impl CustomFormView {
    fn from_raw(raw: &RawCustomOrder) -> Self {
        let shapes = Shape::ALL
            .iter()
            .map(|shape| SelectOption {
                value: shape.as_str(),
                label: shape.title(),
                selected: shape.as_str() == raw.shape,
            })
            .collect();
        let materials = MATERIAL_CHOICES
            .iter()
            .map(|material| SelectOption {
                value: material.as_str(),
                label: material_label(*material),
                selected: material.as_str() == raw.material,
            })
            .collect();

        Self {
            shapes,
            materials,
            size: raw.size.clone(),
            color: raw.color.clone(),
            text: raw.text.clone(),
            quantity: raw.quantity.clone(),
        }
    }
}

impl Default for CustomFormView {
    fn default() -> Self {
        Self::from_raw(&RawCustomOrder {
            shape: Shape::default().as_str().to_string(),
            size: "5".to_string(),
            material: Material::default().as_str().to_string(),
            color: DEFAULT_COLOR.to_string(),
            text: String::new(),
            quantity: "1".to_string(),
        })
    }
}

/// Summary shown after a custom order is added.
#[derive(Debug, Clone)]
pub struct CustomSummaryView {
    pub shape: String,
    pub size: String,
    pub material: String,
    /// Validated `#rrggbb`, safe to place in an SVG attribute.
    pub color: String,
    pub text: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

impl CustomSummaryView {
    #[must_use]
    pub fn new(order: &CustomOrder, quote: &CustomQuote) -> Self {
        Self {
            shape: order.shape.to_string(),
            size: order.size_cm.normalize().to_string(),
            material: order.material.to_string(),
            color: order.color.clone(),
            text: order.text.clone(),
            quantity: order.quantity.get(),
            unit_price: quote.unit_price.display(),
            line_total: quote.line_total.display(),
        }
    }
}

/// Current values of the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactFormView {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&RawContactMessage> for ContactFormView {
    fn from(raw: &RawContactMessage) -> Self {
        Self {
            name: raw.name.clone(),
            email: raw.email.clone(),
            message: raw.message.clone(),
        }
    }
}

/// The storefront page.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductCardView>,
    pub cart: CartView,
    pub cart_open: bool,
    /// Acknowledgement shown inside the cart modal (e.g., checkout).
    pub notice: Option<String>,
    pub custom_form: CustomFormView,
    pub custom_summary: Option<CustomSummaryView>,
    pub custom_error: Option<String>,
    pub contact_form: ContactFormView,
    pub contact_response: Option<String>,
    pub contact_error: Option<String>,
}

impl HomeTemplate {
    /// The page with empty forms and the cart modal closed.
    #[must_use]
    pub fn new(catalog: &Catalog, cart: &Cart) -> Self {
        Self {
            products: catalog.products().iter().map(ProductCardView::from).collect(),
            cart: CartView::from(cart),
            cart_open: false,
            notice: None,
            custom_form: CustomFormView::default(),
            custom_summary: None,
            custom_error: None,
            contact_form: ContactFormView::default(),
            contact_response: None,
            contact_error: None,
        }
    }

    /// Reveal the cart modal.
    #[must_use]
    pub fn with_cart_open(mut self) -> Self {
        self.cart_open = true;
        self
    }

    /// Show the summary of a custom order that was just added.
    #[must_use]
    pub fn with_custom_summary(mut self, order: &CustomOrder, quote: &CustomQuote) -> Self {
        self.custom_summary = Some(CustomSummaryView::new(order, quote));
        self
    }

    /// Echo a rejected custom order with its validation message.
    #[must_use]
    pub fn with_custom_error(mut self, raw: &RawCustomOrder, message: String) -> Self {
        self.custom_form = CustomFormView::from_raw(raw);
        self.custom_error = Some(message);
        self
    }

    /// Show the acknowledgement for an accepted contact message.
    #[must_use]
    pub fn with_contact_response(mut self, response: &str) -> Self {
        self.contact_response = Some(response.to_string());
        self
    }

    /// Echo a rejected contact message with its validation message.
    #[must_use]
    pub fn with_contact_error(mut self, raw: &RawContactMessage, message: String) -> Self {
        self.contact_form = ContactFormView::from(raw);
        self.contact_error = Some(message);
        self
    }
}

const fn material_label(material: Material) -> &'static str {
    match material {
        Material::Paper => "Paper",
        Material::Plastic => "Plastic",
        Material::Metal => "Metal",
        Material::Other => "Other",
    }
}

/// Display the storefront page with the cart modal closed.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let cart = session_cart(session).read_cart().await;
    HomeTemplate::new(state.catalog(), &cart)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use tagsmith_core::Price;

    use super::*;

    #[test]
    fn test_default_custom_form() {
        let form = CustomFormView::default();
        let selected: Vec<&str> = form
            .shapes
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, ["rectangle"]);
        assert!(form.materials[0].selected);
        assert_eq!(form.color, DEFAULT_COLOR);
        assert_eq!(form.quantity, "1");
    }

    #[test]
    fn test_custom_error_echoes_input() {
        let raw = RawCustomOrder {
            shape: "star".to_string(),
            size: "big".to_string(),
            material: "metal".to_string(),
            ..RawCustomOrder::default()
        };
        let page = HomeTemplate::new(&Catalog::stock(), &Cart::new())
            .with_custom_error(&raw, "Size must be a number of centimetres.".to_string());

        assert_eq!(page.custom_form.size, "big");
        assert!(page.custom_form.shapes[3].selected);
        assert!(page.custom_form.materials[2].selected);
        assert!(page.custom_error.is_some());
    }

    #[test]
    fn test_summary_formats_prices() {
        let raw = RawCustomOrder {
            shape: "oval".to_string(),
            size: "7.50".to_string(),
            material: "metal".to_string(),
            color: "#ABCDEF".to_string(),
            text: "Fido".to_string(),
            quantity: "4".to_string(),
        };
        let order = CustomOrder::parse(&raw).unwrap();
        let summary = CustomSummaryView::new(&order, &order.quote());

        assert_eq!(summary.size, "7.5");
        assert_eq!(summary.color, "#abcdef");
        assert_eq!(summary.unit_price, Price::from_cents(145).display());
        assert_eq!(summary.line_total, "$5.80");
    }

    #[test]
    fn test_page_renders_catalog() {
        let html = HomeTemplate::new(&Catalog::stock(), &Cart::new())
            .render()
            .unwrap();
        assert!(html.contains("Small Rectangle Tag"));
        assert!(html.contains("$0.90"));
        assert!(html.contains("<polygon "));
        assert!(!html.contains("cart-modal open"));
    }
}
