//! Cart route handlers.
//!
//! The cart lives in the visitor's session. Mutations redirect to `/cart` so a
//! refresh never repeats them, and the redirect target renders the page with
//! the cart modal open.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::{Deserialize, Serialize};
use tagsmith_core::{Cart, LineItem, Sku};
use tower_sessions::Session;
use tracing::instrument;

use super::home::HomeTemplate;
use super::session_cart;
use crate::cart::{on_add_to_cart, on_remove_item};
use crate::error::{Result, add_breadcrumb};
use crate::state::AppState;

/// Acknowledgement shown when the visitor tries to check out.
pub const CHECKOUT_MESSAGE: &str =
    "Checkout functionality is not implemented yet. Please contact us to place your order.";

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    /// Position in display order; the remove form posts it back.
    pub index: usize,
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
}

impl CartItemView {
    fn new(index: usize, item: &LineItem) -> Self {
        Self {
            index,
            id: item.id.to_string(),
            name: item.name.clone(),
            text: item.text.clone(),
            quantity: item.quantity.get(),
            price: item.price.display(),
            line_total: item.line_total().display(),
        }
    }
}

/// Cart display data for templates and the JSON endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u64,
    pub total: String,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| CartItemView::new(index, item))
                .collect(),
            item_count: cart.total_quantity(),
            total: cart.total_price().display(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub sku: String,
}

/// Remove from cart form data.
///
/// The index is kept as text; anything that is not a valid position is
/// ignored like an out-of-range index.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    #[serde(default)]
    pub index: String,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Display the storefront page with the cart modal open.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let cart = session_cart(session).read_cart().await;
    HomeTemplate::new(state.catalog(), &cart).with_cart_open()
}

/// Add one unit of a stock product, then reveal the cart.
#[instrument(skip(state, session), fields(sku = %form.sku))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let sku = Sku::new(form.sku.trim());
    let cart = on_add_to_cart(&session_cart(session), state.catalog(), &sku).await?;

    add_breadcrumb("cart", "Added stock item", Some(&[("sku", sku.as_str())]));
    tracing::info!(sku = %sku, lines = cart.len(), "Added stock item to cart");

    Ok(Redirect::to("/cart"))
}

/// Remove a cart line, then show the cart again.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Redirect {
    match form.index.trim().parse::<usize>() {
        Ok(index) => {
            let cart = on_remove_item(&session_cart(session), index).await;
            add_breadcrumb(
                "cart",
                "Removed item",
                Some(&[("index", index.to_string().as_str())]),
            );
            tracing::info!(index, lines = cart.len(), "Removed cart line");
        }
        Err(_) => {
            tracing::debug!(index = %form.index, "Ignoring malformed cart index");
        }
    }

    Redirect::to("/cart")
}

/// Cart count badge fragment.
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    CartCountTemplate {
        count: session_cart(session).total_quantity().await,
    }
}

/// Cart contents as JSON.
#[instrument(skip(session))]
pub async fn json(session: Session) -> Json<CartView> {
    let cart = session_cart(session).read_cart().await;
    Json(CartView::from(&cart))
}

/// Acknowledge a checkout attempt.
///
/// Checkout is not offered; the cart is left untouched.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let cart = session_cart(session).read_cart().await;
    add_breadcrumb("cart", "Checkout requested", None);

    let mut page = HomeTemplate::new(state.catalog(), &cart).with_cart_open();
    page.notice = Some(CHECKOUT_MESSAGE.to_string());
    page
}
