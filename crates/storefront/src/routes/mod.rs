//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Storefront page (cart closed)
//!
//! # Cart
//! GET  /cart                   - Storefront page with the cart open
//! POST /cart/add               - Add a stock product (303 to /cart)
//! POST /cart/remove            - Remove a line by index (303 to /cart)
//! GET  /cart/count             - Cart count badge (fragment)
//! GET  /api/cart               - Cart contents (JSON)
//!
//! # Custom orders
//! POST /custom                 - Validate, price and add a custom order
//! GET  /api/custom/quote       - Price a custom tag (JSON)
//!
//! # Acknowledgements
//! POST /checkout               - Checkout placeholder
//! POST /contact                - Contact form
//! ```

pub mod cart;
pub mod contact;
pub mod custom;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;

use crate::cart::{CartStore, SessionStorage};
use crate::state::AppState;

/// The cart store for the requesting visitor.
pub(crate) fn session_cart(session: Session) -> CartStore<SessionStorage> {
    CartStore::new(SessionStorage::new(session))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(cart::json))
        .route("/custom/quote", get(custom::price_quote))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/cart", cart_routes())
        .route("/custom", post(custom::submit))
        .route("/checkout", post(cart::checkout))
        .route("/contact", post(contact::submit))
        .nest("/api", api_routes())
}
