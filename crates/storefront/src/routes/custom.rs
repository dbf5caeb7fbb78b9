//! Custom order route handlers.

use axum::{
    Form, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tagsmith_core::{
    CustomQuote, Material, RawCustomOrder,
    custom_order::{parse_quantity, parse_size},
    quote,
};
use tower_sessions::Session;
use tracing::instrument;

use super::home::HomeTemplate;
use super::session_cart;
use crate::cart::{CommandError, on_submit_custom_order};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;

/// Query parameters for a live price quote.
#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub quantity: Option<String>,
}

/// Validate, price and add a custom order.
///
/// On success the page shows the order summary with the cart open. A
/// validation failure re-renders the form with its message and status 422;
/// nothing is added.
#[instrument(skip(state, session, form), fields(shape = %form.shape, material = %form.material))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RawCustomOrder>,
) -> Response {
    let store = session_cart(session);

    match on_submit_custom_order(&store, &form, Utc::now()).await {
        Ok(receipt) => {
            add_breadcrumb(
                "cart",
                "Added custom item",
                Some(&[("id", receipt.line.id.as_str())]),
            );
            tracing::info!(
                id = %receipt.line.id,
                quantity = %receipt.order.quantity,
                unit_price = %receipt.quote.unit_price,
                "Added custom order to cart"
            );

            HomeTemplate::new(state.catalog(), &receipt.cart)
                .with_cart_open()
                .with_custom_summary(&receipt.order, &receipt.quote)
                .into_response()
        }
        Err(CommandError::InvalidCustomOrder(err)) => {
            tracing::info!(error = %err, "Rejected custom order");
            let cart = store.read_cart().await;
            let page = HomeTemplate::new(state.catalog(), &cart)
                .with_custom_error(&form, err.to_string());
            (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
        }
        Err(err) => AppError::from(err).into_response(),
    }
}

/// Price a custom tag without adding it.
///
/// Quantity defaults to 1.
///
/// # Errors
///
/// Returns [`AppError::InvalidCustomOrder`] (422) for a size or quantity that
/// fails validation.
#[instrument]
pub async fn price_quote(Query(query): Query<QuoteQuery>) -> Result<Json<CustomQuote>> {
    let size = parse_size(&query.size)?;
    let quantity = parse_quantity(query.quantity.as_deref().unwrap_or("1"))?;
    let material = Material::from_form_value(query.material.trim());

    Ok(Json(quote(size, material, quantity)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tagsmith_core::{CustomOrderError, Price};

    use super::*;

    fn query(size: &str, material: &str, quantity: Option<&str>) -> Query<QuoteQuery> {
        Query(QuoteQuery {
            size: size.to_string(),
            material: material.to_string(),
            quantity: quantity.map(String::from),
        })
    }

    #[tokio::test]
    async fn test_quote() {
        let Json(quote) = price_quote(query("10", "paper", Some("3"))).await.unwrap();
        assert_eq!(quote.unit_price, Price::from_cents(100));
        assert_eq!(quote.line_total, Price::from_cents(300));
    }

    #[tokio::test]
    async fn test_quote_defaults_quantity() {
        let Json(quote) = price_quote(query("5", "plastic", None)).await.unwrap();
        assert_eq!(quote.line_total, Price::from_cents(80));
    }

    #[tokio::test]
    async fn test_quote_rejects_bad_size() {
        let err = price_quote(query("0", "metal", None)).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidCustomOrder(CustomOrderError::SizeOutOfRange { .. })
        ));
    }
}
