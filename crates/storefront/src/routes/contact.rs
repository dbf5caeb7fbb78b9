//! Contact form route handler.
//!
//! Messages are validated and acknowledged only; nothing is stored or sent.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tagsmith_core::{ContactMessage, RawContactMessage};
use tower_sessions::Session;
use tracing::instrument;

use super::home::HomeTemplate;
use super::session_cart;
use crate::state::AppState;

/// Acknowledgement shown after a contact message is accepted.
pub const CONTACT_RESPONSE: &str =
    "Thank you! Your message has been sent. We will get back to you soon.";

/// Submit the contact form.
///
/// POST /contact
#[instrument(skip(state, session, form))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RawContactMessage>,
) -> Response {
    let cart = session_cart(session).read_cart().await;
    let page = HomeTemplate::new(state.catalog(), &cart);

    match ContactMessage::parse(&form) {
        Ok(message) => {
            tracing::info!(
                email_domain = %message.email.domain(),
                length = message.message.chars().count(),
                "Contact message acknowledged"
            );
            page.with_contact_response(CONTACT_RESPONSE).into_response()
        }
        Err(err) => {
            tracing::info!(error = %err, "Rejected contact message");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                page.with_contact_error(&form, err.to_string()),
            )
                .into_response()
        }
    }
}
