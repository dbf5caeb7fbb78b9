//! Error responses and Sentry breadcrumbs.
//!
//! `AppError` covers the client errors a handler can return. Cart persistence
//! problems never reach this type; the cart store recovers from them locally
//! and logs them at `error`, which the Sentry tracing layer reports as events.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tagsmith_core::CustomOrderError;
use thiserror::Error;

use crate::cart::CommandError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Custom order input failed validation.
    #[error("Invalid custom order: {0}")]
    InvalidCustomOrder(#[from] CustomOrderError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<CommandError> for AppError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::UnknownProduct(sku) => Self::NotFound(format!("product {sku}")),
            CommandError::InvalidCustomOrder(err) => Self::InvalidCustomOrder(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Client error");

        match self {
            // The validation message is written for visitors; show it bare
            Self::InvalidCustomOrder(err) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response()
            }
            Self::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added item", Some(&[("sku", "rect-small")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use tagsmith_core::Sku;

    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product-123".to_string());
        assert_eq!(err.to_string(), "Not found: product-123");

        let err = AppError::from(CustomOrderError::QuantityOutOfRange { max: 1000 });
        assert_eq!(
            err.to_string(),
            "Invalid custom order: Quantity must be between 1 and 1000."
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::InvalidCustomOrder(CustomOrderError::InvalidSize(
                "big".to_string()
            ))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_unknown_product_maps_to_not_found() {
        let err = AppError::from(CommandError::UnknownProduct(Sku::new("nope")));
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "product nope"));
    }
}
