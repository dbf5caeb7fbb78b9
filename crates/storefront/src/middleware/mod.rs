//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. Session layer (memory or `PostgreSQL` store)
//! 3. `TraceLayer` (request span)
//! 4. Request ID (recorded on the span, echoed in the response)
//! 5. Security headers (CSP, frame and isolation policies)

pub mod request_id;
pub mod security_headers;
pub mod session;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::{
    SESSION_COOKIE_NAME, memory_session_layer, postgres_session_layer, postgres_store,
    spawn_expired_deletion,
};
