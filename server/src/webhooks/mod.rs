//! WhatsApp Webhook
//!
//! Subscription handshake and inbound message ingestion.

pub mod extract;
pub mod handlers;
pub mod types;
pub mod verification;

use axum::routing::get;
use axum::Router;

use crate::api::AppState;

/// Path Meta is configured to deliver to.
pub const WEBHOOK_PATH: &str = "/webhook";

/// `/webhook` routes. Methods other than GET and POST get 405.
///
/// HEAD is registered explicitly, otherwise axum would answer it with the
/// GET handler.
pub fn router() -> Router<AppState> {
    Router::new().route(
        WEBHOOK_PATH,
        get(handlers::verify)
            .head(handlers::method_not_allowed)
            .post(handlers::receive)
            .fallback(handlers::method_not_allowed),
    )
}
