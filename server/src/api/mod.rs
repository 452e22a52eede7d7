//! API Router and Application State
//!
//! Central routing configuration and shared state.

use axum::{
    http::{Method, Uri},
    response::Html,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{config::Config, graph::GraphClient, webhooks};

/// Body served on `/` and every path other than the webhook.
pub const INFO_PAGE: &str = "<pre>Nothing to see here.\nCheckout README.md to start.</pre>";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Outbound Graph API client
    pub graph: GraphClient,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(config: Config, graph: GraphClient) -> Self {
        Self {
            config: Arc::new(config),
            graph,
        }
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(webhooks::router())
        // `/` and anything unmatched
        .fallback(info_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Static informational page.
async fn info_page(method: Method, uri: Uri) -> Html<&'static str> {
    info!(%method, %uri, "Received request");
    Html(INFO_PAGE)
}
