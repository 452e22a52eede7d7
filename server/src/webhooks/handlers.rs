//! Webhook API Handlers
//!
//! `GET /webhook` answers the subscription handshake, `POST /webhook` ingests
//! deliveries and echoes text messages back to the sender.

use axum::body::Body;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde_json::{Map, Value};
use tracing::{debug, error, info, instrument, warn};

use super::extract::extract_message;
use super::types::{ExtractedMessage, VerifyQuery, WebhookError};
use super::verification::verify_subscription;
use crate::api::AppState;
use crate::graph::{GraphClient, ReplyPayload};

/// Maximum accepted webhook body size (1 MiB).
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Prefix prepended to the echoed text.
pub const ECHO_PREFIX: &str = "Echo: ";

/// GET /webhook
#[instrument(skip_all)]
pub async fn verify(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<String, WebhookError> {
    let query = match query {
        Ok(Query(pairs)) => VerifyQuery::from_pairs(pairs),
        Err(e) => {
            debug!(error = %e, "Unparsable verification query");
            VerifyQuery::default()
        }
    };

    match verify_subscription(&query, &state.config.verify_token) {
        Some(challenge) => {
            info!("Webhook verified successfully");
            Ok(challenge.to_string())
        }
        None => {
            warn!(mode = ?query.mode, "Webhook verification failed");
            Err(WebhookError::Forbidden)
        }
    }
}

/// POST /webhook
///
/// Always acknowledges with 200 once the body parses; outbound failures are
/// only logged.
#[instrument(skip_all)]
pub async fn receive(
    State(state): State<AppState>,
    body: Body,
) -> Result<StatusCode, WebhookError> {
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        warn!(error = %e, "Failed to read webhook body");
        WebhookError::InvalidBody
    })?;

    info!(body = %String::from_utf8_lossy(&bytes), "Incoming webhook message");

    let envelope: Map<String, Value> = serde_json::from_slice(&bytes).map_err(|e| {
        warn!(error = %e, "Webhook body is not a JSON object");
        WebhookError::InvalidJson
    })?;
    let envelope = Value::Object(envelope);

    match extract_message(&envelope) {
        Some(extracted) => relay_message(&state.graph, &extracted).await,
        None => debug!("Webhook delivery carries no message"),
    }

    Ok(StatusCode::OK)
}

/// Fallback for any other method on /webhook.
pub async fn method_not_allowed() -> WebhookError {
    WebhookError::MethodNotAllowed
}

/// Echo a text message back to its sender, then mark it as read.
///
/// The two calls run in order; a failed reply does not skip the receipt.
async fn relay_message(graph: &GraphClient, extracted: &ExtractedMessage) {
    let message = &extracted.message;
    let Some(text) = message.text_body() else {
        debug!(message_id = %message.id, kind = %message.kind, "Ignoring non-text message");
        return;
    };

    let phone_number_id = extracted.phone_number_id.as_str();
    let reply = ReplyPayload::text(&message.from, format!("{ECHO_PREFIX}{text}"), &message.id);

    if let Err(e) = graph.send_reply(phone_number_id, &reply).await {
        error!(
            phone_number_id,
            message_id = %message.id,
            error = %e,
            "Failed to send echo reply"
        );
    }

    if let Err(e) = graph.mark_as_read(phone_number_id, &message.id).await {
        error!(
            phone_number_id,
            message_id = %message.id,
            error = %e,
            "Failed to mark message as read"
        );
    }
}
