//! Webhook Types
//!
//! Handshake query parameters, the inbound message model, and handler errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use thiserror::Error;

/// Query parameters Meta sends on the subscription handshake.
#[derive(Debug, Default)]
pub struct VerifyQuery {
    pub mode: Option<String>,
    pub verify_token: Option<String>,
    pub challenge: Option<String>,
}

impl VerifyQuery {
    /// Pick the `hub.*` parameters out of decoded query pairs.
    ///
    /// A repeated key keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "hub.mode" => &mut query.mode,
                "hub.verify_token" => &mut query.verify_token,
                "hub.challenge" => &mut query.challenge,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// A single inbound message as delivered in `value.messages[]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InboundMessage {
    pub id: String,
    /// Sender's WhatsApp address (phone number).
    pub from: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<TextBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextBody {
    pub body: String,
}

impl InboundMessage {
    /// Body of a text message. `None` for every other message type.
    pub fn text_body(&self) -> Option<&str> {
        if self.kind != "text" {
            return None;
        }
        self.text.as_ref().map(|t| t.body.as_str())
    }
}

/// First message of a delivery plus the business number it was sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMessage {
    pub phone_number_id: String,
    pub message: InboundMessage,
}

/// Webhook handler errors.
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Invalid request body")]
    InvalidBody,
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("Forbidden")]
    Forbidden,
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl WebhookError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody | Self::InvalidJson => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
