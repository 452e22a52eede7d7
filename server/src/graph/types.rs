//! Graph API Types
//!
//! Outbound message payloads and client errors.

use serde::Serialize;
use thiserror::Error;

/// Product identifier required on every Cloud API message call.
pub const MESSAGING_PRODUCT: &str = "whatsapp";

/// Text message sent in reply to an inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyPayload {
    pub messaging_product: &'static str,
    pub to: String,
    pub text: TextContent,
    pub context: ReplyContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    pub body: String,
}

/// Quotes the message being replied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyContext {
    pub message_id: String,
}

impl ReplyPayload {
    /// Build a text reply to `to`, threaded under `reply_to_id`.
    pub fn text(
        to: impl Into<String>,
        body: impl Into<String>,
        reply_to_id: impl Into<String>,
    ) -> Self {
        Self {
            messaging_product: MESSAGING_PRODUCT,
            to: to.into(),
            text: TextContent { body: body.into() },
            context: ReplyContext {
                message_id: reply_to_id.into(),
            },
        }
    }
}

/// Marks an inbound message as read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadReceiptPayload {
    pub messaging_product: &'static str,
    pub status: &'static str,
    pub message_id: String,
}

impl ReadReceiptPayload {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            messaging_product: MESSAGING_PRODUCT,
            status: "read",
            message_id: message_id.into(),
        }
    }
}

/// Graph API client errors.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Graph API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}
