//! WhatsApp Cloud API Client
//!
//! Outbound calls to the Graph API `/{phone_number_id}/messages` endpoint:
//! text replies and read-receipts. Best effort, no retries.

pub mod client;
pub mod types;

pub use client::GraphClient;
pub use types::{GraphError, ReadReceiptPayload, ReplyPayload};
