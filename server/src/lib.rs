//! Echo Relay Server
//!
//! Receives WhatsApp Cloud API webhooks, answers the subscription handshake,
//! and echoes inbound text messages back to their sender.

pub mod api;
pub mod config;
pub mod graph;
pub mod webhooks;
