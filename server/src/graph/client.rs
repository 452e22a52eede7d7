//! Graph API HTTP Client
//!
//! Posts JSON payloads to `{base_url}/{phone_number_id}/messages` with the
//! configured bearer token.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, instrument};

use super::types::{GraphError, ReadReceiptPayload, ReplyPayload};
use crate::config::Config;

/// Client for the WhatsApp Cloud API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GraphClient {
    /// Build a client with the configured base URL, token, and timeout.
    pub fn new(config: &Config) -> Result<Self, GraphError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.graph_api_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.graph_api_base_url.clone(),
            token: config.api_token.clone(),
        })
    }

    /// Messages endpoint for a business phone number.
    #[must_use]
    pub fn messages_url(&self, phone_number_id: &str) -> String {
        format!("{}/{}/messages", self.base_url, phone_number_id)
    }

    /// Send a text reply.
    pub async fn send_reply(
        &self,
        phone_number_id: &str,
        payload: &ReplyPayload,
    ) -> Result<(), GraphError> {
        self.post_message(phone_number_id, payload).await
    }

    /// Mark an inbound message as read.
    pub async fn mark_as_read(
        &self,
        phone_number_id: &str,
        message_id: &str,
    ) -> Result<(), GraphError> {
        self.post_message(phone_number_id, &ReadReceiptPayload::new(message_id))
            .await
    }

    /// POST a JSON payload to the messages endpoint.
    ///
    /// Anything other than `200 OK` is an error carrying the response body.
    #[instrument(skip(self, payload))]
    pub async fn post_message<T: Serialize + Sync>(
        &self,
        phone_number_id: &str,
        payload: &T,
    ) -> Result<(), GraphError> {
        let resp = self
            .http
            .post(self.messages_url(phone_number_id))
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(GraphError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "Graph API call succeeded");
        Ok(())
    }
}
