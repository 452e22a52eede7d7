//! Server Configuration
//!
//! Loads configuration from environment variables.

use std::env;

/// Default Graph API endpoint for the WhatsApp Cloud API.
pub const DEFAULT_GRAPH_API_BASE_URL: &str = "https://graph.facebook.com/v18.0";

/// Default timeout for outbound Graph API calls, in seconds.
pub const DEFAULT_GRAPH_API_TIMEOUT_SECS: u64 = 10;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret for the webhook subscription handshake
    pub verify_token: String,

    /// Bearer token presented on every outbound Graph API call
    pub api_token: String,

    /// Listen port, kept as given (e.g., "8080")
    pub port: String,

    /// Graph API base URL, without trailing slash
    pub graph_api_base_url: String,

    /// Timeout for a single outbound call in seconds (default: 10)
    pub graph_api_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing values are tolerated and become empty strings; an empty token
    /// simply makes the handshake or the outbound calls fail later.
    pub fn from_env() -> Self {
        Self {
            verify_token: env::var("WEBHOOK_VERIFY_TOKEN").unwrap_or_default(),
            api_token: env::var("GRAPH_API_TOKEN").unwrap_or_default(),
            port: env::var("PORT").unwrap_or_default(),
            graph_api_base_url: env::var("GRAPH_API_BASE_URL")
                .ok()
                .map(|url| normalize_base_url(&url))
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_GRAPH_API_BASE_URL.into()),
            graph_api_timeout_secs: env::var("GRAPH_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_GRAPH_API_TIMEOUT_SECS),
        }
    }

    /// Socket address the listener binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Check if both tokens are set.
    #[must_use]
    pub fn has_tokens(&self) -> bool {
        !self.verify_token.is_empty() && !self.api_token.is_empty()
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            verify_token: "test-verify-token".into(),
            api_token: "test-api-token".into(),
            port: "8080".into(),
            graph_api_base_url: DEFAULT_GRAPH_API_BASE_URL.into(),
            graph_api_timeout_secs: 2,
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
