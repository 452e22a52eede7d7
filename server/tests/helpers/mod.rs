//! Reusable test helpers for HTTP integration tests.
//!
//! Provides `TestApp` for sending requests through the full axum router, and
//! `MockGraph`, a real HTTP server standing in for the Graph API that records
//! every outbound call the relay makes.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::{self, HeaderMap, Method, Request, Response, StatusCode};
use axum::routing::post;
use axum::Router;
use http_body_util::BodyExt;
use relay_server::api::{create_router, AppState};
use relay_server::config::Config;
use relay_server::graph::GraphClient;
use serde_json::Value;
use tokio::task::JoinHandle;
use tower::ServiceExt;

// ============================================================================
// Test App
// ============================================================================

/// A test application wrapping the full axum router.
pub struct TestApp {
    pub router: Router,
    pub config: Arc<Config>,
}

impl TestApp {
    /// Create a test app whose outbound calls go to `graph_api_base_url`.
    pub fn new(graph_api_base_url: &str) -> Self {
        let mut config = Config::default_for_test();
        config.graph_api_base_url = graph_api_base_url.to_string();
        Self::with_config(config)
    }

    /// Create a test app with a custom config.
    pub fn with_config(config: Config) -> Self {
        let graph = GraphClient::new(&config).expect("Failed to build GraphClient");
        let router = create_router(AppState::new(config.clone(), graph));

        Self {
            router,
            config: Arc::new(config),
        }
    }

    /// Build an HTTP request with the given method and URI.
    pub fn request(method: Method, uri: &str) -> http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    /// Send a request through the router via `tower::ServiceExt::oneshot`.
    pub async fn oneshot(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot request failed")
    }

    /// POST a raw body to `/webhook`.
    pub async fn post_webhook(&self, body: impl Into<Body>) -> Response<Body> {
        let req = Self::request(Method::POST, "/webhook")
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap();
        self.oneshot(req).await
    }
}

/// Collect a response body into a string.
pub async fn body_to_string(resp: Response<Body>) -> String {
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

// ============================================================================
// Mock Graph API
// ============================================================================

/// One call received by the mock Graph API.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub phone_number_id: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    status: StatusCode,
}

/// A running mock Graph API bound to a random port.
pub struct MockGraph {
    /// Base URL to configure as `graph_api_base_url`.
    pub base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    _handle: JoinHandle<()>,
}

impl MockGraph {
    /// Snapshot of the calls received so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

/// Spawn a mock Graph API answering every messages call with `status`.
pub async fn spawn_mock_graph(status: StatusCode) -> MockGraph {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        calls: calls.clone(),
        status,
    };

    let router = Router::new()
        .route("/v18.0/{phone_number_id}/messages", post(record_call))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock Graph API");
    let addr = listener.local_addr().expect("Failed to get local addr");

    let handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock Graph API failed");
    });

    MockGraph {
        base_url: format!("http://{addr}/v18.0"),
        calls,
        _handle: handle,
    }
}

async fn record_call(
    State(mock): State<MockState>,
    Path(phone_number_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    mock.calls.lock().unwrap().push(RecordedCall {
        phone_number_id,
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    if mock.status == StatusCode::OK {
        (mock.status, r#"{"messages":[{"id":"wamid.out"}]}"#)
    } else {
        (mock.status, r#"{"error":{"message":"mock failure","code":131000}}"#)
    }
}

/// Base URL of a port with nothing listening, so every call fails to connect.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr: SocketAddr = listener.local_addr().expect("Failed to get local addr");
    drop(listener);
    format!("http://{addr}/v18.0")
}
