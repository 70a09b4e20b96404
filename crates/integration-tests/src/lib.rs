//! Integration tests for Cirrus.
//!
//! The storefront router runs in-process against a `wiremock` server standing
//! in for the commercetools API. Nothing external is needed:
//!
//! ```bash
//! cargo test -p cirrus-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog` - product search, product lookup, categories
//! - `cart` - cart endpoints, session cookie flow, client remove-item hook
//! - `wishlist` - wishlist endpoints
//! - `customer` - customer lookup

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

pub mod fixtures;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use cirrus_storefront::config::{CommercetoolsConfig, SentryConfig, StorefrontConfig};
use cirrus_storefront::state::AppState;
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

/// Project key used by every test.
pub const PROJECT_KEY: &str = "demo-store";

/// Path of a commercetools resource on the mock server.
#[must_use]
pub fn ct_path(resource: &str) -> String {
    format!("/{PROJECT_KEY}/{resource}")
}

/// Storefront configuration pointing at `api_url`.
#[must_use]
pub fn test_config(api_url: &str) -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        commercetools: CommercetoolsConfig {
            project_key: PROJECT_KEY.to_string(),
            api_url: api_url.to_string(),
            access_token: SecretString::from("tok-9fQ2xLr7Vb"),
            locale: "en-US".to_string(),
            content_locale: "en".to_string(),
            currency: "USD".to_string(),
        },
        sentry: SentryConfig::default(),
    }
}

/// A mocked commercetools API plus the storefront state wired to it.
pub struct TestContext {
    pub commercetools: MockServer,
    pub state: AppState,
}

impl TestContext {
    pub async fn new() -> Self {
        let commercetools = MockServer::start().await;
        let state = AppState::new(test_config(&commercetools.uri())).unwrap();
        Self {
            commercetools,
            state,
        }
    }

    /// A fresh router over the shared state.
    #[must_use]
    pub fn app(&self) -> Router {
        cirrus_storefront::app(self.state.clone())
    }

    /// Serve the storefront on an ephemeral port and return its base URL.
    pub async fn spawn(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = self.app();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// Send one request through a fresh router and decode the JSON body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}

/// `GET` request without body.
#[must_use]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Request with a JSON body.
#[must_use]
pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Cookie-keeping HTTP client for session flows.
#[must_use]
pub fn session_client() -> reqwest::Client {
    reqwest::Client::builder().cookie_store(true).build().unwrap()
}
