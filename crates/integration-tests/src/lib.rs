//! Integration tests for the mock GitHub server.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mock-github-integration-tests
//! ```
//!
//! Each test starts its own server on `127.0.0.1:0`, so tests are isolated
//! from one another and from any mock already listening on port 3001.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use mock_github_server::app;
use mock_github_server::state::AppState;
use reqwest::Client;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// A running mock server plus a client pointed at it.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Start a fresh server with an empty store.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start() -> Self {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app(AppState::new()))
                .await
                .expect("Test server error");
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for a path on the test server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Create an issue through the API and return its JSON.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the response is not JSON.
    pub async fn create_issue(&self, title: &str, body: &str) -> Value {
        self.client
            .post(self.url("/repos/acme/widgets/issues"))
            .json(&json!({ "title": title, "body": body }))
            .send()
            .await
            .expect("Failed to create issue")
            .json()
            .await
            .expect("Create response was not JSON")
    }
}
