//! Integration tests for Tagsmith.
//!
//! Each [`TestApp`] serves the storefront router on an ephemeral local port
//! with in-memory sessions, so the tests need no database. Requests go through
//! a `reqwest` client with its own cookie store, one client per visitor.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tagsmith-integration-tests
//! ```

use axum::http::{HeaderMap, StatusCode, header};
use reqwest::{Client, redirect::Policy};
use tagsmith_storefront::{
    app,
    catalog::Catalog,
    config::{ConfigError, StorefrontConfig},
    middleware::memory_session_layer,
    state::AppState,
};
use tokio::net::TcpListener;

/// Errors raised by the test harness itself.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("server: {0}")]
    Io(#[from] std::io::Error),
    #[error("request: {0}")]
    Request(#[from] reqwest::Error),
}

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// Whether the response set a cookie.
    #[must_use]
    pub fn sets_cookie(&self) -> bool {
        self.headers.contains_key(header::SET_COOKIE)
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// A running storefront plus one visitor's HTTP client.
///
/// Redirects are not followed so tests can assert on them.
pub struct TestApp {
    base_url: String,
    client: Client,
}

impl TestApp {
    /// Serve a storefront with default configuration and in-memory sessions.
    ///
    /// The server runs on the current test runtime and stops with it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails to load, the listener
    /// cannot bind or the client cannot be built.
    pub async fn spawn() -> Result<Self, HarnessError> {
        let config = StorefrontConfig::from_lookup(|_| None)?;
        let session_layer = memory_session_layer(&config);
        let router = app(AppState::new(config, Catalog::stock(), None), session_layer);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            base_url: format!("http://{addr}"),
            client: visitor_client()?,
        })
    }

    /// A second visitor on the same storefront, with an empty cookie store.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built.
    pub fn visitor(&self) -> Result<Self, HarnessError> {
        Ok(Self {
            base_url: self.base_url.clone(),
            client: visitor_client()?,
        })
    }

    /// Send a GET request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be read.
    pub async fn get(&self, path: &str) -> Result<TestResponse, HarnessError> {
        let response = self.client.get(self.url(path)).send().await?;
        buffer(response).await
    }

    /// Send a form-encoded POST request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be read.
    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<TestResponse, HarnessError> {
        let response = self.client.post(self.url(path)).form(fields).send().await?;
        buffer(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn visitor_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
}

async fn buffer(response: reqwest::Response) -> Result<TestResponse, HarnessError> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.text().await?;

    Ok(TestResponse {
        status,
        headers,
        body,
    })
}
