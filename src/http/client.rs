//! Request executor
//!
//! The `Executor` trait is the seam between the pagination controller and
//! the transport: one authenticated call, one decoded page. The reqwest
//! implementation applies bearer auth and maps non-success statuses to
//! errors without retrying; retry policy is deliberately out of scope.

use crate::error::{Error, Result};
use crate::types::{Method, Page, StringMap};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Performs one authenticated HTTP call and decodes the page body
#[async_trait]
pub trait Executor: Send + Sync {
    /// Fetch a single page from `url` with the given query parameters
    async fn execute(&self, method: Method, url: &str, query: &StringMap) -> Result<Page>;
}

/// Configuration for the HTTP executor
#[derive(Debug, Clone)]
pub struct HttpExecutorConfig {
    /// Request timeout (transport-level; this crate adds no retry on top)
    pub timeout: Duration,
    /// Bearer token applied to every request
    pub bearer_token: Option<String>,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpExecutorConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            bearer_token: None,
            default_headers: StringMap::new(),
            user_agent: format!("pagesweep/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpExecutorConfig {
    /// Create a new config builder
    pub fn builder() -> HttpExecutorConfigBuilder {
        HttpExecutorConfigBuilder::default()
    }
}

/// Builder for HTTP executor config
#[derive(Default)]
pub struct HttpExecutorConfigBuilder {
    config: HttpExecutorConfig,
}

impl HttpExecutorConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the bearer token
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.config.bearer_token = Some(token.into());
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpExecutorConfig {
        self.config
    }
}

/// Reqwest-backed page executor with bearer auth
pub struct HttpExecutor {
    client: Client,
    config: HttpExecutorConfig,
}

impl HttpExecutor {
    /// Create an executor with default configuration (no auth)
    pub fn new() -> Self {
        Self::with_config(HttpExecutorConfig::default())
    }

    /// Create an executor holding a bearer token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::with_config(HttpExecutorConfig::builder().bearer_token(token).build())
    }

    /// Create an executor with custom configuration
    pub fn with_config(config: HttpExecutorConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

impl Default for HttpExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpExecutor")
            .field("timeout", &self.config.timeout)
            .field("has_token", &self.config.bearer_token.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Executor for HttpExecutor {
    async fn execute(&self, method: Method, url: &str, query: &StringMap) -> Result<Page> {
        let target = Url::parse(url)?;

        let mut req = self.client.request(method.into(), target);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !query.is_empty() {
            req = req.query(query);
        }

        if let Some(ref token) = self.config.bearer_token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        let page: Page = serde_json::from_str(&body)?;

        debug!(
            "fetched page: {} items, has_more={} ({} {})",
            page.len(),
            page.has_more,
            status.as_u16(),
            url
        );

        Ok(page)
    }
}
