//! Fetch configuration
//!
//! Numeric limits and pacing for a pagination run. The defaults reflect a
//! conventional cursor API: 100-item server page cap, a 50-item default
//! request, a 1000-item safety ceiling on "return all", and a ~2 req/s
//! rate ceiling honored with a 1000 ms inter-request interval.

use std::time::Duration;

/// Configuration for pagination runs
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Item count used when the caller gives neither `return_all` nor a limit
    pub default_limit: u32,
    /// Maximum items the server accepts per page request
    pub max_page_size: u32,
    /// Absolute ceiling on total items for `return_all` requests
    pub return_all_ceiling: u32,
    /// Minimum delay between consecutive requests in one run.
    /// Zero disables pacing.
    pub request_interval: Duration,
    /// Dot-separated path to the cursor field on each item
    pub cursor_path: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            default_limit: 50,
            max_page_size: 100,
            return_all_ceiling: 1000,
            request_interval: Duration::from_millis(1000),
            cursor_path: "id".to_string(),
        }
    }
}

impl FetchConfig {
    /// Create a new config builder
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }
}

/// Builder for fetch config
#[derive(Default)]
pub struct FetchConfigBuilder {
    config: FetchConfig,
}

impl FetchConfigBuilder {
    /// Set the default item count
    pub fn default_limit(mut self, limit: u32) -> Self {
        self.config.default_limit = limit;
        self
    }

    /// Set the server's maximum page size
    pub fn max_page_size(mut self, size: u32) -> Self {
        self.config.max_page_size = size;
        self
    }

    /// Set the ceiling on `return_all` requests
    pub fn return_all_ceiling(mut self, ceiling: u32) -> Self {
        self.config.return_all_ceiling = ceiling;
        self
    }

    /// Set the minimum inter-request interval
    pub fn request_interval(mut self, interval: Duration) -> Self {
        self.config.request_interval = interval;
        self
    }

    /// Disable inter-request pacing
    pub fn no_pacing(mut self) -> Self {
        self.config.request_interval = Duration::ZERO;
        self
    }

    /// Set the cursor field path on items
    pub fn cursor_path(mut self, path: impl Into<String>) -> Self {
        self.config.cursor_path = path.into();
        self
    }

    /// Build the config
    pub fn build(self) -> FetchConfig {
        self.config
    }
}
