//! Error types for pagesweep
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The only error this crate synthesizes itself is `InvalidCursorOptions`;
//! everything else passes through from the transport layer unchanged.

use thiserror::Error;

/// The main error type for pagesweep
#[derive(Error, Debug)]
pub enum Error {
    /// Both `after` and `before` cursors were supplied for the same request.
    /// Raised pre-flight; no network calls are made.
    #[error("item {item_index}: the 'after' and 'before' cursors cannot both be set")]
    InvalidCursorOptions {
        /// Index of the offending batch item
        item_index: usize,
    },

    /// Transport-level failure, propagated verbatim from reqwest
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the server
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Response status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Response body was not a valid page
    #[error("Failed to parse response body: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The target URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Create an invalid cursor options error for a batch item
    pub fn invalid_cursor_options(item_index: usize) -> Self {
        Self::InvalidCursorOptions { item_index }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::HttpStatus { .. })
    }
}

/// Result type alias for pagesweep
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_cursor_options(3);
        assert_eq!(
            err.to_string(),
            "item 3: the 'after' and 'before' cursors cannot both be set"
        );

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_is_transport() {
        assert!(Error::http_status(500, "").is_transport());
        assert!(!Error::invalid_cursor_options(0).is_transport());
    }
}
