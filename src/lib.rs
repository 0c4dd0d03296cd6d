//! # pagesweep
//!
//! Cursor-pagination aggregation for rate-limited REST APIs: point it at
//! a collection endpoint, ask for N items or everything, and get back one
//! uniform result truncated to exactly the requested size.
//!
//! The engine repeatedly fetches pages, honors a minimum inter-request
//! interval, advances an opaque cursor taken from each page's last item,
//! and stops on quota, exhaustion, or a malformed page. Retry/backoff,
//! page caching, and concurrent page fan-out are deliberately out of
//! scope; transport failures propagate unmodified.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagesweep::{HttpExecutor, ListFetcher, ListRequest, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let fetcher = ListFetcher::new(HttpExecutor::with_token("sk_live_..."));
//!
//!     // Everything, up to the configured ceiling (default 1000 items)
//!     let all = fetcher
//!         .fetch_list(&ListRequest::all("https://api.example.com/v1/items"))
//!         .await?;
//!
//!     // Exactly the first 10 items
//!     let ten = fetcher
//!         .fetch_list(&ListRequest::first("https://api.example.com/v1/items", 10))
//!         .await?;
//!
//!     assert!(!all.has_more && !ten.has_more);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! caller ──► ListOptions::validate ──► ListFetcher loop ──► ListResult
//!                                        │        ▲
//!                                 RunPacer wait   │ Page
//!                                        │        │
//!                                        ▼        │
//!                                   Executor (HTTP GET)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Fetch configuration
pub mod config;

/// Request executor and per-run pacing
pub mod http;

/// The pagination engine
pub mod pagination;

pub use config::FetchConfig;
pub use error::{Error, Result};
pub use http::{Executor, HttpExecutor, HttpExecutorConfig, RunPacer};
pub use pagination::{Direction, ListFetcher, ListOptions, ListRequest};
pub use types::{ListResult, Method, Page};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
