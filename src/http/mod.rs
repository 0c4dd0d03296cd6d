//! HTTP layer
//!
//! The request executor (one authenticated call per page) and the per-run
//! request pacer. Retry, backoff, and caching are deliberately absent:
//! transport failures propagate to the caller unmodified.

mod client;
mod rate_limit;

pub use client::{Executor, HttpExecutor, HttpExecutorConfig};
pub use rate_limit::RunPacer;

#[cfg(test)]
mod tests;
