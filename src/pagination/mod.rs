//! Pagination module
//!
//! The core of the crate: validated cursor options, the explicit
//! direction state, the fetch/accumulate/advance controller, and the
//! pure result assembler.

mod assemble;
mod controller;
mod types;

pub use assemble::assemble;
pub use controller::ListFetcher;
pub use types::{Direction, ListOptions, ListRequest};
