//! Result assembly
//!
//! Pure function of the last page, the accumulated items, and the target
//! limit. The controller fully resolves pagination before returning, so
//! the assembled result never signals a continuation.

use crate::types::{JsonObject, JsonValue, ListResult, Page};

/// Build the uniform list result from a finished run.
///
/// The last page's metadata fields are carried over; `data` is replaced
/// by the accumulation truncated to `target_limit`, and `has_more` is
/// forced to false. A `None` last page (no request ever completed) yields
/// a minimal empty result.
pub fn assemble(
    last_page: Option<Page>,
    mut accumulated: Vec<JsonValue>,
    target_limit: u32,
) -> ListResult {
    accumulated.truncate(target_limit as usize);

    let extra = match last_page {
        Some(page) => page.extra,
        None => JsonObject::new(),
    };

    ListResult {
        tag: ListResult::TAG.to_string(),
        data: accumulated,
        has_more: false,
        extra,
    }
}
