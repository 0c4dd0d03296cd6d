//! Pagination controller
//!
//! Owns the fetch/accumulate/advance loop. One run is strictly
//! sequential: page N+1's cursor comes from page N's last item, so the
//! only suspension point besides the requests themselves is the pacer
//! wait. All run state lives on this stack frame; nothing persists
//! across calls and concurrent runs never share state.

use super::assemble::assemble;
use super::types::{Direction, ListRequest};
use crate::config::FetchConfig;
use crate::error::Result;
use crate::http::{Executor, RunPacer};
use crate::types::{
    extract_field, JsonValue, ListResult, Method, OptionStringExt, Page, StringMap,
};
use tracing::{debug, warn};

/// Drains a cursor-paginated collection into one uniform result
#[derive(Debug)]
pub struct ListFetcher<E> {
    executor: E,
    config: FetchConfig,
}

impl<E: Executor> ListFetcher<E> {
    /// Create a fetcher with default configuration
    pub fn new(executor: E) -> Self {
        Self::with_config(executor, FetchConfig::default())
    }

    /// Create a fetcher with custom configuration
    pub fn with_config(executor: E, config: FetchConfig) -> Self {
        Self { executor, config }
    }

    /// The active configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch pages until the requested item count is reached or the
    /// collection is exhausted, and return one uniform result.
    ///
    /// Items arrive in server order across pages, never resorted, and
    /// the result is truncated to exactly the requested size. Transport
    /// errors abort the run and discard anything accumulated so far.
    pub async fn fetch_list(&self, request: &ListRequest) -> Result<ListResult> {
        request.options.validate(request.item_index)?;

        let target_limit = request.target_limit(&self.config);
        let page_size = request.page_size(&self.config);

        let mut direction = Direction::initial(&request.options);
        let mut accumulated: Vec<JsonValue> = Vec::new();
        let mut last_page: Option<Page> = None;
        let pacer = RunPacer::new(self.config.request_interval);

        loop {
            // Immediate on the first pass, interval-gated afterwards
            pacer.wait().await;

            let mut query = StringMap::new();
            query.insert("limit".to_string(), page_size.to_string());
            direction.apply(&mut query);

            let mut page = self
                .executor
                .execute(Method::GET, &request.url, &query)
                .await?;

            let batch = std::mem::take(&mut page.data);
            let batch_len = batch.len();
            let has_more = page.has_more;
            // An empty identifier is no cursor at all
            let next_cursor = batch
                .last()
                .and_then(|item| extract_field(item, &self.config.cursor_path))
                .none_if_empty();

            accumulated.extend(batch);
            last_page = Some(page);

            debug!(
                "accumulated {}/{} items from {}",
                accumulated.len(),
                target_limit,
                request.url
            );

            // Quota reached
            if accumulated.len() >= target_limit as usize {
                break;
            }

            // Collection exhausted
            if !has_more || batch_len == 0 {
                break;
            }

            // Malformed page: cannot continue safely, return what we have
            let Some(cursor) = next_cursor else {
                warn!(
                    "last item of page has no '{}' field, stopping with {} items",
                    self.config.cursor_path,
                    accumulated.len()
                );
                break;
            };

            direction = direction.advance(cursor);
        }

        Ok(assemble(last_page, accumulated, target_limit))
    }
}
