//! Pagination request types and loop state
//!
//! `ListOptions` is the caller-facing cursor pair, `Direction` is the
//! explicit loop state derived from it. Direction is a tagged variant
//! rather than "whichever optional field is set": once a run goes
//! `Forward` it can never produce a `before` parameter again, and no
//! request can ever carry both cursors.

use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::types::{OptionStringExt, StringMap};

/// Caller-supplied cursor options for a list request
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Fetch items after this cursor (forward)
    pub after: Option<String>,
    /// Fetch items before this cursor (backward)
    pub before: Option<String>,
}

impl ListOptions {
    /// Create empty options (start from the beginning)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options starting after a cursor
    pub fn starting_after(cursor: impl Into<String>) -> Self {
        Self {
            after: Some(cursor.into()),
            before: None,
        }
    }

    /// Create options ending before a cursor
    pub fn ending_before(cursor: impl Into<String>) -> Self {
        Self {
            after: None,
            before: Some(cursor.into()),
        }
    }

    /// Reject contradictory cursor input before any network activity.
    ///
    /// Empty strings count as absent. `item_index` identifies the calling
    /// batch item in the error.
    pub fn validate(&self, item_index: usize) -> Result<()> {
        let after = self.after.clone().none_if_empty();
        let before = self.before.clone().none_if_empty();

        if after.is_some() && before.is_some() {
            return Err(Error::invalid_cursor_options(item_index));
        }

        Ok(())
    }
}

/// Cursor position threaded through one pagination run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Direction {
    /// No cursor yet (first page of the collection)
    Start,
    /// Paging forward from this cursor (`after`)
    Forward(String),
    /// Paging backward from this cursor (`before`)
    Backward(String),
}

impl Direction {
    /// Derive the initial direction from validated options
    pub fn initial(options: &ListOptions) -> Self {
        if let Some(before) = options.before.clone().none_if_empty() {
            return Self::Backward(before);
        }
        if let Some(after) = options.after.clone().none_if_empty() {
            return Self::Forward(after);
        }
        Self::Start
    }

    /// Advance past the last item of a page.
    ///
    /// A backward run keeps walking backward; everything else locks
    /// forward for the remainder of the run.
    pub fn advance(self, cursor: String) -> Self {
        match self {
            Self::Backward(_) => Self::Backward(cursor),
            Self::Start | Self::Forward(_) => Self::Forward(cursor),
        }
    }

    /// Write the cursor parameter for the next request.
    ///
    /// At most one of `after`/`before` is ever produced.
    pub fn apply(&self, query: &mut StringMap) {
        match self {
            Self::Start => {}
            Self::Forward(cursor) => {
                query.insert("after".to_string(), cursor.clone());
            }
            Self::Backward(cursor) => {
                query.insert("before".to_string(), cursor.clone());
            }
        }
    }

    /// Whether this run pages backward
    pub fn is_backward(&self) -> bool {
        matches!(self, Self::Backward(_))
    }
}

/// One list request: the target collection plus sizing and attribution
#[derive(Debug, Clone)]
pub struct ListRequest {
    /// Absolute URL of the collection endpoint
    pub url: String,
    /// Cursor options
    pub options: ListOptions,
    /// Fetch everything, up to the configured ceiling
    pub return_all: bool,
    /// Explicit total item limit; falls back to the configured default
    pub limit: Option<u32>,
    /// Index of the calling batch item, for error attribution
    pub item_index: usize,
}

impl ListRequest {
    /// Request the default number of items from a collection
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: ListOptions::new(),
            return_all: false,
            limit: None,
            item_index: 0,
        }
    }

    /// Request every item, bounded by the configured ceiling
    pub fn all(url: impl Into<String>) -> Self {
        Self {
            return_all: true,
            ..Self::new(url)
        }
    }

    /// Request at most `limit` items
    pub fn first(url: impl Into<String>, limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new(url)
        }
    }

    /// Set cursor options
    #[must_use]
    pub fn options(mut self, options: ListOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the batch item index used in error attribution
    #[must_use]
    pub fn item_index(mut self, index: usize) -> Self {
        self.item_index = index;
        self
    }

    /// Maximum total items this request may return.
    ///
    /// Absolute for `return_all`; the server's `has_more` cannot raise it.
    pub fn target_limit(&self, config: &FetchConfig) -> u32 {
        if self.return_all {
            config.return_all_ceiling
        } else {
            self.limit.unwrap_or(config.default_limit)
        }
    }

    /// Items requested per individual page
    pub fn page_size(&self, config: &FetchConfig) -> u32 {
        self.target_limit(config).min(config.max_page_size)
    }
}
