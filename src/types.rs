//! Common types used throughout pagesweep
//!
//! Shared type aliases, the wire shapes for pages and list results,
//! and the cursor-field extraction helper.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PUT => reqwest::Method::PUT,
            Method::PATCH => reqwest::Method::PATCH,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

// ============================================================================
// Wire Shapes
// ============================================================================

/// One server response: a bounded batch of items plus a continuation flag.
///
/// Server fields beyond `data` and `has_more` are captured in `extra`
/// and passed through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// Items in server order
    #[serde(default)]
    pub data: Vec<JsonValue>,
    /// Whether additional items exist beyond this page
    #[serde(default)]
    pub has_more: bool,
    /// Any other server-supplied fields
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Page {
    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page carries no items
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// The uniform result of a fully resolved pagination run.
///
/// `has_more` is always false: the controller never exposes an unfinished
/// continuation to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResult {
    /// Result discriminator, always `"list"`
    pub tag: String,
    /// Accumulated items, truncated to the requested size
    pub data: Vec<JsonValue>,
    /// Always false
    pub has_more: bool,
    /// Metadata carried over from the last fetched page
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl ListResult {
    /// The discriminator value for list results
    pub const TAG: &'static str = "list";

    /// Create an empty list result with no metadata
    pub fn empty() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            data: Vec::new(),
            has_more: false,
            extra: JsonObject::new(),
        }
    }
}

// ============================================================================
// Cursor Extraction
// ============================================================================

/// Extract a string field from an item by dot-separated path.
///
/// `"id"` reads a top-level field; `"meta.id"` walks nested objects.
/// Numeric values are stringified; null, missing, and structured values
/// yield `None`.
pub fn extract_field(item: &JsonValue, path: &str) -> Option<String> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = item;
    for part in path.split('.') {
        match current {
            JsonValue::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }

    match current {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_conversion() {
        let get: reqwest::Method = Method::GET.into();
        assert_eq!(reqwest::Method::GET, get);
        let post: reqwest::Method = Method::POST.into();
        assert_eq!(reqwest::Method::POST, post);
    }

    #[test]
    fn test_method_default() {
        assert_eq!(Method::default(), Method::GET);
    }

    #[test]
    fn test_page_deserialize_preserves_extra() {
        let page: Page = serde_json::from_value(json!({
            "data": [{"id": "a"}, {"id": "b"}],
            "has_more": true,
            "url": "/v1/items",
            "total_count": 42
        }))
        .unwrap();

        assert_eq!(page.len(), 2);
        assert!(page.has_more);
        assert_eq!(page.extra.get("url"), Some(&json!("/v1/items")));
        assert_eq!(page.extra.get("total_count"), Some(&json!(42)));
    }

    #[test]
    fn test_page_defaults() {
        let page: Page = serde_json::from_value(json!({})).unwrap();
        assert!(page.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_list_result_empty() {
        let result = ListResult::empty();
        assert_eq!(result.tag, "list");
        assert!(result.data.is_empty());
        assert!(!result.has_more);
    }

    #[test]
    fn test_extract_field_top_level() {
        let item = json!({"id": "obj_123", "name": "widget"});
        assert_eq!(extract_field(&item, "id"), Some("obj_123".to_string()));
    }

    #[test]
    fn test_extract_field_nested() {
        let item = json!({"meta": {"cursor": "abc"}});
        assert_eq!(
            extract_field(&item, "meta.cursor"),
            Some("abc".to_string())
        );
        assert_eq!(
            extract_field(&item, "$.meta.cursor"),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_extract_field_numeric() {
        let item = json!({"id": 42});
        assert_eq!(extract_field(&item, "id"), Some("42".to_string()));
    }

    #[test]
    fn test_extract_field_missing_or_null() {
        let item = json!({"name": "widget", "id": null});
        assert_eq!(extract_field(&item, "id"), None);
        assert_eq!(extract_field(&item, "missing"), None);
        assert_eq!(extract_field(&json!("not an object"), "id"), None);
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!("".to_string().none_if_empty(), None);
    }
}
