//! Tests for the HTTP layer

use super::*;
use crate::error::Error;
use crate::types::{Method, StringMap};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_executor_config_default() {
    let config = HttpExecutorConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.bearer_token.is_none());
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("pagesweep/"));
}

#[test]
fn test_executor_config_builder() {
    let config = HttpExecutorConfig::builder()
        .timeout(Duration::from_secs(10))
        .bearer_token("sk_test_123")
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(10));
    assert_eq!(config.bearer_token, Some("sk_test_123".to_string()));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_executor_get_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/items"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "a"}, {"id": "b"}],
            "has_more": true
        })))
        .mount(&mock_server)
        .await;

    let executor = HttpExecutor::new();
    let mut query = StringMap::new();
    query.insert("limit".to_string(), "50".to_string());

    let page = executor
        .execute(Method::GET, &format!("{}/v1/items", mock_server.uri()), &query)
        .await
        .unwrap();

    assert_eq!(page.len(), 2);
    assert!(page.has_more);
}

#[tokio::test]
async fn test_executor_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/items"))
        .and(header("authorization", "Bearer sk_test_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "has_more": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let executor = HttpExecutor::with_token("sk_test_123");
    let page = executor
        .execute(
            Method::GET,
            &format!("{}/v1/items", mock_server.uri()),
            &StringMap::new(),
        )
        .await
        .unwrap();

    assert!(page.is_empty());
}

#[tokio::test]
async fn test_executor_sends_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/items"))
        .and(header("X-Api-Version", "2024-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&mock_server)
        .await;

    let executor = HttpExecutor::with_config(
        HttpExecutorConfig::builder()
            .header("X-Api-Version", "2024-01")
            .build(),
    );

    let result = executor
        .execute(
            Method::GET,
            &format!("{}/v1/items", mock_server.uri()),
            &StringMap::new(),
        )
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_executor_maps_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/items"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&mock_server)
        .await;

    let executor = HttpExecutor::new();
    let result = executor
        .execute(
            Method::GET,
            &format!("{}/v1/items", mock_server.uri()),
            &StringMap::new(),
        )
        .await;

    match result.unwrap_err() {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Invalid API key");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_executor_no_retry_on_server_error() {
    let mock_server = MockServer::start().await;

    // A single call only: transport failures are not retried here
    Mock::given(method("GET"))
        .and(path("/v1/items"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let executor = HttpExecutor::new();
    let result = executor
        .execute(
            Method::GET,
            &format!("{}/v1/items", mock_server.uri()),
            &StringMap::new(),
        )
        .await;

    assert!(matches!(
        result.unwrap_err(),
        Error::HttpStatus { status: 503, .. }
    ));
}

#[tokio::test]
async fn test_executor_rejects_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let executor = HttpExecutor::new();
    let result = executor
        .execute(
            Method::GET,
            &format!("{}/v1/items", mock_server.uri()),
            &StringMap::new(),
        )
        .await;

    assert!(matches!(result.unwrap_err(), Error::JsonParse(_)));
}

#[tokio::test]
async fn test_executor_rejects_invalid_url() {
    let executor = HttpExecutor::new();
    let result = executor
        .execute(Method::GET, "not a url", &StringMap::new())
        .await;

    assert!(matches!(result.unwrap_err(), Error::InvalidUrl(_)));
}

#[tokio::test]
async fn test_executor_preserves_extra_page_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{"id": "a"}],
            "has_more": false,
            "url": "/v1/items"
        })))
        .mount(&mock_server)
        .await;

    let executor = HttpExecutor::new();
    let page = executor
        .execute(
            Method::GET,
            &format!("{}/v1/items", mock_server.uri()),
            &StringMap::new(),
        )
        .await
        .unwrap();

    assert_eq!(page.extra.get("object"), Some(&json!("list")));
    assert_eq!(page.extra.get("url"), Some(&json!("/v1/items")));
}

#[test]
fn test_executor_debug_hides_token() {
    let executor = HttpExecutor::with_token("sk_secret");
    let debug_str = format!("{executor:?}");
    assert!(debug_str.contains("has_token"));
    assert!(!debug_str.contains("sk_secret"));
}
