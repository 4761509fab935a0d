//! Search endpoint tests.
//!
//! # Invariants
//! - Log searches match all documents sorted by `asctime` descending
//! - The requested size is sent verbatim, including zero
//! - Hit order from the server is preserved

mod common;

use common::*;
use es_client::SearchRequest;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};

#[tokio::test]
async fn test_search_sends_latest_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fastapi-logs-rag-chat-*/_search"))
        .and(header("authorization", TEST_AUTH_HEADER))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "size": 10,
            "sort": [{"asctime": {"order": "desc"}}],
            "query": {"match_all": {}}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/log_hits.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let response = endpoints::search(
        &client,
        &mock_server.uri(),
        &test_credentials(),
        "fastapi-logs-rag-chat-*",
        &SearchRequest::latest(10, "asctime"),
    )
    .await
    .unwrap();

    let hits = response.hits.hits;
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].index, "fastapi-logs-rag-chat-2025.01.02");
    assert_eq!(hits[0].source.get("levelname"), Some(&json!("ERROR")));
    assert_eq!(hits[1].source.get("message"), Some(&json!("Application started")));
}

#[tokio::test]
async fn test_latest_logs_with_zero_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fastapi-logs-*/_search"))
        .and(body_json(json!({
            "size": 0,
            "sort": [{"asctime": {"order": "desc"}}],
            "query": {"match_all": {}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("search/no_hits.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let hits = test_client(&mock_server)
        .latest_logs("fastapi-logs-*", 0)
        .await
        .unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_missing_index_is_not_found_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fastapi-logs-rag-chat-x/_search"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(load_fixture("search/index_not_found.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server)
        .latest_logs("fastapi-logs-rag-chat-x", 5)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.body().unwrap().contains("index_not_found_exception"));
}

#[tokio::test]
async fn test_failed_query_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fastapi-logs-*/_search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("shard failure"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server)
        .latest_logs("fastapi-logs-*", 10)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.body(), Some("shard failure"));
}

#[tokio::test]
async fn test_accepted_status_is_api_error_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fastapi-logs-*/_search"))
        .respond_with(ResponseTemplate::new(202).set_body_string("queued"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server)
        .latest_logs("fastapi-logs-*", 10)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(202));
    assert_eq!(err.body(), Some("queued"));
}
