//! Integration tests for `es-manager templates`.

mod common;

use common::{es_manager_cmd_with_host, load_fixture};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_health(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/_cluster/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("cluster/health_green.json")),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_templates_lists_custom_templates_after_health() {
    let server = MockServer::start().await;
    mount_health(&server).await;

    Mock::given(method("GET"))
        .and(path("/_index_template"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("templates/list_templates.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = es_manager_cmd_with_host(&server.uri());
    cmd.arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("🟢 Cluster: docker-cluster\n"))
        .stdout(predicate::str::contains(
            "📋 Found 2 custom template(s):\n\n  • fastapi-logs-template\n    Pattern: fastapi-logs-*\n    Priority: 200\n\n  • fastapi-rag-chat\n    Pattern: fastapi-logs-rag-chat-*, fastapi-rag-*\n    Priority: 0\n\n",
        ))
        .stdout(predicate::str::contains("ilm-history").not());
}

#[tokio::test]
async fn test_templates_none_custom() {
    let server = MockServer::start().await;
    mount_health(&server).await;

    Mock::given(method("GET"))
        .and(path("/_index_template"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "index_templates": [
                {"name": "logs-default", "index_template": {"index_patterns": ["logs-*"]}}
            ]
        })))
        .mount(&server)
        .await;

    let mut cmd = es_manager_cmd_with_host(&server.uri());
    cmd.arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "📋 No custom templates found (no fastapi-* templates)\n",
        ));
}

#[tokio::test]
async fn test_templates_request_failure() {
    let server = MockServer::start().await;
    mount_health(&server).await;

    Mock::given(method("GET"))
        .and(path("/_index_template"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let mut cmd = es_manager_cmd_with_host(&server.uri());
    cmd.arg("templates")
        .assert()
        .code(1)
        .stdout(predicate::str::ends_with("❌ Request failed: 403\n"));
}

#[tokio::test]
async fn test_templates_skipped_when_health_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_cluster/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/_index_template"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut cmd = es_manager_cmd_with_host(&server.uri());
    cmd.arg("templates")
        .assert()
        .code(1)
        .stdout("❌ Could not connect to Elasticsearch\n");
}
