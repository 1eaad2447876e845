//! HTTP API tests: intake, lookups and probes against a server backed by
//! in-memory storage and a scripted classifier.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use chatter_core::entities::SubjectType;
use integration_tests::{
    assert_json, assert_status, verdict_response, StubCompletions, StubReply, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn legit_server() -> TestServer {
    TestServer::start(Arc::new(StubCompletions::verdict(false, "legitimate inquiry")))
        .await
        .expect("Failed to start server")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = legit_server().await;
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready_without_database() {
    let server = legit_server().await;
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "not_configured");
    assert_eq!(body["checks"]["queue"], "open");
}

// ============================================================================
// Intake
// ============================================================================

#[tokio::test]
async fn test_enqueue_then_fetch_check() {
    let server = legit_server().await;
    server.deps.content.add_discussion(31, &[]);

    let request = json!({
        "subject_type": "discussion",
        "subject_id": 31,
        "title": "Lodge coverage",
        "content": "Need coverage for a lodge"
    });
    let response = server.post("/api/v1/spam-checks", &request).await.unwrap();
    assert_status(response, StatusCode::ACCEPTED).await.unwrap();

    let check = server
        .deps
        .wait_for_terminal(SubjectType::Discussion, 31)
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/spam-checks/{}", check.id))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["id"], check.id.to_string());
    assert_eq!(body["subject_type"], "discussion");
    assert_eq!(body["subject_id"], 31);
    assert_eq!(body["title"], "Lodge coverage");
    assert_eq!(body["status"], "completed");
    assert_eq!(body["is_spam"], false);
    assert_eq!(body["spam_reason"], "legitimate inquiry");
    assert_eq!(body["metadata"]["total_tokens"], 204);
    assert!(body["error"].is_null());
    assert!(server.deps.content.has_discussion(31));
}

#[tokio::test]
async fn test_enqueued_spam_post_is_removed() {
    let server = TestServer::start(Arc::new(StubCompletions::verdict(true, "crypto scam")))
        .await
        .unwrap();
    server.deps.content.add_discussion(1, &[41, 42]);

    let request = json!({
        "subject_type": "post",
        "subject_id": 42,
        "title": "ignored for posts",
        "content": "Buy bitcoin now"
    });
    let response = server.post("/api/v1/spam-checks", &request).await.unwrap();
    assert_status(response, StatusCode::ACCEPTED).await.unwrap();

    let check = server.deps.wait_for_terminal(SubjectType::Post, 42).await.unwrap();
    assert_eq!(check.is_spam, Some(true));
    assert!(check.title.is_none());
    assert!(!server.deps.content.has_post(42));
    assert!(server.deps.content.has_post(41));
}

#[tokio::test]
async fn test_enqueue_validation_errors() {
    let server = legit_server().await;

    let request = json!({ "subject_type": "post", "subject_id": 0, "content": "" });
    let response = server.post("/api/v1/spam-checks", &request).await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["subject_id"].is_array());
    assert!(body["error"]["details"]["content"].is_array());

    let request = json!({ "subject_type": "comment", "subject_id": 5, "content": "hi" });
    let response = server.post("/api/v1/spam-checks", &request).await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_BODY");

    // Nothing was queued
    assert!(server.deps.checks.all().is_empty());
}

// ============================================================================
// Lookups
// ============================================================================

#[tokio::test]
async fn test_get_unknown_check() {
    let server = legit_server().await;

    let response = server
        .get("/api/v1/spam-checks/00000000-0000-0000-0000-000000000000")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "UNKNOWN_SPAM_CHECK");

    let response = server.get("/api/v1/spam-checks/not-a-uuid").await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_list_by_subject_and_status() {
    let server = TestServer::start(Arc::new(StubCompletions::new([
        StubReply::Body(verdict_response(false, "fine")),
        StubReply::NotJson,
    ])))
    .await
    .unwrap();

    for content in ["first", "second"] {
        let request = json!({ "subject_type": "post", "subject_id": 77, "content": content });
        let response = server.post("/api/v1/spam-checks", &request).await.unwrap();
        assert_status(response, StatusCode::ACCEPTED).await.unwrap();
    }
    server.deps.wait_for_terminal(SubjectType::Post, 77).await.unwrap();
    // Both checks must be finished before listing
    for _ in 0..250 {
        let checks = server.deps.checks.all();
        if checks.len() == 2 && checks.iter().all(|c| c.is_terminal()) {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    let response = server
        .get("/api/v1/spam-checks?subject_type=post&subject_id=77")
        .await
        .unwrap();
    let body: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.len(), 2);
    assert!(body.iter().all(|c| c["status"] == "completed"));
    assert!(body.iter().all(|c| c["subject_id"] == 77));

    let response = server
        .get("/api/v1/spam-checks?subject_type=post&subject_id=77&limit=1")
        .await
        .unwrap();
    let body: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.len(), 1);

    let response = server.get("/api/v1/spam-checks?status=failed").await.unwrap();
    let body: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.is_empty());

    let response = server
        .get("/api/v1/spam-checks?status=completed&is_spam=false")
        .await
        .unwrap();
    let body: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.len(), 2);
}

#[tokio::test]
async fn test_list_rejects_partial_subject() {
    let server = legit_server().await;

    let response = server.get("/api/v1/spam-checks?subject_id=5").await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let response = server.get("/api/v1/spam-checks?status=exploded").await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_QUERY_PARAMETER");
}
