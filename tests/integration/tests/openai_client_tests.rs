//! The chat-completion client against a local OpenAI-compatible stub.
//!
//! Run with: cargo test -p integration-tests --test openai_client_tests

use std::sync::Arc;

use chatter_core::entities::{SpamCheckJob, SpamCheckStatus};
use chatter_core::UNPROCESSABLE_REASON;
use chatter_service::{
    classify, AiClientError, ChatCompletions, ChatMessage, OpenAiClient, SpamCheckService,
    SPAM_DETECTION_PROMPT,
};
use integration_tests::{verdict_response, StubOpenAi, TestDeps, TEST_API_KEY};
use serde_json::json;

#[tokio::test]
async fn test_request_carries_key_model_and_messages() {
    let stub = StubOpenAi::json(&verdict_response(false, "fine")).await.unwrap();
    let client = OpenAiClient::new(stub.config());

    let body = client
        .chat_completions(&[ChatMessage::user("hello")], None, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(body["usage"]["total_tokens"], 204);

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(
        request.authorization.as_deref(),
        Some(format!("Bearer {TEST_API_KEY}").as_str())
    );
    assert!(request
        .content_type
        .as_deref()
        .unwrap()
        .starts_with("application/json"));
    assert_eq!(request.body["model"], "gpt-4o-mini");
    assert!((request.body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    assert_eq!(
        request.body["messages"],
        json!([{ "role": "user", "content": "hello" }])
    );
}

#[tokio::test]
async fn test_overrides_replace_configured_defaults() {
    let stub = StubOpenAi::json(&verdict_response(false, "fine")).await.unwrap();
    let client = OpenAiClient::new(stub.config());

    client
        .chat_completions(&[ChatMessage::user("hello")], Some("gpt-4o"), Some(0.0))
        .await
        .unwrap();

    let body = &stub.requests()[0].body;
    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["temperature"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_non_json_body_is_none() {
    let stub = StubOpenAi::start(200, "<html>gateway timeout</html>").await.unwrap();
    let client = OpenAiClient::new(stub.config());

    let body = client
        .chat_completions(&[ChatMessage::user("hello")], None, None)
        .await
        .unwrap();
    assert!(body.is_none());
}

#[tokio::test]
async fn test_error_status_body_is_returned_as_is() {
    let error = json!({ "error": { "message": "Rate limit reached", "type": "requests" } });
    let stub = StubOpenAi::start(429, error.to_string()).await.unwrap();
    let client = OpenAiClient::new(stub.config());

    let body = client
        .chat_completions(&[ChatMessage::user("hello")], None, None)
        .await
        .unwrap();
    assert_eq!(body, Some(error));

    // ...and carries no verdict
    let verdict = classify(&client, "hello").await.unwrap();
    assert!(!verdict.is_spam);
    assert_eq!(verdict.reason, UNPROCESSABLE_REASON);
}

#[tokio::test]
async fn test_classify_sends_prompt_and_reads_verdict() {
    let stub = StubOpenAi::json(&verdict_response(true, "crypto scam")).await.unwrap();
    let client = OpenAiClient::new(stub.config());

    let verdict = classify(&client, "Buy bitcoin now").await.unwrap();
    assert!(verdict.is_spam);
    assert_eq!(verdict.reason, "crypto scam");
    assert_eq!(verdict.usage.unwrap().prompt_tokens, 180);

    let messages = &stub.requests()[0].body["messages"];
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], SPAM_DETECTION_PROMPT);
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "Buy bitcoin now");
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut config = chatter_common::OpenAiConfig::with_api_key(TEST_API_KEY);
    config.base_url = format!("http://127.0.0.1:{port}/v1");
    let client = OpenAiClient::new(config);

    let err = client
        .chat_completions(&[ChatMessage::user("hello")], None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AiClientError::Transport(_)));
    assert_eq!(err.code(), "AI_TRANSPORT_ERROR");
}

#[tokio::test]
async fn test_spam_check_through_http_client() {
    let stub = StubOpenAi::json(&verdict_response(true, "unrelated marketing"))
        .await
        .unwrap();
    let deps = TestDeps::new();
    deps.content.add_discussion(12, &[120]);
    let ctx = deps.context(Arc::new(OpenAiClient::new(stub.config())));

    let check = SpamCheckService::new(&ctx)
        .handle(&SpamCheckJob::discussion(12, "Cheap flights", "Book now"))
        .await
        .unwrap();

    assert_eq!(check.status, SpamCheckStatus::Completed);
    assert_eq!(check.is_spam, Some(true));
    assert!(!deps.content.has_discussion(12));
    assert!(!deps.content.has_post(120));
    assert_eq!(
        stub.requests()[0].body["messages"][1]["content"],
        "Cheap flights\nBook now"
    );
}
