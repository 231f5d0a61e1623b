//! Tests for the reqwest executor against a mock endpoint

use ghmodels_core::config::SecretString;
use ghmodels_core::http::client::HttpClient;
use ghmodels_core::http::{CallKind, HttpExecutor, RequestOptions};
use ghmodels_core::protocol::types::{ChatRequest, Message, ResponseFormat};
use ghmodels_core::providers::{GitHubModelsProvider, ProviderError};
use serde_json::json;
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{body_partial_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> GitHubModelsProvider {
    GitHubModelsProvider::new(
        server.uri(),
        "2024-08-01-preview",
        SecretString::new("ghp_test_token"),
    )
}

fn test_chat_request() -> ChatRequest {
    ChatRequest::new(
        "gpt-4o",
        vec![Message::system("Be brief"), Message::user("Hello")],
    )
    .with_temperature(1.0)
    .with_top_p(1.0)
    .with_response_format(ResponseFormat::Text)
}

fn completion_body() -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1727000000,
        "model": "gpt-4o-2024-08-06",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Hi there" },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15 },
        "prompt_filter_results": []
    })
}

/// Test successful JSON response
#[tokio::test]
async fn test_success_json_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(query_param("api-version", "2024-08-01-preview"))
        .and(header("Authorization", "Bearer ghp_test_token"))
        .and(header_exists("X-Request-ID"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "temperature": 1.0,
            "top_p": 1.0,
            "response_format": { "type": "text" },
            "tools": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let client = HttpClient::new().expect("Failed to create client");

    let response = client
        .execute_json(&provider, &test_chat_request(), RequestOptions::new(CallKind::Chat))
        .await
        .expect("Expected successful response");

    assert_eq!(response.id, "chatcmpl-123");
    assert_eq!(response.choices.len(), 1);
    assert_eq!(response.usage.map(|u| u.total_tokens), Some(15));
}

/// The request ID header matches the one in the options
#[tokio::test]
async fn test_request_id_header_is_propagated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body()))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let client = HttpClient::new().unwrap();
    let options = RequestOptions::new(CallKind::Chat);
    let request_id = options.request_id;

    client
        .execute_json(&provider, &test_chat_request(), options)
        .await
        .unwrap();

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let sent = received[0]
        .headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(sent, Some(request_id.to_string()));
}

/// Test deserialization failure with malformed JSON
#[tokio::test]
async fn test_deserialization_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("{ invalid json }", "application/json"),
        )
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let client = HttpClient::new().unwrap();

    let result = client
        .execute_json(&provider, &test_chat_request(), RequestOptions::default())
        .await;

    match result {
        Err(ProviderError::Parse { message }) => assert!(message.contains("request_id")),
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

/// Non-JSON success bodies are rejected
#[tokio::test]
async fn test_invalid_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>hello</html>", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let client = HttpClient::new().unwrap();

    let result = client
        .execute_json(&provider, &test_chat_request(), RequestOptions::default())
        .await;

    assert!(matches!(
        result,
        Err(ProviderError::InvalidContentType { content_type }) if content_type.contains("text/html")
    ));
}

/// Oversized bodies are rejected
#[tokio::test]
async fn test_response_too_large() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body()))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let client = HttpClient::new().unwrap().with_max_response_size(16);

    let result = client
        .execute_json(&provider, &test_chat_request(), RequestOptions::default())
        .await;

    assert!(matches!(
        result,
        Err(ProviderError::ResponseTooLarge { max: 16, .. })
    ));
}

/// Test request timeout
#[tokio::test]
async fn test_request_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let client = HttpClient::new().unwrap();
    let options = RequestOptions::new(CallKind::Chat).with_timeout(Duration::from_millis(100));

    let result = client
        .execute_json(&provider, &test_chat_request(), options)
        .await;

    assert!(matches!(result, Err(ProviderError::Timeout)));
}

/// Connection refused surfaces as a network error
#[tokio::test]
async fn test_connection_refused() {
    let provider = GitHubModelsProvider::new(
        "http://127.0.0.1:1",
        "2024-08-01-preview",
        SecretString::new("ghp_test_token"),
    );
    let client = HttpClient::new().unwrap();

    let result = client
        .execute_json(&provider, &test_chat_request(), RequestOptions::default())
        .await;

    assert!(matches!(result, Err(ProviderError::Network { .. })));
}

#[test_case(401, r#"{"error":{"code":"unauthorized","message":"Bad credentials"}}"# ; "unauthorized")]
#[test_case(403, r#"{"error":{"message":"No access to model"}}"# ; "forbidden")]
#[tokio::test]
async fn test_auth_failures(status: u16, body: &str) {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let client = HttpClient::new().unwrap();

    let result = client
        .execute_json(&provider, &test_chat_request(), RequestOptions::default())
        .await;

    match result {
        Err(err @ ProviderError::Authentication { .. }) => assert!(err.is_auth()),
        other => panic!("Expected Authentication error, got {:?}", other),
    }
}

/// Test rate limiting with Retry-After header
#[tokio::test]
async fn test_rate_limit_with_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "20")
                .set_body_json(json!({ "error": { "message": "Rate limit reached" } })),
        )
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let client = HttpClient::new().unwrap();

    let result = client
        .execute_json(&provider, &test_chat_request(), RequestOptions::default())
        .await;

    match result {
        Err(ProviderError::RateLimit { retry_after }) => {
            assert_eq!(retry_after, Some(Duration::from_secs(20)))
        }
        other => panic!("Expected RateLimit error, got {:?}", other),
    }
}

/// Test server error mapping
#[tokio::test]
async fn test_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let client = HttpClient::new().unwrap();

    let result = client
        .execute_json(&provider, &test_chat_request(), RequestOptions::default())
        .await;

    match result {
        Err(ProviderError::ServerError {
            status_code,
            message,
        }) => {
            assert_eq!(status_code, 503);
            assert!(message.starts_with("upstream unavailable"));
        }
        other => panic!("Expected ServerError, got {:?}", other),
    }
}
