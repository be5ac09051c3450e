//! Tests for the query endpoint client

use super::*;
use insta::assert_snapshot;
use proptest::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> QueryClient {
    QueryClient::new(&format!("{}/query", server.uri())).unwrap()
}

/// An endpoint on a port nothing listens on
fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/query", port)
}

#[test]
fn test_request_body_format() {
    let body = QueryClient::build_request_body("Best hill stations in Kerala").unwrap();
    assert_snapshot!(body, @r#"{"question":"Best hill stations in Kerala"}"#);
}

#[test]
fn test_new_rejects_relative_url() {
    let err = QueryClient::new("/query").unwrap_err();
    assert!(matches!(err, TripqError::InvalidEndpoint { .. }));
}

#[test]
fn test_new_rejects_non_http_scheme() {
    let err = QueryClient::new("localhost:8000/query").unwrap_err();
    assert!(err.to_string().contains("unsupported scheme"));
}

#[test]
fn test_new_keeps_endpoint() {
    let client = QueryClient::new("http://localhost:8000/query").unwrap();
    assert_eq!(client.endpoint(), "http://localhost:8000/query");
}

#[test]
fn test_reply_with_error_keeps_empty_response() {
    let reply: QueryReply =
        serde_json::from_str(r#"{"response": "", "error": "Error: upstream down"}"#).unwrap();
    assert_eq!(reply.into_text(), "");
}

#[test]
fn test_reply_with_text_ignores_error_field() {
    let reply: QueryReply =
        serde_json::from_str(r#"{"response": "Go to Ooty.", "error": "partial"}"#).unwrap();
    assert_eq!(reply.into_text(), "Go to Ooty.");
}

#[tokio::test]
async fn test_ask_returns_response_field_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"question": "Best hill stations in Kerala"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"response": "Try Munnar and Wayanad."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server)
        .ask("Best hill stations in Kerala")
        .await
        .unwrap();

    assert_eq!(text, "Try Munnar and Wayanad.");
}

#[tokio::test]
async fn test_ask_sends_question_untrimmed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(body_json(json!({"question": "  chai in Darjeeling  "})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server).ask("  chai in Darjeeling  ").await.unwrap();
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn test_ask_ignores_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"response": "still here"})))
        .mount(&server)
        .await;

    let text = client_for(&server).ask("anything").await.unwrap();
    assert_eq!(text, "still here");
}

#[tokio::test]
async fn test_ask_non_json_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).ask("test").await.unwrap_err();
    assert!(matches!(err, AskError::Parse(_)));
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn test_ask_missing_response_field_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "wrong key"})))
        .mount(&server)
        .await;

    let err = client_for(&server).ask("test").await.unwrap_err();
    assert!(matches!(err, AskError::Parse(_)));
}

#[tokio::test]
async fn test_ask_unreachable_endpoint_is_network_error() {
    let client = QueryClient::new(&unreachable_endpoint()).unwrap();

    let err = client.ask("test").await.unwrap_err();
    assert!(matches!(err, AskError::Network(_)));
}

#[tokio::test]
async fn test_answer_collapses_failures_to_fallback() {
    let client = QueryClient::new(&unreachable_endpoint()).unwrap();

    let text = client.answer("test").await;
    assert_eq!(text, FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_answer_error_reply_shows_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"response": "", "error": "Error: model timeout"})),
        )
        .mount(&server)
        .await;

    let text = client_for(&server).answer("test").await;
    assert_eq!(text, "");
}

// For any question text, the request body is a JSON object whose only field
// `question` holds exactly that text.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_request_body_carries_exact_question(question in ".*") {
        let body = QueryClient::build_request_body(&question).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        let object = value.as_object().unwrap();
        prop_assert_eq!(object.len(), 1);
        prop_assert_eq!(object.get("question").and_then(|v| v.as_str()), Some(question.as_str()));
    }
}
