use mockito::{Matcher, Server};
use std::time::Duration;
use tutor_gateway::error::LlmError;
use tutor_gateway::llm::{CompletionClient, OpenAiClient};

fn client(base_url: &str) -> OpenAiClient {
    OpenAiClient::new(base_url, "sk-test", "gpt-4.1-mini", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn sends_chat_request_and_returns_first_choice() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "model": "gpt-4.1-mini",
            "messages": [
                {"role": "system", "content": "be brief"},
                {"role": "user", "content": "what is 2+2?"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "4"}}, {"message": {"content": "four"}}]}"#)
        .create_async()
        .await;

    let reply = client(&server.url()).complete("be brief", "what is 2+2?").await.unwrap();

    assert_eq!(reply, "4");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body("rate limited")
        .create_async()
        .await;

    let err = client(&server.url()).complete("s", "u").await.unwrap_err();

    assert!(err.is_rate_limited());
    assert!(matches!(err, LlmError::Status { status: 429, ref body } if body == "rate limited"));
}

#[tokio::test]
async fn empty_choices_is_invalid_response() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let err = client(&server.url()).complete("s", "u").await.unwrap_err();
    assert!(matches!(err, LlmError::InvalidResponse(_)));
}

#[tokio::test]
async fn garbage_body_is_invalid_response() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let err = client(&server.url()).complete("s", "u").await.unwrap_err();
    assert!(matches!(err, LlmError::InvalidResponse(_)));
}
