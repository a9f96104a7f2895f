//! End-to-end tests: session plus real HTTP client against a mock service

use std::sync::Arc;

use chat_core::Sender;
use chat_session::{ChatSession, SubmitStatus};
use credential_store::{CredentialStore, FileCredentialStore};
use gemini_client::GeminiClient;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn file_store_with_key(dir: &tempfile::TempDir, key: &str) -> Arc<FileCredentialStore> {
    let store = Arc::new(FileCredentialStore::new(dir.path()));
    store.set(key).await.expect("store key");
    store
}

#[tokio::test]
async fn successful_exchange_appends_expected_pair() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-pro:generateContent"))
        .and(header("x-goog-api-key", "stored-key"))
        .and(body_json(serde_json::json!({
            "contents": [
                { "parts": [{ "text": "Hi" }] }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "Hello!" }]
                },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let credentials = file_store_with_key(&dir, "stored-key").await;
    let client = Arc::new(GeminiClient::new().with_api_base(mock_server.uri()));
    let session = ChatSession::new(client, credentials);

    let status = session.submit("Hi").await;
    assert_eq!(status, SubmitStatus::Exchanged);

    let transcript = session.snapshot().await;
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].sender, Sender::User);
    assert_eq!(transcript[0].text, "Hi");
    assert_eq!(transcript[1].sender, Sender::Bot);
    assert_eq!(transcript[1].text, "Hello!");
}

#[tokio::test]
async fn rejected_key_becomes_exact_error_entry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-pro:generateContent"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {
                "code": 403,
                "message": "invalid API key",
                "status": "PERMISSION_DENIED"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let credentials = file_store_with_key(&dir, "bad-key").await;
    let client = Arc::new(GeminiClient::new().with_api_base(mock_server.uri()));
    let session = ChatSession::new(client, credentials);

    session.submit("Hi").await;

    let transcript = session.snapshot().await;
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1].sender, Sender::Bot);
    assert_eq!(transcript[1].text, "Error: API Error: 403 - invalid API key");
}

#[tokio::test]
async fn network_failure_becomes_error_entry() {
    // Nothing listens on port 1; the connection is refused immediately.
    let dir = tempfile::tempdir().expect("tempdir");
    let credentials = file_store_with_key(&dir, "any-key").await;
    let client = Arc::new(GeminiClient::new().with_api_base("http://127.0.0.1:1"));
    let session = ChatSession::new(client, credentials);

    let status = session.submit("Hi").await;
    assert_eq!(status, SubmitStatus::Exchanged);

    let transcript = session.snapshot().await;
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1].sender, Sender::Bot);
    assert!(transcript[1].text.starts_with("Error: "));
    assert!(transcript[1].text.contains("HTTP error"));
}

#[tokio::test]
async fn empty_input_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let credentials = file_store_with_key(&dir, "stored-key").await;
    let client = Arc::new(GeminiClient::new().with_api_base(mock_server.uri()));
    let session = ChatSession::new(client, credentials);

    assert_eq!(session.submit("   ").await, SubmitStatus::Ignored);
    assert!(session.snapshot().await.is_empty());
}

#[tokio::test]
async fn missing_key_is_sent_as_empty_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-pro:generateContent"))
        .and(header("x-goog-api-key", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "who are you?" }] }
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let credentials = Arc::new(FileCredentialStore::new(dir.path()));
    let client = Arc::new(GeminiClient::new().with_api_base(mock_server.uri()));
    let session = ChatSession::new(client, credentials);

    session.submit("Hi").await;

    let transcript = session.snapshot().await;
    assert_eq!(transcript[1].text, "who are you?");
}
