//! HTTP client for the generateContent endpoint.

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;

use crate::error::{ClientError, Result};
use crate::protocol::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Completion backend seam. The session layer depends on this trait so tests
/// can substitute scripted implementations.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// One request, one reply. The key is sent as given, never validated.
    async fn generate_reply(&self, api_key: &str, utterance: &str) -> Result<String>;
}

/// Client for the generative language API.
pub struct GeminiClient {
    client: Client,
    api_base: String,
    model: String,
}

impl GeminiClient {
    /// Create a client with the default endpoint and model.
    ///
    /// No request timeout is configured; a request stays in flight until the
    /// service or the connection resolves it.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Set a custom base URL (e.g., for proxies or alternative endpoints).
    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Set the model name (e.g., "gemini-pro", "gemini-1.5-flash").
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn generate_reply(&self, api_key: &str, utterance: &str) -> Result<String> {
        let request = GenerateContentRequest::from_utterance(utterance);
        let url = self.request_url();

        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await?;
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(ErrorResponse::message_or_unknown)
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Api { status, message });
        }

        let body = response.text().await?;
        match serde_json::from_str::<GenerateContentResponse>(&body) {
            Ok(parsed) => match parsed.reply_text() {
                Some(reply) => Ok(reply.to_string()),
                None => Err(ClientError::MalformedResponse(
                    "response contained no reply text".to_string(),
                )),
            },
            Err(e) => {
                error!("Failed to parse generateContent response: {e}");
                Err(ClientError::MalformedResponse(e.to_string()))
            }
        }
    }
}
