//! Request and response types for the generateContent endpoint.
//!
//! The service has its own wire format:
//! - Messages are called "contents"
//! - Content is an array of "parts"
//! - Requests omit the role; responses carry role "model"
//!
//! # Example request
//! ```json
//! {
//!   "contents": [
//!     {
//!       "parts": [{"text": "Hello"}]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Request body for generateContent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// One message in the request or response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"; omitted on requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// One content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Successful response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One response candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Content,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Error envelope returned alongside non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub code: Option<u16>,
    pub message: Option<String>,
    pub status: Option<String>,
}

impl GenerateContentRequest {
    /// Build the single-turn request for one utterance.
    ///
    /// Each exchange is stateless; prior turns are never included.
    pub fn from_utterance(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: None,
                parts: vec![Part { text: text.into() }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first candidate's first part, if the response has one.
    pub fn reply_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.as_str())
    }
}

impl ErrorResponse {
    /// Message from the error envelope, or the service's stand-in when the
    /// envelope carries none.
    pub fn message_or_unknown(self) -> String {
        self.error
            .and_then(|detail| detail.message)
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}
