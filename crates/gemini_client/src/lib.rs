//! HTTP client for the generative language generateContent API.
//!
//! One request per exchange: the utterance goes out as a single content with
//! a single part, the reply comes back as the first candidate's first part.

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{CompletionClient, GeminiClient, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use error::{ClientError, Result};
pub use protocol::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
