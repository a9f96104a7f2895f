use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the service. The display form is what ends up
    /// in the transcript, prefixed with "Error: " by the session layer.
    #[error("API Error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_matches_transcript_format() {
        let error = ClientError::Api {
            status: 403,
            message: "invalid API key".to_string(),
        };
        assert_eq!(error.to_string(), "API Error: 403 - invalid API key");
    }

    #[test]
    fn malformed_response_display() {
        let error = ClientError::MalformedResponse("response contained no reply text".to_string());
        assert_eq!(
            error.to_string(),
            "Malformed response: response contained no reply text"
        );
    }
}
