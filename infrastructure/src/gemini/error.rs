//! Error types for the Gemini adapter

use polyglot_application::GatewayError;
use thiserror::Error;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode Gemini response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Prompt was blocked: {0}")]
    Blocked(String),

    #[error("Gemini returned no text")]
    EmptyResponse,
}

impl From<GeminiError> for GatewayError {
    fn from(error: GeminiError) -> Self {
        match error {
            GeminiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            GeminiError::Api { status, message } if status == 401 || status == 403 => {
                GatewayError::AuthenticationFailed(message)
            }
            GeminiError::Api { status: 404, message } => GatewayError::ModelNotAvailable(message),
            GeminiError::EmptyResponse => GatewayError::EmptyResponse,
            other => GatewayError::RequestFailed(other.to_string()),
        }
    }
}
