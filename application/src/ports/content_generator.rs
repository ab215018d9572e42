//! Content generator port
//!
//! Defines the interface for requesting structured content from a
//! generative model. The model resolves the media itself; callers hand it
//! the original URL together with an instruction.

use async_trait::async_trait;
use polyglot_domain::ContentKind;
use thiserror::Error;

/// MIME hint sent alongside the video reference.
pub const VIDEO_MIME_TYPE: &str = "video/mp4";

/// Errors that can occur while talking to the model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("The model returned an empty response")]
    EmptyResponse,

    #[error("Request timed out")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Media the model should analyze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaReference {
    pub uri: String,
    pub mime_type: String,
}

impl MediaReference {
    pub fn video(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            mime_type: VIDEO_MIME_TYPE.to_string(),
        }
    }
}

/// A single structured-generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    /// Which part of the learning content this request produces
    pub kind: ContentKind,
    /// Natural-language instruction, including the expected output schema
    pub instruction: String,
    pub media: MediaReference,
}

impl ContentRequest {
    pub fn new(kind: ContentKind, instruction: impl Into<String>, media: MediaReference) -> Self {
        Self {
            kind,
            instruction: instruction.into(),
            media,
        }
    }
}

/// Gateway to a generative model
///
/// Implementations (adapters) live in the infrastructure layer. Tests use
/// deterministic fakes.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Name of the model tier requests are sent to
    fn model_name(&self) -> &str;

    /// Send one request and return the model's raw text
    async fn generate(&self, request: &ContentRequest) -> Result<String, GatewayError>;
}
