//! Gemini content generator

use super::error::GeminiError;
use super::protocol::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use polyglot_application::{ContentGenerator, ContentRequest, GatewayError};
use tracing::{debug, info};

/// Default model tier
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Default REST endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Connection settings for the Gemini API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// [`ContentGenerator`] backed by the Gemini REST API
pub struct GeminiContentGenerator {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiContentGenerator {
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!("GeminiContentGenerator initialized (model: {})", config.model);

        Ok(Self { client, config })
    }

    async fn send(&self, request: &ContentRequest) -> Result<String, GeminiError> {
        let body = GenerateContentRequest::with_media(
            &request.instruction,
            &request.media.uri,
            &request.media.mime_type,
        );

        debug!("Sending {} request to {}", request.kind, self.config.model);

        let response = self
            .client
            .post(self.config.url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorResponse>(&bytes)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned());
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        if let Some(reason) = parsed.block_reason() {
            return Err(GeminiError::Blocked(reason.to_string()));
        }
        parsed.text().ok_or_else(|| {
            debug!(
                "{} response had no text (finish reason: {})",
                request.kind,
                parsed.finish_reason().unwrap_or("none")
            );
            GeminiError::EmptyResponse
        })
    }
}

#[async_trait]
impl ContentGenerator for GeminiContentGenerator {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, request: &ContentRequest) -> Result<String, GatewayError> {
        self.send(request).await.map_err(GatewayError::from)
    }
}
