use async_trait::async_trait;

/// A text-generating model that accepts mixed text and inline binary parts.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Runs one generation and returns the model's text output.
    async fn generate(
        &self,
        api_key: &str,
        request: &ModelRequest,
    ) -> Result<String, GenerativeModelError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub model: String,
    pub contents: Vec<ModelContent>,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelContent {
    pub role: String,
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text(String),
    /// Base64-encoded bytes tagged with their MIME type.
    InlineData { mime_type: String, data: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub temperature: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerativeModelError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
