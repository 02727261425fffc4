use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    ContentPart, GenerativeModel, GenerativeModelError, ModelContent, ModelRequest,
};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::config::GeminiSettings;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Gemini `generateContent` adapter.
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<WireContent>,
    generation_config: WireGenerationConfig,
}

#[derive(Serialize)]
struct WireContent {
    role: String,
    parts: Vec<WirePart>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum WirePart {
    Text {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    InlineData {
        inline_data: WireBlob,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireBlob {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    response_mime_type: String,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GenerativeModelError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerativeModelError::ApiRequestFailed(format!("client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &GeminiSettings) -> Result<Self, GenerativeModelError> {
        Self::new(
            &settings.base_url,
            Duration::from_secs(settings.timeout_secs),
        )
    }

    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

impl From<&ModelRequest> for GenerateContentRequest {
    fn from(request: &ModelRequest) -> Self {
        Self {
            contents: request.contents.iter().map(WireContent::from).collect(),
            generation_config: WireGenerationConfig {
                response_mime_type: request.generation.response_mime_type.clone(),
                temperature: request.generation.temperature,
            },
        }
    }
}

impl From<&ModelContent> for WireContent {
    fn from(content: &ModelContent) -> Self {
        Self {
            role: content.role.clone(),
            parts: content
                .parts
                .iter()
                .map(|part| match part {
                    ContentPart::Text(text) => WirePart::Text { text: text.clone() },
                    ContentPart::InlineData { mime_type, data } => WirePart::InlineData {
                        inline_data: WireBlob {
                            mime_type: mime_type.clone(),
                            data: data.clone(),
                        },
                    },
                })
                .collect(),
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(
        &self,
        api_key: &str,
        request: &ModelRequest,
    ) -> Result<String, GenerativeModelError> {
        let url = self.endpoint(&request.model);
        let body = GenerateContentRequest::from(request);

        tracing::debug!(model = %request.model, "Sending generateContent request to Gemini");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerativeModelError::ApiRequestFailed(e.without_url().to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerativeModelError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GenerativeModelError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, message
            )));
        }

        let generated: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerativeModelError::InvalidResponse(e.without_url().to_string()))?;

        let text = generated
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                GenerativeModelError::InvalidResponse("response contained no text".to_string())
            })?;

        tracing::debug!(response = %sanitize_for_log(&text), "Gemini response received");

        Ok(text)
    }
}
