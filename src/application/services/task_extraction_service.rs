use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};

use crate::application::ports::{
    ContentPart, CredentialProvider, GenerationConfig, GenerativeModel, GenerativeModelError,
    ModelContent, ModelRequest,
};
use crate::domain::{AudioClip, AudioSubmission, Task};

use super::response_unwrapper::{UnwrapError, parse_task};
use super::task_prompt::build_task_prompt;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
const JSON_MIME: &str = "application/json";

#[derive(Debug, Clone)]
pub struct ExtractionOptions {
    pub model: String,
    pub temperature: f32,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Turns a recorded voice memo into a structured [`Task`].
pub struct TaskExtractionService {
    model: Arc<dyn GenerativeModel>,
    credentials: Arc<dyn CredentialProvider>,
    options: ExtractionOptions,
    prompt: String,
}

impl TaskExtractionService {
    pub fn new(
        model: Arc<dyn GenerativeModel>,
        credentials: Arc<dyn CredentialProvider>,
        options: ExtractionOptions,
    ) -> Self {
        Self {
            model,
            credentials,
            options,
            prompt: build_task_prompt(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.options.model
    }

    /// Whether a key is available right now. Looked up on every call.
    pub fn has_credentials(&self) -> bool {
        self.credentials.api_key().is_some()
    }

    pub async fn extract(&self, submission: AudioSubmission) -> Result<Task, ExtractionError> {
        // An empty form value is as good as no field at all.
        let submission = match submission {
            AudioSubmission::Missing => return Err(ExtractionError::MissingAudio),
            AudioSubmission::Text(text) if text.is_empty() => {
                return Err(ExtractionError::MissingAudio);
            }
            other => other,
        };

        let api_key = self
            .credentials
            .api_key()
            .ok_or_else(|| ExtractionError::MissingCredential(self.credentials.name().to_string()))?;

        let AudioSubmission::Blob(clip) = submission else {
            return Err(ExtractionError::InvalidAudioFormat);
        };

        tracing::debug!(
            bytes = clip.len(),
            mime_type = %clip.mime_type,
            model = %self.options.model,
            "Requesting task extraction"
        );

        let request = self.build_request(&clip);
        let text = self.model.generate(&api_key, &request).await?;
        let task = parse_task(&text)?;

        tracing::info!(
            room = %task.room,
            department = %task.department(),
            "Task extracted from audio"
        );

        Ok(task)
    }

    fn build_request(&self, clip: &AudioClip) -> ModelRequest {
        let data = general_purpose::STANDARD.encode(&clip.data);

        ModelRequest {
            model: self.options.model.clone(),
            contents: vec![ModelContent {
                role: "user".to_string(),
                parts: vec![
                    ContentPart::Text(self.prompt.clone()),
                    ContentPart::InlineData {
                        mime_type: clip.mime_type.clone(),
                        data,
                    },
                ],
            }],
            generation: GenerationConfig {
                response_mime_type: JSON_MIME.to_string(),
                temperature: self.options.temperature,
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("No valid audio file found.")]
    MissingAudio,
    #[error("Invalid audio file format.")]
    InvalidAudioFormat,
    #[error("{0} not configured.")]
    MissingCredential(String),
    #[error("{0}")]
    Model(#[from] GenerativeModelError),
    #[error("{0}")]
    Response(#[from] UnwrapError),
}

impl ExtractionError {
    /// Whether the caller sent something unusable, as opposed to a server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExtractionError::MissingAudio | ExtractionError::InvalidAudioFormat
        )
    }
}
