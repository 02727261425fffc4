use std::sync::Arc;

use voicedesk::application::ports::{ContentPart, GenerativeModelError};
use voicedesk::application::services::{
    ExtractionError, ExtractionOptions, TaskExtractionService, UnwrapError,
};
use voicedesk::domain::{AudioClip, AudioSubmission, Task};
use voicedesk::infrastructure::credentials::StaticCredentialProvider;
use voicedesk::infrastructure::llm::MockGenerativeModel;

const TASK_JSON: &str = r#"{"room":"405","category":"Engineering","title":"Broken AC","assignee":"John","dueTime":"ASAP"}"#;

fn service_with(
    model: Arc<MockGenerativeModel>,
    credentials: StaticCredentialProvider,
) -> TaskExtractionService {
    TaskExtractionService::new(model, Arc::new(credentials), ExtractionOptions::default())
}

fn audio_blob() -> AudioSubmission {
    AudioSubmission::Blob(AudioClip::new(b"RIFF fake audio".to_vec(), Some("audio/wav")))
}

#[tokio::test]
async fn given_valid_audio_when_extracting_then_returns_parsed_task_after_one_call() {
    let model = Arc::new(MockGenerativeModel::new(TASK_JSON));
    let service = service_with(Arc::clone(&model), StaticCredentialProvider::configured("key"));

    let task = service.extract(audio_blob()).await.unwrap();

    assert_eq!(task, Task::new("405", "Engineering", "Broken AC", "John", "ASAP"));
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn given_valid_audio_when_extracting_then_sends_prompt_audio_and_generation_config() {
    let model = Arc::new(MockGenerativeModel::new(TASK_JSON));
    let service = service_with(Arc::clone(&model), StaticCredentialProvider::configured("key"));

    service.extract(audio_blob()).await.unwrap();

    let request = model.last_request().unwrap();
    assert_eq!(request.model, "gemini-2.5-flash");
    assert_eq!(request.generation.response_mime_type, "application/json");
    assert!((request.generation.temperature - 0.3).abs() < f32::EPSILON);
    assert_eq!(request.contents.len(), 1);
    assert_eq!(request.contents[0].role, "user");

    let parts = &request.contents[0].parts;
    assert_eq!(parts.len(), 2);
    assert!(matches!(&parts[0], ContentPart::Text(text) if text.contains("hotel staff")));
    assert_eq!(
        parts[1],
        ContentPart::InlineData {
            mime_type: "audio/wav".to_string(),
            data: "UklGRiBmYWtlIGF1ZGlv".to_string(),
        }
    );
}

#[tokio::test]
async fn given_clip_without_mime_when_extracting_then_sends_default_webm() {
    let model = Arc::new(MockGenerativeModel::new(TASK_JSON));
    let service = service_with(Arc::clone(&model), StaticCredentialProvider::configured("key"));

    service
        .extract(AudioSubmission::Blob(AudioClip::new(vec![0xff, 0x00], None)))
        .await
        .unwrap();

    let request = model.last_request().unwrap();
    assert!(matches!(
        &request.contents[0].parts[1],
        ContentPart::InlineData { mime_type, data } if mime_type == "audio/webm" && data == "/wA="
    ));
}

#[tokio::test]
async fn given_custom_options_when_extracting_then_uses_them() {
    let model = Arc::new(MockGenerativeModel::new(TASK_JSON));
    let service = TaskExtractionService::new(
        model.clone(),
        Arc::new(StaticCredentialProvider::configured("key")),
        ExtractionOptions {
            model: "gemini-2.0-flash".to_string(),
            temperature: 0.0,
        },
    );

    service.extract(audio_blob()).await.unwrap();

    let request = model.last_request().unwrap();
    assert_eq!(request.model, "gemini-2.0-flash");
    assert_eq!(request.generation.temperature, 0.0);
}

#[tokio::test]
async fn given_missing_audio_when_extracting_then_fails_without_calling_model() {
    let model = Arc::new(MockGenerativeModel::new(TASK_JSON));
    let service = service_with(Arc::clone(&model), StaticCredentialProvider::configured("key"));

    let err = service.extract(AudioSubmission::Missing).await.unwrap_err();

    assert!(matches!(err, ExtractionError::MissingAudio));
    assert_eq!(err.to_string(), "No valid audio file found.");
    assert!(err.is_client_error());
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn given_empty_text_value_when_extracting_then_treated_as_missing() {
    let model = Arc::new(MockGenerativeModel::new(TASK_JSON));
    let service = service_with(Arc::clone(&model), StaticCredentialProvider::configured("key"));

    let err = service
        .extract(AudioSubmission::Text(String::new()))
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractionError::MissingAudio));
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn given_text_value_when_extracting_then_rejects_format_without_calling_model() {
    let model = Arc::new(MockGenerativeModel::new(TASK_JSON));
    let service = service_with(Arc::clone(&model), StaticCredentialProvider::configured("key"));

    let err = service
        .extract(AudioSubmission::Text("recording.webm".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractionError::InvalidAudioFormat));
    assert_eq!(err.to_string(), "Invalid audio file format.");
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn given_no_credential_when_extracting_then_reports_configuration_error_without_call() {
    let model = Arc::new(MockGenerativeModel::new(TASK_JSON));
    let service = service_with(Arc::clone(&model), StaticCredentialProvider::absent());

    let err = service.extract(audio_blob()).await.unwrap_err();

    assert!(matches!(err, ExtractionError::MissingCredential(_)));
    assert_eq!(err.to_string(), "GEMINI_API_KEY not configured.");
    assert!(!err.is_client_error());
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn given_text_value_and_no_credential_when_extracting_then_credential_error_wins() {
    let model = Arc::new(MockGenerativeModel::new(TASK_JSON));
    let service = service_with(Arc::clone(&model), StaticCredentialProvider::absent());

    let err = service
        .extract(AudioSubmission::Text("oops".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractionError::MissingCredential(_)));
}

#[tokio::test]
async fn given_model_failure_when_extracting_then_forwards_message() {
    let model = Arc::new(MockGenerativeModel::failing("quota exceeded"));
    let service = service_with(Arc::clone(&model), StaticCredentialProvider::configured("key"));

    let err = service.extract(audio_blob()).await.unwrap_err();

    assert!(matches!(
        err,
        ExtractionError::Model(GenerativeModelError::ApiRequestFailed(_))
    ));
    assert!(err.to_string().contains("quota exceeded"));
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn given_non_json_model_output_when_extracting_then_returns_parse_error() {
    let model = Arc::new(MockGenerativeModel::new("not json"));
    let service = service_with(Arc::clone(&model), StaticCredentialProvider::configured("key"));

    let err = service.extract(audio_blob()).await.unwrap_err();

    assert!(matches!(
        err,
        ExtractionError::Response(UnwrapError::MalformedJson(_))
    ));
    assert!(!err.is_client_error());
}

#[tokio::test]
async fn given_fenced_model_output_when_extracting_then_returns_task() {
    let model = Arc::new(MockGenerativeModel::new(format!("```json\n{TASK_JSON}\n```")));
    let service = service_with(Arc::clone(&model), StaticCredentialProvider::configured("key"));

    let task = service.extract(audio_blob()).await.unwrap();

    assert_eq!(task.room, "405");
    assert_eq!(task.due_time, "ASAP");
}

#[tokio::test]
async fn given_identical_audio_when_extracting_twice_then_tasks_are_identical() {
    let model = Arc::new(MockGenerativeModel::new(TASK_JSON));
    let service = service_with(Arc::clone(&model), StaticCredentialProvider::configured("key"));

    let first = service.extract(audio_blob()).await.unwrap();
    let second = service.extract(audio_blob()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
    assert_eq!(model.call_count(), 2);
}
