use axum::Json;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::services::ExtractionError;
use crate::domain::{AudioClip, AudioSubmission};
use crate::presentation::state::AppState;

use super::envelope::{ErrorEnvelope, TaskEnvelope};

pub const AUDIO_FIELD: &str = "audio";

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Transcribe request is not multipart");
            return bad_request(rejection.body_text());
        }
    };

    let submission = match read_audio_submission(&mut multipart).await {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e.body_text(), "Failed to read multipart body");
            return bad_request(e.body_text());
        }
    };

    match state.extraction_service.extract(submission).await {
        Ok(task) => (StatusCode::OK, Json(TaskEnvelope::new(task))).into_response(),
        Err(e) => {
            let status = extraction_status(&e);
            if e.is_client_error() {
                tracing::warn!(error = %e, "Rejected transcribe request");
            } else {
                tracing::error!(error = %e, "Transcription error");
            }
            (status, Json(ErrorEnvelope::new(e.to_string()))).into_response()
        }
    }
}

/// Finds the first `audio` field. A part without a filename is a plain form
/// value, not a file.
async fn read_audio_submission(
    multipart: &mut Multipart,
) -> Result<AudioSubmission, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        if field.file_name().is_none() {
            let value = field.text().await?;
            return Ok(AudioSubmission::Text(value));
        }

        let mime_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;
        tracing::debug!(bytes = data.len(), mime_type = ?mime_type, "Audio upload received");
        return Ok(AudioSubmission::Blob(AudioClip::new(
            data.to_vec(),
            mime_type.as_deref(),
        )));
    }

    Ok(AudioSubmission::Missing)
}

fn extraction_status(error: &ExtractionError) -> StatusCode {
    if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorEnvelope::new(message))).into_response()
}
