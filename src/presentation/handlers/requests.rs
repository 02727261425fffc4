use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::RequestServiceError;
use crate::domain::{Request, Task};
use crate::presentation::state::AppState;

use super::envelope::{ErrorEnvelope, RequestEnvelope};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestListResponse {
    pub requests: Vec<Request>,
    pub open_count: usize,
}

#[tracing::instrument(skip(state))]
pub async fn list_requests_handler(State(state): State<AppState>) -> Response {
    match state.request_service.list().await {
        Ok(board) => (
            StatusCode::OK,
            Json(RequestListResponse {
                requests: board.requests,
                open_count: board.open_count,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list requests");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorEnvelope::new(e.to_string())),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn create_request_handler(
    State(state): State<AppState>,
    body: Result<Json<Task>, JsonRejection>,
) -> Response {
    let Json(task) = match body {
        Ok(task) => task,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Malformed request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorEnvelope::new(rejection.body_text())),
            )
                .into_response();
        }
    };

    match state.request_service.submit(task).await {
        Ok(request) => (StatusCode::CREATED, Json(RequestEnvelope::new(request))).into_response(),
        Err(e) => {
            let status = match &e {
                RequestServiceError::IncompleteTask(fields) => {
                    tracing::warn!(blank_fields = ?fields, "Request form incomplete");
                    StatusCode::BAD_REQUEST
                }
                RequestServiceError::Repository(_) => {
                    tracing::error!(error = %e, "Failed to create request");
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            (status, Json(ErrorEnvelope::new(e.to_string()))).into_response()
        }
    }
}
