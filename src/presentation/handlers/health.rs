use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub model: String,
    /// False means `/api/transcribe` will answer 500 until a key is set.
    pub api_key_configured: bool,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = &state.extraction_service;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
            model: service.model_name().to_string(),
            api_key_configured: service.has_credentials(),
        }),
    )
}
