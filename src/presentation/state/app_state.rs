use std::sync::Arc;

use crate::application::services::{RequestService, TaskExtractionService};

#[derive(Clone)]
pub struct AppState {
    pub extraction_service: Arc<TaskExtractionService>,
    pub request_service: Arc<RequestService>,
    pub max_upload_size_bytes: usize,
}
