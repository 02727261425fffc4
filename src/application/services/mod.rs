mod request_service;
mod response_unwrapper;
mod task_extraction_service;
mod task_prompt;

pub use request_service::{RequestBoard, RequestService, RequestServiceError};
pub use response_unwrapper::{UnwrapError, parse_task, strip_code_fence};
pub use task_extraction_service::{
    DEFAULT_MODEL, DEFAULT_TEMPERATURE, ExtractionError, ExtractionOptions, TaskExtractionService,
};
pub use task_prompt::build_task_prompt;
