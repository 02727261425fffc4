mod envelope;
mod health;
mod requests;
mod transcribe;

pub use envelope::{ErrorEnvelope, RequestEnvelope, TaskEnvelope};
pub use health::health_handler;
pub use requests::{RequestListResponse, create_request_handler, list_requests_handler};
pub use transcribe::{AUDIO_FIELD, transcribe_handler};
