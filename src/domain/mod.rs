mod audio_submission;
mod department;
mod request;
mod request_id;
mod request_status;
mod task;

pub use audio_submission::{AudioClip, AudioSubmission, DEFAULT_AUDIO_MIME};
pub use department::Department;
pub use request::Request;
pub use request_id::RequestId;
pub use request_status::RequestStatus;
pub use task::Task;
