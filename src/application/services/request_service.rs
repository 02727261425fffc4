use std::sync::Arc;

use crate::application::ports::{RepositoryError, RequestRepository};
use crate::domain::{Request, Task};

pub struct RequestService {
    repository: Arc<dyn RequestRepository>,
}

/// The request list together with how many entries are still open.
#[derive(Debug, Clone)]
pub struct RequestBoard {
    pub requests: Vec<Request>,
    pub open_count: usize,
}

impl RequestService {
    pub fn new(repository: Arc<dyn RequestRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<RequestBoard, RequestServiceError> {
        let requests = self.repository.list().await?;
        let open_count = requests.iter().filter(|r| r.is_open()).count();
        Ok(RequestBoard {
            requests,
            open_count,
        })
    }

    pub async fn submit(&self, task: Task) -> Result<Request, RequestServiceError> {
        let blank = task.blank_fields();
        if !blank.is_empty() {
            return Err(RequestServiceError::IncompleteTask(blank));
        }

        let request = self.repository.create(task).await?;
        tracing::info!(
            request_id = %request.id,
            room = %request.task.room,
            department = %request.task.department(),
            "Request created"
        );
        Ok(request)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RequestServiceError {
    #[error("Please ensure all form fields are filled before submission.")]
    IncompleteTask(Vec<&'static str>),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
