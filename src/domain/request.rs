use serde::{Deserialize, Serialize};

use super::request_id::RequestId;
use super::request_status::RequestStatus;
use super::task::Task;

/// A task tracked on the request board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub id: RequestId,
    #[serde(flatten)]
    pub task: Task,
    pub status: RequestStatus,
}

impl Request {
    /// New requests always start out as `TODO`.
    pub fn new(id: RequestId, task: Task) -> Self {
        Self {
            id,
            task,
            status: RequestStatus::Todo,
        }
    }

    pub fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}
