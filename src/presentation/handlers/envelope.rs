use serde::Serialize;

use crate::domain::{Request, Task};

#[derive(Serialize)]
pub struct TaskEnvelope {
    pub success: bool,
    pub task: Task,
}

#[derive(Serialize)]
pub struct RequestEnvelope {
    pub success: bool,
    pub request: Request,
}

#[derive(Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl TaskEnvelope {
    pub fn new(task: Task) -> Self {
        Self {
            success: true,
            task,
        }
    }
}

impl RequestEnvelope {
    pub fn new(request: Request) -> Self {
        Self {
            success: true,
            request,
        }
    }
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
