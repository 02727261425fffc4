use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{RepositoryError, RequestRepository};
use crate::domain::{Request, RequestId, RequestStatus, Task};

/// Process-local request store. Contents are lost on restart.
pub struct InMemoryRequestRepository {
    requests: RwLock<Vec<Request>>,
    next_id: AtomicU64,
}

impl InMemoryRequestRepository {
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Starts from an existing list, kept in the given order. New ids continue
    /// after the highest one present.
    pub fn with_requests(requests: Vec<Request>) -> Result<Self, RepositoryError> {
        let mut seen = HashSet::new();
        for request in &requests {
            if !seen.insert(request.id) {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "duplicate request id {}",
                    request.id
                )));
            }
        }

        Ok(Self::from_requests(requests))
    }

    pub fn seeded() -> Self {
        Self::from_requests(seed_requests())
    }

    fn from_requests(requests: Vec<Request>) -> Self {
        let next_id = requests
            .iter()
            .map(|r| r.id.as_u64())
            .max()
            .map_or(1, |max| max + 1);

        Self {
            requests: RwLock::new(requests),
            next_id: AtomicU64::new(next_id),
        }
    }
}

impl Default for InMemoryRequestRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestRepository for InMemoryRequestRepository {
    async fn create(&self, task: Task) -> Result<Request, RepositoryError> {
        let id = RequestId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let request = Request::new(id, task);

        self.requests.write().await.insert(0, request.clone());
        Ok(request)
    }

    async fn list(&self) -> Result<Vec<Request>, RepositoryError> {
        Ok(self.requests.read().await.clone())
    }
}

/// The sample board the service starts with.
pub fn seed_requests() -> Vec<Request> {
    vec![
        Request::new(
            RequestId::new(1),
            Task::new("103", "Housekeeping", "Request for Extra Pillows", "Alex", "8:00 PM"),
        ),
        Request::new(
            RequestId::new(2),
            Task::new("405", "Engineering", "Broken AC in room", "John", "9:30 PM"),
        )
        .with_status(RequestStatus::InProgress),
        Request::new(
            RequestId::new(3),
            Task::new("211", "Concierge", "Need dinner reservation", "Sarah", "ASAP"),
        )
        .with_status(RequestStatus::Done),
        Request::new(
            RequestId::new(4),
            Task::new("802", "Front Desk", "Late checkout request", "Mia", "12:00 PM"),
        ),
    ]
}
