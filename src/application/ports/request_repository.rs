use async_trait::async_trait;

use crate::application::ports::RepositoryError;
use crate::domain::{Request, Task};

#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Stores a new `TODO` request for the task and assigns it the next id.
    async fn create(&self, task: Task) -> Result<Request, RepositoryError>;

    /// Most recently created first.
    async fn list(&self) -> Result<Vec<Request>, RepositoryError>;
}
