use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::application::ports::{GenerativeModel, GenerativeModelError, ModelRequest};

/// Canned answer used when the service runs without a real model.
pub const SCAFFOLD_TASK_JSON: &str = r#"{"room":"405","category":"Engineering","title":"Broken AC in room","assignee":"John","dueTime":"ASAP"}"#;

/// Deterministic stand-in for a generative model.
///
/// Returns the same text (or the same failure) on every call and records how
/// often it was called and with what.
pub struct MockGenerativeModel {
    response: Result<String, String>,
    delay: Duration,
    calls: AtomicUsize,
    last_request: Mutex<Option<ModelRequest>>,
}

impl MockGenerativeModel {
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_result(Ok(response.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_result(Err(message.into()))
    }

    pub fn scaffold() -> Self {
        Self::new(SCAFFOLD_TASK_JSON)
    }

    fn with_result(response: Result<String, String>) -> Self {
        Self {
            response,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ModelRequest> {
        self.last_request
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

#[async_trait::async_trait]
impl GenerativeModel for MockGenerativeModel {
    async fn generate(
        &self,
        _api_key: &str,
        request: &ModelRequest,
    ) -> Result<String, GenerativeModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request.clone());
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.response
            .clone()
            .map_err(GenerativeModelError::ApiRequestFailed)
    }
}
