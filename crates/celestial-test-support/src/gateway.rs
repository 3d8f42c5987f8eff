//! Test gateways — mock `NarrativeGateway` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use celestial_core::gateway::{BoundaryError, GenerationRequest, NarrativeGateway};

/// A gateway that answers every request with the same text and records
/// each request it receives.
#[derive(Debug)]
pub struct CannedGateway {
    response: String,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl CannedGateway {
    /// Create a gateway that returns `response` verbatim.
    #[must_use]
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a gateway that returns `value` serialized as JSON text.
    #[must_use]
    pub fn json(value: &serde_json::Value) -> Self {
        Self::new(value.to_string())
    }

    /// Returns a snapshot of all requests received.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl NarrativeGateway for CannedGateway {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, BoundaryError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

/// A gateway that answers with an empty body.
#[derive(Debug)]
pub struct EmptyGateway;

#[async_trait]
impl NarrativeGateway for EmptyGateway {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, BoundaryError> {
        Ok(String::new())
    }
}

/// A gateway that always fails at the transport level and counts attempts.
#[derive(Debug, Default)]
pub struct FailingGateway {
    attempts: Mutex<usize>,
}

impl FailingGateway {
    /// Create a failing gateway with a zero attempt count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `generate` calls received.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl NarrativeGateway for FailingGateway {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, BoundaryError> {
        *self.attempts.lock().unwrap() += 1;
        Err(BoundaryError::Transport("connection refused".into()))
    }
}
