//! Mock driver for testing.

use async_trait::async_trait;
use fixora::{
    FixoraDriver, FixoraError, FixoraResult, GeminiError, GeminiErrorKind, GenerateRequest,
    GenerateResponse,
};
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the given text
    Success(String),
    /// Return a response without text
    Empty,
    /// Always return the specified error
    Error(GeminiErrorKind),
}

/// Mock driver for testing.
///
/// Records every request so tests can verify what was sent and how often.
#[derive(Clone)]
pub struct MockDriver {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
    model_name: String,
}

impl MockDriver {
    /// Create a mock driver with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
            model_name: "mock-gemini".to_string(),
        }
    }

    /// Create a mock driver that always answers with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock driver that answers without text.
    pub fn new_empty() -> Self {
        Self::new_with_behavior(MockBehavior::Empty)
    }

    /// Create a mock driver that always fails with `error`.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FixoraDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> FixoraResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());

        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse::with_text(text.clone())),
            MockBehavior::Empty => Ok(GenerateResponse::empty()),
            MockBehavior::Error(kind) => Err(FixoraError::from(GeminiError::new(kind.clone()))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
