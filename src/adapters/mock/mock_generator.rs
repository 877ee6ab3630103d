//! Mock Document Generator for testing.
//!
//! Provides a configurable mock implementation of the DocumentGenerator
//! port, allowing tests to run without a generation backend.
//!
//! # Features
//!
//! - Pre-configured responses
//! - Simulated delays for busy-flag testing
//! - Error injection for each submission error kind
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let generator = MockDocumentGenerator::new()
//!     .with_document(b"PK\x03\x04".to_vec())
//!     .with_delay(Duration::from_millis(100));
//!
//! let bytes = generator.generate(&draft, ExportFormat::Docx).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::draft::DocumentDraft;
use crate::ports::{DocumentGenerator, ExportFormat, SubmissionError};

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return these bytes.
    Document(Vec<u8>),
    /// Return an error.
    Error(SubmissionError),
}

/// A request seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub draft: DocumentDraft,
    pub format: ExportFormat,
}

/// Mock generator for testing.
///
/// Responses are consumed in order; once exhausted every call returns a
/// small placeholder document.
#[derive(Debug, Clone, Default)]
pub struct MockDocumentGenerator {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockDocumentGenerator {
    /// Creates a new mock generator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful response to the queue.
    pub fn with_document(self, content: impl Into<Vec<u8>>) -> Self {
        lock(&self.responses).push_back(MockResponse::Document(content.into()));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: SubmissionError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this generator.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<RecordedRequest> {
        lock(&self.calls).clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    fn next_response(&self) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Document(b"mock document".to_vec()))
    }
}

#[async_trait]
impl DocumentGenerator for MockDocumentGenerator {
    async fn generate(
        &self,
        draft: &DocumentDraft,
        format: ExportFormat,
    ) -> Result<Vec<u8>, SubmissionError> {
        lock(&self.calls).push(RecordedRequest {
            draft: draft.clone(),
            format,
        });

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Document(content) => Ok(content),
            MockResponse::Error(error) => Err(error),
        }
    }
}
