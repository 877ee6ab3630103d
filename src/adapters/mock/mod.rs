//! Mock adapters for tests.

mod mock_generator;

pub use mock_generator::{MockDocumentGenerator, MockResponse, RecordedRequest};
