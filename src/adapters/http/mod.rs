//! HTTP adapter for the generation backend.
//!
//! - `endpoint` - Base URL resolution from the hosting page origin
//! - `document_generator` - reqwest implementation of `DocumentGenerator`

mod document_generator;
mod endpoint;

pub use document_generator::HttpDocumentGenerator;
pub use endpoint::{BaseEndpoint, EndpointError};
