//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `http` - Generation backend over HTTP (reqwest)
//! - `preview` - In-memory preview registry (object-URL analogue)
//! - `download` - Local filesystem destination for downloads
//! - `mock` - Scripted generator for tests

pub mod download;
pub mod http;
pub mod mock;
pub mod preview;

pub use download::LocalDownloadStorage;
pub use http::{BaseEndpoint, EndpointError, HttpDocumentGenerator};
pub use mock::MockDocumentGenerator;
pub use preview::InMemoryPreviewRegistry;
