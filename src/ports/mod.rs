//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `DocumentGenerator` - Rendering backend that turns a draft into a document
//! - `PreviewRegistry` - Local URLs for previewed documents
//! - `DownloadStorage` - Destination of downloaded documents

mod document_generation;
mod download_storage;
mod preview_registry;

pub use document_generation::{DocumentGenerator, ExportFormat, GeneratedDocument, SubmissionError};
pub use download_storage::{DownloadStorage, StorageError};
pub use preview_registry::{PreviewHandle, PreviewRegistry};
