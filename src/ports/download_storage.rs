//! Download Storage Port - Where downloaded documents end up.
//!
//! Stands in for the browser's save-file step: a generated document is
//! written under its download filename.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use super::GeneratedDocument;

/// Port for persisting downloaded documents.
///
/// # Contract
///
/// Implementations must:
/// - Store the content byte for byte under `document.filename`
/// - Write atomically (no partial file on failure)
/// - Replace an existing file with the same name
#[async_trait]
pub trait DownloadStorage: Send + Sync {
    /// Stores the document and returns the path it was written to.
    async fn store(&self, document: &GeneratedDocument) -> Result<PathBuf, StorageError>;
}

/// Errors that can occur while storing a download.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Invalid download filename: {filename}")]
    InvalidFilename { filename: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl StorageError {
    /// Create an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn invalid_filename(filename: impl Into<String>) -> Self {
        Self::InvalidFilename {
            filename: filename.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_displays_messages() {
        assert_eq!(StorageError::io("disk full").to_string(), "IO error: disk full");
        assert!(StorageError::invalid_filename("..")
            .to_string()
            .contains(".."));
    }

    #[test]
    fn download_storage_is_object_safe() {
        fn check<T: DownloadStorage + ?Sized>() {}
        check::<dyn DownloadStorage>();
    }
}
