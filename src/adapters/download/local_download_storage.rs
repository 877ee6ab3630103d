//! Local Filesystem Download Adapter - Implementation of DownloadStorage.
//!
//! Writes generated documents into a single directory under their download
//! filename (`DAT_{title}.{ext}`).
//!
//! # Atomic Writes
//!
//! 1. Write content to `{filename}.part`
//! 2. Sync to disk
//! 3. Rename to `{filename}`

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{DownloadStorage, GeneratedDocument, StorageError};

/// Download directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalDownloadStorage {
    dir: PathBuf,
}

impl LocalDownloadStorage {
    /// Creates storage writing into `dir`, created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Only a bare file name may be joined to the download directory.
    fn target_path(&self, filename: &str) -> Result<PathBuf, StorageError> {
        let name = Path::new(filename);
        let is_bare = name.file_name().is_some_and(|n| n == name.as_os_str());
        if filename.is_empty() || !is_bare || filename == "." || filename == ".." {
            return Err(StorageError::invalid_filename(filename));
        }
        Ok(self.dir.join(name))
    }
}

#[async_trait]
impl DownloadStorage for LocalDownloadStorage {
    async fn store(&self, document: &GeneratedDocument) -> Result<PathBuf, StorageError> {
        let final_path = self.target_path(&document.filename)?;
        let temp_path = self.dir.join(format!("{}.part", document.filename));

        fs::create_dir_all(&self.dir).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create download directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(&document.content).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        tracing::info!(path = %final_path.display(), bytes = document.len(), "Download stored");
        Ok(final_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ExportFormat;
    use tempfile::TempDir;

    fn document(name: &str, content: &[u8]) -> GeneratedDocument {
        GeneratedDocument::new(content.to_vec(), ExportFormat::Docx, name)
    }

    #[tokio::test]
    async fn store_writes_bytes_under_filename() {
        let dir = TempDir::new().unwrap();
        let storage = LocalDownloadStorage::new(dir.path());

        let path = storage.store(&document("DAT_Portail", b"PK\x03\x04")).await.unwrap();

        assert_eq!(path, dir.path().join("DAT_Portail.docx"));
        assert_eq!(fs::read(&path).await.unwrap(), b"PK\x03\x04");
    }

    #[tokio::test]
    async fn store_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let storage = LocalDownloadStorage::new(dir.path().join("downloads/dat"));

        let path = storage.store(&document("DAT_document", b"x")).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn store_replaces_existing_file_and_leaves_no_temp() {
        let dir = TempDir::new().unwrap();
        let storage = LocalDownloadStorage::new(dir.path());

        storage.store(&document("DAT_a", b"old")).await.unwrap();
        let path = storage.store(&document("DAT_a", b"new")).await.unwrap();

        assert_eq!(fs::read(&path).await.unwrap(), b"new");
        assert!(!dir.path().join("DAT_a.docx.part").exists());
    }

    #[tokio::test]
    async fn store_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let storage = LocalDownloadStorage::new(dir.path());
        let mut doc = document("x", b"x");
        doc.filename = "../escape.docx".to_string();

        let result = storage.store(&doc).await;

        assert!(matches!(result, Err(StorageError::InvalidFilename { .. })));
    }
}
