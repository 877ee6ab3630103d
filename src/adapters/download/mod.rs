//! Filesystem destination for downloaded documents.

mod local_download_storage;

pub use local_download_storage::LocalDownloadStorage;
