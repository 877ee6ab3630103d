//! In-memory implementation of PreviewRegistry.
//!
//! Plays the role of browser object URLs: content is kept in a map keyed
//! by a `blob:darwin/{uuid}` URL until revoked.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use uuid::Uuid;

use crate::ports::PreviewRegistry;

const URL_SCHEME_PREFIX: &str = "blob:darwin/";

#[derive(Debug, Clone)]
struct PreviewEntry {
    content: Arc<[u8]>,
    content_type: String,
}

/// Object-URL style registry of preview content.
#[derive(Debug, Default)]
pub struct InMemoryPreviewRegistry {
    entries: RwLock<HashMap<String, PreviewEntry>>,
}

impl InMemoryPreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content type of a live URL.
    pub fn content_type(&self, url: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(url)
            .map(|entry| entry.content_type.clone())
    }
}

impl PreviewRegistry for InMemoryPreviewRegistry {
    fn register(&self, content: Vec<u8>, content_type: &str) -> String {
        let url = format!("{}{}", URL_SCHEME_PREFIX, Uuid::new_v4());
        let size = content.len();
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                url.clone(),
                PreviewEntry {
                    content: content.into(),
                    content_type: content_type.to_string(),
                },
            );
        tracing::debug!(%url, size, "Preview registered");
        url
    }

    fn revoke(&self, url: &str) -> bool {
        let removed = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(url)
            .is_some();
        if removed {
            tracing::debug!(url, "Preview revoked");
        }
        removed
    }

    fn resolve(&self, url: &str) -> Option<Arc<[u8]>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(url)
            .map(|entry| Arc::clone(&entry.content))
    }

    fn live_count(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
