//! Preview Registry Port - Locally addressable preview content.
//!
//! A preview is a rendered PDF exposed under a local URL until it is
//! revoked. The registry owns the bytes; [`PreviewHandle`] owns the right
//! to revoke them.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Port for registering and revoking preview content.
///
/// # Contract
///
/// Implementations must:
/// - Return a distinct URL for every registration
/// - Serve the registered bytes until the URL is revoked
/// - Treat revoking an unknown or already revoked URL as a no-op
pub trait PreviewRegistry: Send + Sync {
    /// Registers content and returns its local URL.
    fn register(&self, content: Vec<u8>, content_type: &str) -> String;

    /// Revokes a URL. Returns `true` when something was released.
    fn revoke(&self, url: &str) -> bool;

    /// Returns the content behind a live URL.
    fn resolve(&self, url: &str) -> Option<Arc<[u8]>>;

    /// Number of live registrations.
    fn live_count(&self) -> usize;
}

/// A live preview. Released on [`PreviewHandle::release`] or on drop.
pub struct PreviewHandle {
    url: String,
    len: usize,
    registry: Arc<dyn PreviewRegistry>,
    released: AtomicBool,
}

impl PreviewHandle {
    /// Registers `content` and takes ownership of the resulting URL.
    pub fn acquire(registry: Arc<dyn PreviewRegistry>, content: Vec<u8>, content_type: &str) -> Self {
        let len = content.len();
        let url = registry.register(content, content_type);
        Self {
            url,
            len,
            registry,
            released: AtomicBool::new(false),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Size of the previewed document in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }

    /// Revokes the URL. Only the first call has an effect.
    pub fn release(&self) -> bool {
        if self.released.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.registry.revoke(&self.url)
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHandle")
            .field("url", &self.url)
            .field("len", &self.len)
            .field("released", &self.is_released())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingRegistry {
        live: Mutex<HashMap<String, Arc<[u8]>>>,
        next: Mutex<u32>,
        revocations: Mutex<u32>,
    }

    impl PreviewRegistry for CountingRegistry {
        fn register(&self, content: Vec<u8>, _content_type: &str) -> String {
            let mut next = self.next.lock().unwrap();
            *next += 1;
            let url = format!("blob:test/{}", next);
            self.live.lock().unwrap().insert(url.clone(), content.into());
            url
        }

        fn revoke(&self, url: &str) -> bool {
            *self.revocations.lock().unwrap() += 1;
            self.live.lock().unwrap().remove(url).is_some()
        }

        fn resolve(&self, url: &str) -> Option<Arc<[u8]>> {
            self.live.lock().unwrap().get(url).cloned()
        }

        fn live_count(&self) -> usize {
            self.live.lock().unwrap().len()
        }
    }

    #[test]
    fn release_twice_only_revokes_once() {
        let registry = Arc::new(CountingRegistry::default());
        let handle = PreviewHandle::acquire(registry.clone(), b"%PDF".to_vec(), "application/pdf");

        assert!(handle.release());
        assert!(!handle.release());
        assert!(handle.is_released());
        assert_eq!(*registry.revocations.lock().unwrap(), 1);
    }

    #[test]
    fn drop_releases_live_handle() {
        let registry = Arc::new(CountingRegistry::default());
        {
            let handle = PreviewHandle::acquire(registry.clone(), vec![0; 8], "application/pdf");
            assert_eq!(registry.resolve(handle.url()).map(|c| c.len()), Some(8));
            assert_eq!(registry.live_count(), 1);
        }
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn drop_after_release_does_not_revoke_again() {
        let registry = Arc::new(CountingRegistry::default());
        let handle = PreviewHandle::acquire(registry.clone(), vec![1], "application/pdf");
        handle.release();
        drop(handle);
        assert_eq!(*registry.revocations.lock().unwrap(), 1);
    }
}
