//! Read-only access to document text.

use std::sync::Arc;

use parking_lot::RwLock;

/// Supplies the current text of one document.
///
/// The cache never owns document content; it asks for a fresh copy on
/// every refresh.
pub trait TextSource: Send + Sync {
    fn text(&self) -> Arc<str>;
}

impl<F> TextSource for F
where
    F: Fn() -> Arc<str> + Send + Sync,
{
    fn text(&self) -> Arc<str> {
        self()
    }
}

/// An in-memory document buffer shared between the editor layer and the
/// cache.
#[derive(Debug, Clone, Default)]
pub struct SharedText {
    inner: Arc<RwLock<Arc<str>>>,
}

impl SharedText {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(text.into())),
        }
    }

    /// Replace the whole document text.
    pub fn set(&self, text: impl Into<Arc<str>>) {
        *self.inner.write() = text.into();
    }

    pub fn get(&self) -> Arc<str> {
        Arc::clone(&self.inner.read())
    }
}

impl TextSource for SharedText {
    fn text(&self) -> Arc<str> {
        self.get()
    }
}
