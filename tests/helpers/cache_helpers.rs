//! Helpers for driving cache entries from tests.

use std::sync::Arc;
use std::time::Duration;

use ecschema::cache::{CacheConfig, CacheError, DocumentCacheEntry, SharedText};
use tokio::task::JoinHandle;

pub const WINDOW: Duration = Duration::from_millis(500);

/// A fresh, never-parsed entry reading from an editable buffer.
pub fn entry_with_text(text: &str) -> (SharedText, Arc<DocumentCacheEntry>) {
    let buffer = SharedText::new(text);
    let entry = Arc::new(DocumentCacheEntry::new(
        "file:///test.ecschema.xml".into(),
        Arc::new(buffer.clone()),
        CacheConfig::default().with_refresh_interval(WINDOW),
    ));
    (buffer, entry)
}

/// Issue `request_update` on a separate task.
pub fn spawn_update(entry: &Arc<DocumentCacheEntry>) -> JoinHandle<Result<(), CacheError>> {
    let entry = Arc::clone(entry);
    tokio::spawn(async move { entry.request_update().await })
}
