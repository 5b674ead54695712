//! Per-document cache registry.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::config::CacheConfig;
use super::entry::DocumentCacheEntry;
use super::error::CacheError;
use super::source::TextSource;
use crate::base::DocumentUri;

/// Maps document URIs to their cache entries.
///
/// Entries are created lazily on first use and live until
/// [`remove_document`](Self::remove_document) is called for the URI.
#[derive(Debug, Default)]
pub struct DocumentCache {
    entries: RwLock<FxHashMap<DocumentUri, Arc<DocumentCacheEntry>>>,
    config: CacheConfig,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: RwLock::default(),
            config,
        }
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Get the entry for `uri`, creating it from `source` if needed, and
    /// bring it up to date.
    ///
    /// `source` is only used when the entry does not exist yet. The entry is
    /// returned only once the refresh triggered by this call succeeded.
    pub async fn get_or_create_entry(
        &self,
        uri: impl Into<DocumentUri>,
        source: Arc<dyn TextSource>,
    ) -> Result<Arc<DocumentCacheEntry>, CacheError> {
        let uri = uri.into();
        let entry = {
            let mut entries = self.entries.write();
            Arc::clone(entries.entry(uri.clone()).or_insert_with(|| {
                debug!("Creating cache entry for {}", uri);
                Arc::new(DocumentCacheEntry::new(uri.clone(), source, self.config))
            }))
        };
        entry.request_update().await?;
        Ok(entry)
    }

    /// The entry for `uri`, without triggering a refresh.
    pub fn entry(&self, uri: &DocumentUri) -> Option<Arc<DocumentCacheEntry>> {
        self.entries.read().get(uri).cloned()
    }

    /// Drop the entry for `uri` and cancel its pending refresh.
    pub fn remove_document(&self, uri: &DocumentUri) -> Option<Arc<DocumentCacheEntry>> {
        let removed = self.entries.write().remove(uri);
        if let Some(entry) = &removed {
            entry.dispose();
        }
        removed
    }

    pub fn uris(&self) -> Vec<DocumentUri> {
        self.entries.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
