//! Registry behaviour across documents.

use std::sync::Arc;

use ecschema::base::DocumentUri;
use ecschema::cache::{CacheConfig, DocumentCache, SharedText, TextSource};

use crate::helpers::cache_helpers::WINDOW;
use crate::helpers::source_fixtures::*;

fn source(text: &str) -> Arc<dyn TextSource> {
    Arc::new(SharedText::new(text))
}

#[tokio::test(start_paused = true)]
async fn test_documents_are_independent() {
    let cache = DocumentCache::with_config(CacheConfig::default().with_refresh_interval(WINDOW));

    let plant = cache
        .get_or_create_entry("file:///plant.ecschema.xml", source(PLANT_SCHEMA))
        .await
        .unwrap();
    let broken = cache
        .get_or_create_entry("file:///broken.ecschema.xml", source(MALFORMED_SCHEMA))
        .await;

    assert!(broken.is_err());
    assert_eq!(cache.len(), 2);
    assert!(!plant.is_dirty());
    assert!(plant.tree().is_some());

    let broken = cache
        .entry(&DocumentUri::new("file:///broken.ecschema.xml"))
        .unwrap();
    assert!(broken.is_dirty());
}

#[tokio::test(start_paused = true)]
async fn test_closure_text_source() {
    let cache = DocumentCache::new();
    let text: Arc<str> = Arc::from(MINIMAL_SCHEMA);
    let entry = cache
        .get_or_create_entry(
            "file:///closure.ecschema.xml",
            Arc::new(move || Arc::clone(&text)),
        )
        .await
        .unwrap();
    assert!(entry.tree().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_remove_then_reopen_creates_a_new_entry() {
    let cache = DocumentCache::new();
    let uri = DocumentUri::new("file:///plant.ecschema.xml");

    let first = cache
        .get_or_create_entry(uri.clone(), source(PLANT_SCHEMA))
        .await
        .unwrap();
    cache.remove_document(&uri);
    assert!(first.is_closed());
    assert!(cache.entry(&uri).is_none());

    let second = cache
        .get_or_create_entry(uri.clone(), source(PLANT_SCHEMA))
        .await
        .unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(cache.uris(), vec![uri]);
}
