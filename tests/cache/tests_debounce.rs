//! Debounce and dirty-tracking behaviour of a single entry.

use std::sync::Arc;
use std::time::Duration;

use ecschema::base::SourcePos;
use ecschema::cache::{CacheError, RefreshPhase};
use rstest::rstest;
use tokio::time::Instant;

use crate::helpers::cache_helpers::*;
use crate::helpers::source_fixtures::*;

#[rstest]
#[case(2)]
#[case(5)]
#[case(20)]
#[tokio::test(start_paused = true)]
async fn test_burst_triggers_exactly_one_extra_parse(#[case] burst: usize) {
    let (buffer, entry) = entry_with_text(MINIMAL_SCHEMA);
    entry.request_update().await.unwrap();
    let refreshed_at = Instant::now();

    buffer.set(PLANT_SCHEMA);
    let waiters: Vec<_> = (0..burst).map(|_| spawn_update(&entry)).collect();
    for waiter in waiters {
        waiter.await.unwrap().unwrap();
    }

    assert_eq!(entry.stats().parse_count, 2);
    assert!(refreshed_at.elapsed() >= WINDOW);
    assert_eq!(entry.phase(), RefreshPhase::Clean);
}

#[tokio::test(start_paused = true)]
async fn test_burst_spread_over_the_window_shares_one_refresh() {
    let (_buffer, entry) = entry_with_text(MINIMAL_SCHEMA);
    entry.request_update().await.unwrap();

    let mut waiters = Vec::new();
    for _ in 0..4 {
        waiters.push(spawn_update(&entry));
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(100)).await;
    }
    for waiter in waiters {
        waiter.await.unwrap().unwrap();
    }

    assert_eq!(entry.stats().parse_count, 2);
}

#[tokio::test(start_paused = true)]
async fn test_refresh_after_quiet_period_is_not_delayed() {
    let (buffer, entry) = entry_with_text(MINIMAL_SCHEMA);
    entry.request_update().await.unwrap();

    tokio::time::advance(WINDOW).await;
    buffer.set(PLANT_SCHEMA);
    let started = Instant::now();
    entry.request_update().await.unwrap();

    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(entry.stats().parse_count, 2);
}

#[tokio::test(start_paused = true)]
async fn test_latest_text_wins() {
    let (buffer, entry) = entry_with_text(MINIMAL_SCHEMA);
    entry.request_update().await.unwrap();

    buffer.set(SCHEMA_MISSING_ALIAS);
    let first = spawn_update(&entry);
    tokio::task::yield_now().await;
    buffer.set(PLANT_SCHEMA);
    let second = spawn_update(&entry);

    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    let tree = entry.tree().unwrap();
    let root = tree.root_element().unwrap();
    assert_eq!(root.attribute_value("schemaName"), Some("Plant"));
}

#[tokio::test(start_paused = true)]
async fn test_point_query_is_not_found_while_dirty() {
    let (buffer, entry) = entry_with_text(PLANT_SCHEMA);
    entry.request_update().await.unwrap();
    let position = SourcePos::new(3, 4);
    let class_name = |entry: &Arc<ecschema::cache::DocumentCacheEntry>| {
        entry.find_node_at(position, |node| node.name().map(str::to_owned))
    };
    assert_eq!(class_name(&entry), Some(Some("ECEntityClass".to_owned())));

    buffer.set(MINIMAL_SCHEMA);
    let pending = spawn_update(&entry);
    tokio::task::yield_now().await;

    assert!(entry.is_dirty());
    assert_eq!(class_name(&entry), None);
    assert!(entry.tree().is_none());

    pending.await.unwrap().unwrap();
    // The refreshed document has no class at that position.
    assert_eq!(class_name(&entry), None);
    assert!(entry.tree().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_parse_failure_keeps_entry_dirty_and_reaches_all_waiters() {
    let (buffer, entry) = entry_with_text(PLANT_SCHEMA);
    entry.request_update().await.unwrap();

    buffer.set(MALFORMED_SCHEMA);
    let waiters: Vec<_> = (0..3).map(|_| spawn_update(&entry)).collect();
    let mut errors = Vec::new();
    for waiter in waiters {
        errors.push(waiter.await.unwrap().unwrap_err());
    }

    assert!(errors.iter().all(|err| matches!(err, CacheError::Parse(_))));
    assert!(errors.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(entry.phase(), RefreshPhase::Dirty);
    assert!(entry.tree().is_none());
    assert_eq!(entry.last_error().as_ref(), errors[0].parse_error());
}

#[tokio::test(start_paused = true)]
async fn test_dispose_releases_waiters() {
    let (_buffer, entry) = entry_with_text(MINIMAL_SCHEMA);
    entry.request_update().await.unwrap();

    let pending = spawn_update(&entry);
    tokio::task::yield_now().await;
    assert_eq!(entry.phase(), RefreshPhase::Pending);

    entry.dispose();
    assert_eq!(pending.await.unwrap(), Err(CacheError::Closed));
    assert!(entry.is_closed());
}
