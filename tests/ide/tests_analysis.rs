//! AnalysisHost tests: editor-style open/change/close flows.

use std::time::Duration;

use ecschema::base::{DocumentUri, SourcePos};
use ecschema::cache::{CacheConfig, CacheError};
use ecschema::grammar::ecschema_3_2;
use ecschema::ide::{AnalysisHost, analyze, codes};
use tokio::time::Instant;

use crate::helpers::cache_helpers::WINDOW;
use crate::helpers::source_fixtures::*;

const URI: &str = "file:///plant.ecschema.xml";

fn host() -> AnalysisHost {
    AnalysisHost::with_grammar(
        ecschema_3_2(),
        CacheConfig::default().with_refresh_interval(WINDOW),
    )
}

#[tokio::test(start_paused = true)]
async fn test_open_document_produces_tokens() {
    let host = host();
    host.set_file_content(URI, PLANT_SCHEMA).await.unwrap();

    let result = host.document_analysis(&DocumentUri::new(URI)).unwrap();
    assert_eq!(result.tokens.len(), 9);
    assert!(result.diagnostics.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_rapid_edits_are_debounced() {
    let host = host();
    let uri = DocumentUri::new(URI);
    host.set_file_content(uri.clone(), MINIMAL_SCHEMA).await.unwrap();
    let opened = Instant::now();

    host.set_file_content(uri.clone(), SCHEMA_MISSING_ALIAS)
        .await
        .unwrap();
    assert!(opened.elapsed() >= WINDOW);

    let entry = host.cache().entry(&uri).unwrap();
    assert_eq!(entry.stats().parse_count, 2);

    let result = host.document_analysis(&uri).unwrap();
    assert_eq!(result.diagnostics.len(), 1);
    assert!(result.diagnostics[0].has_code(codes::MISSING_ATTRIBUTE));
}

#[tokio::test(start_paused = true)]
async fn test_malformed_document_reports_single_parse_failure() {
    let host = host();
    let uri = DocumentUri::new(URI);

    let err = host.set_file_content(uri.clone(), MALFORMED_SCHEMA).await;
    assert!(matches!(err, Err(CacheError::Parse(_))));
    assert!(host.analysis(&uri).is_none());

    let result = host.document_analysis(&uri).unwrap();
    assert!(result.tokens.is_empty());
    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert!(diagnostic.message.starts_with("document failed to parse: `"));
    assert_eq!((diagnostic.start_line, diagnostic.start_col), (0, 0));

    tokio::time::advance(Duration::from_secs(1)).await;
    host.set_file_content(uri.clone(), PLANT_SCHEMA).await.unwrap();
    assert!(host.document_analysis(&uri).unwrap().diagnostics.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_analysis_is_none_while_refresh_is_pending() {
    let host = std::sync::Arc::new(host());
    let uri = DocumentUri::new(URI);
    host.set_file_content(uri.clone(), PLANT_SCHEMA).await.unwrap();

    let pending = {
        let host = std::sync::Arc::clone(&host);
        let uri = uri.clone();
        tokio::spawn(async move { host.set_file_content(uri, MINIMAL_SCHEMA).await })
    };
    tokio::task::yield_now().await;

    assert!(host.analysis(&uri).is_none());
    assert!(host.document_analysis(&uri).is_none());
    let entry = host.cache().entry(&uri).unwrap();
    assert!(analyze(&entry, ecschema_3_2()).is_none());

    pending.await.unwrap().unwrap();
    assert!(host.analysis(&uri).is_some());
}

#[tokio::test(start_paused = true)]
async fn test_snapshot_queries() {
    let host = host();
    let uri = DocumentUri::new(URI);
    host.set_file_content(uri.clone(), SCHEMA_DUPLICATE_VERSION)
        .await
        .unwrap();

    let analysis = host.analysis(&uri).unwrap();
    assert_eq!(
        analysis.node_at(SourcePos::new(1, 2)).and_then(|n| n.name()),
        Some("ECSchema")
    );
    assert!(analysis.hover(SourcePos::new(1, 2)).is_some());
    assert_eq!(analysis.goto_definition(SourcePos::new(1, 2)).targets.len(), 1);

    let diagnostics = analysis.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(analysis.code_actions(&diagnostics).len(), 1);

    let labels: Vec<_> = analysis
        .completions(SourcePos::new(1, 2))
        .into_iter()
        .map(|item| item.label)
        .collect();
    assert!(labels.iter().any(|l| &**l == "ECEntityClass"));
    assert_eq!(analysis.semantic_tokens().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_close_forgets_document() {
    let host = host();
    let uri = DocumentUri::new(URI);
    host.set_file_content(uri.clone(), PLANT_SCHEMA).await.unwrap();

    host.remove_file(&uri);
    assert!(host.cache().is_empty());
    assert!(host.document_analysis(&uri).is_none());
}
