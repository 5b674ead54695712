//! AnalysisHost and Analysis: unified state management for IDE features.
//!
//! The `AnalysisHost` owns the document buffers and the parse cache, and
//! hands out `Analysis` snapshots for querying. A snapshot pins one tree, so
//! every query made through it sees the same document.
//!
//! ## Usage
//!
//! ```ignore
//! let host = AnalysisHost::new();
//! host.set_file_content("file:///a.ecschema.xml", text).await?;
//!
//! let analysis = host.analysis(&uri).unwrap();
//! let tokens = analysis.semantic_tokens();
//! let diagnostics = analysis.diagnostics();
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::{
    CodeAction, CompletionItem, Diagnostic, GotoResult, HoverResult, SemanticToken, WalkResult,
    child_element_completions, goto_definition, hover, parse_failure_diagnostic,
    remove_duplicate_attribute_fixes, root_attribute_completions, root_attribute_diagnostics, walk,
};
use crate::base::{DocumentUri, SourcePos};
use crate::cache::{CacheConfig, CacheError, DocumentCache, DocumentCacheEntry, RefreshPhase, SharedText};
use crate::grammar::{GrammarTable, ecschema_3_2};
use crate::syntax::{ParsedNode, find_node_at, find_path_at};

/// Everything the editor renders for one document version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentAnalysis {
    pub tokens: Vec<SemanticToken>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Tokens and diagnostics for the entry's current state.
///
/// A clean entry is walked and its root attributes checked. An entry whose
/// last parse failed, with no refresh scheduled, yields the single
/// parse-failure diagnostic. Any other dirty entry yields `None`: the
/// caller should wait for the pending refresh.
pub fn analyze(entry: &DocumentCacheEntry, table: &GrammarTable) -> Option<DocumentAnalysis> {
    if let Some(tree) = entry.tree() {
        return Some(analyze_tree(&tree, table));
    }
    if entry.phase() != RefreshPhase::Dirty {
        return None;
    }
    let error = entry.last_error()?;
    Some(DocumentAnalysis {
        tokens: Vec::new(),
        diagnostics: vec![parse_failure_diagnostic(&error)],
    })
}

fn analyze_tree(tree: &ParsedNode, table: &GrammarTable) -> DocumentAnalysis {
    let WalkResult {
        tokens,
        mut diagnostics,
    } = walk(tree, table);
    diagnostics.extend(root_attribute_diagnostics(tree, table));
    DocumentAnalysis {
        tokens,
        diagnostics,
    }
}

/// Owns all mutable state for the IDE layer.
///
/// Apply changes via `set_file_content()` and `remove_file()`,
/// then get a consistent snapshot via `analysis()`.
pub struct AnalysisHost {
    cache: DocumentCache,
    buffers: RwLock<FxHashMap<DocumentUri, SharedText>>,
    table: &'static GrammarTable,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    /// Create a host validating against the ECSchema 3.2 grammar.
    pub fn new() -> Self {
        Self::with_grammar(ecschema_3_2(), CacheConfig::default())
    }

    pub fn with_grammar(table: &'static GrammarTable, config: CacheConfig) -> Self {
        Self {
            cache: DocumentCache::with_config(config),
            buffers: RwLock::default(),
            table,
        }
    }

    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    pub fn grammar(&self) -> &'static GrammarTable {
        self.table
    }

    /// Replace the text of `uri` and wait for the debounced refresh.
    pub async fn set_file_content(
        &self,
        uri: impl Into<DocumentUri>,
        text: impl Into<Arc<str>>,
    ) -> Result<(), CacheError> {
        let uri = uri.into();
        let buffer = self
            .buffers
            .write()
            .entry(uri.clone())
            .or_default()
            .clone();
        buffer.set(text);

        match self.cache.entry(&uri) {
            Some(entry) => entry.request_update().await,
            None => self
                .cache
                .get_or_create_entry(uri, Arc::new(buffer))
                .await
                .map(|_| ()),
        }
    }

    /// Forget `uri`, cancelling any pending refresh.
    pub fn remove_file(&self, uri: &DocumentUri) {
        self.buffers.write().remove(uri);
        self.cache.remove_document(uri);
    }

    /// Tokens and diagnostics for `uri`; see [`analyze`].
    pub fn document_analysis(&self, uri: &DocumentUri) -> Option<DocumentAnalysis> {
        let entry = self.cache.entry(uri)?;
        analyze(&entry, self.table)
    }

    /// Snapshot of the current tree, or `None` while the document is dirty.
    pub fn analysis(&self, uri: &DocumentUri) -> Option<Analysis> {
        let tree = self.cache.entry(uri)?.tree()?;
        Some(Analysis {
            tree,
            table: self.table,
        })
    }
}

/// A read-only view of one parsed document.
#[derive(Debug, Clone)]
pub struct Analysis {
    tree: Arc<ParsedNode>,
    table: &'static GrammarTable,
}

impl Analysis {
    pub fn tree(&self) -> &ParsedNode {
        &self.tree
    }

    pub fn walk(&self) -> WalkResult {
        walk(&self.tree, self.table)
    }

    pub fn semantic_tokens(&self) -> Vec<SemanticToken> {
        self.walk().tokens
    }

    /// Walk diagnostics followed by root-attribute diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        analyze_tree(&self.tree, self.table).diagnostics
    }

    pub fn node_at(&self, position: SourcePos) -> Option<&ParsedNode> {
        find_node_at(&self.tree, position)
    }

    pub fn hover(&self, position: SourcePos) -> Option<HoverResult> {
        hover(&self.tree, position, self.table)
    }

    pub fn goto_definition(&self, position: SourcePos) -> GotoResult {
        goto_definition(&self.tree, position, self.table)
    }

    /// Missing root attributes, plus the children allowed inside the
    /// element at `position` when there is one.
    pub fn completions(&self, position: SourcePos) -> Vec<CompletionItem> {
        let mut items = root_attribute_completions(&self.tree, self.table);
        let element = find_path_at(&self.tree, position)
            .and_then(|path| path.into_iter().rev().find(|node| node.is_element()));
        if let Some(name) = element.and_then(ParsedNode::name) {
            items.extend(child_element_completions(name, self.table));
        }
        items
    }

    pub fn code_actions(&self, diagnostics: &[Diagnostic]) -> Vec<CodeAction> {
        remove_duplicate_attribute_fixes(&self.tree, diagnostics)
    }
}
