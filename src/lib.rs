//! # ecschema-base
//!
//! Core library for ECSchema XML parsing, document caching, and structural
//! validation.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Walker, root-attribute checks, hover, completion, quick fixes
//!   ↓
//! cache     → Debounced per-document parse cache
//!   ↓
//! grammar   → Element rules and the ECSchema 3.2 table
//!   ↓
//! syntax    → Position-tracking XML parser, point queries
//!   ↓
//! base      → Primitives (SourcePos, Span, LineIndex, DocumentUri)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → grammar → cache → ide)
// ============================================================================

/// Foundation types: positions, spans, line index, document URIs
pub mod base;

/// Syntax: parsed XML trees with source positions
pub mod syntax;

/// Grammar: declarative element rules and token classification
pub mod grammar;

/// Cache: dirty-tracked, rate-limited document parsing
pub mod cache;

/// IDE features: tokens, diagnostics, hover, completion, code actions
pub mod ide;

// Re-export foundation types
pub use base::{DocumentUri, LineIndex, SourcePos, Span, TextSize};
pub use cache::{CacheError, DocumentCache, DocumentCacheEntry};
pub use grammar::{GrammarTable, ecschema_3_2};
pub use syntax::{ParseError, ParsedNode, parse};
