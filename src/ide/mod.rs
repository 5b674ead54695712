//! IDE features: high-level APIs for editor handlers.
//!
//! This module turns parsed documents into what an editor renders. Each
//! function corresponds to an LSP request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take a tree and the grammar, return data
//! 2. **No LSP types**: Uses our own types, converted at the LSP boundary
//! 3. **Snapshots**: Queries run against one `Arc<ParsedNode>`, never a
//!    tree that is being replaced
//!
//! ## Usage
//!
//! ```ignore
//! use ecschema::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new();
//! host.set_file_content("file:///a.ecschema.xml", text).await?;
//!
//! let analysis = host.analysis(&uri).unwrap();
//! let hover = analysis.hover(SourcePos::new(3, 6));
//! ```

mod analysis;
mod code_actions;
mod completion;
mod diagnostics;
mod goto;
mod hover;
mod root_attributes;
mod semantic_tokens;
mod walker;

pub use analysis::{Analysis, AnalysisHost, DocumentAnalysis, analyze};
pub use code_actions::{CodeAction, TextEdit, remove_duplicate_attribute_fixes};
pub use completion::{
    CompletionItem, CompletionKind, child_element_completions, root_attribute_completions,
};
pub use diagnostics::{Diagnostic, Severity, codes, parse_failure_diagnostic};
pub use goto::{GotoResult, GotoTarget, goto_definition};
pub use hover::{HoverResult, hover};
pub use root_attributes::{check_root_attributes, root_attribute_diagnostics};
pub use semantic_tokens::{SemanticToken, encode_semantic_tokens};
pub use walker::{WalkResult, walk};
