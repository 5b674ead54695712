//! Go-to-definition implementation.

use std::sync::Arc;

use crate::base::{SourcePos, Span};
use crate::grammar::GrammarTable;
use crate::syntax::{ParsedNode, find_path_at};

/// Result of a go-to-definition request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GotoResult {
    /// The targets to jump to.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a result with a single target.
    pub fn single(target: GotoTarget) -> Self {
        Self {
            targets: vec![target],
        }
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A target location in the same document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GotoTarget {
    /// Start line (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
    /// The declared element name.
    pub name: Arc<str>,
}

impl GotoTarget {
    fn new(name: &str, span: Span) -> Self {
        let (start_line, start_col) = span.start.to_zero_based();
        let (end_line, end_col) = span.end.to_zero_based();
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
            name: name.into(),
        }
    }
}

/// Resolve a position inside the root element's opening tag to the root
/// declaration.
///
/// Both the root name and its attributes (names or values) resolve to the
/// root name. Positions elsewhere, or documents whose top element is not
/// the grammar's root, give an empty result.
pub fn goto_definition(
    document: &ParsedNode,
    position: SourcePos,
    table: &GrammarTable,
) -> GotoResult {
    let Some(root) = document.root_element() else {
        return GotoResult::empty();
    };
    if root.name() != Some(table.root_name()) {
        return GotoResult::empty();
    }

    let on_root_tag = find_path_at(document, position)
        .and_then(|path| path.last().copied())
        .is_some_and(|node| {
            std::ptr::eq(node, root)
                || root.attributes.iter().any(|attr| std::ptr::eq(node, attr))
        });
    if !on_root_tag {
        return GotoResult::empty();
    }

    match root.name_span() {
        Some(span) => GotoResult::single(GotoTarget::new(table.root_name(), span)),
        None => GotoResult::empty(),
    }
}
