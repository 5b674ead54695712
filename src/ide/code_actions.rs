//! Quick fixes for diagnostics.

use std::sync::Arc;

use super::diagnostics::{Diagnostic, codes};
use crate::base::{SourcePos, Span};
use crate::syntax::ParsedNode;

/// A replacement of a 0-indexed range.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextEdit {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
    pub new_text: String,
}

impl TextEdit {
    pub fn delete(span: Span) -> Self {
        let (start_line, start_col) = span.start.to_zero_based();
        let (end_line, end_col) = span.end.to_zero_based();
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
            new_text: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CodeAction {
    pub title: Arc<str>,
    /// The diagnostic this action resolves.
    pub diagnostic: Diagnostic,
    pub edits: Vec<TextEdit>,
}

/// One "Remove duplicate attribute" fix per duplicate-attribute diagnostic.
///
/// Each edit deletes the repeated occurrence together with its value and
/// the whitespace before it.
pub fn remove_duplicate_attribute_fixes(
    document: &ParsedNode,
    diagnostics: &[Diagnostic],
) -> Vec<CodeAction> {
    let Some(root) = document.root_element() else {
        return Vec::new();
    };

    diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.has_code(codes::DUPLICATE_ATTRIBUTE))
        .filter_map(|diagnostic| {
            let start = diagnostic.start();
            let attribute = root.attributes.iter().find(|attr| attr.start == start)?;
            Some(CodeAction {
                title: "Remove duplicate attribute".into(),
                diagnostic: diagnostic.clone(),
                edits: vec![TextEdit::delete(attribute_extent(attribute)?)],
            })
        })
        .collect()
}

/// From the character before the attribute name through the closing quote.
fn attribute_extent(attribute: &ParsedNode) -> Option<Span> {
    let name = attribute.name_span()?;
    let start = if name.start.column > 1 {
        SourcePos::new(name.start.line, name.start.column - 1)
    } else {
        name.start
    };
    let end = match attribute.value_span() {
        Some(value) => value.end.advance(1),
        None => name.end,
    };
    Some(Span::new(start, end))
}
