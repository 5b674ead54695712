//! Hover information implementation.

use std::fmt::Write;

use crate::base::{SourcePos, Span};
use crate::grammar::{AttributeRule, GrammarRule, GrammarTable};
use crate::syntax::{NodeKind, ParsedNode, find_path_at};

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Start line of the hovered range (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
}

impl HoverResult {
    fn new(contents: String, span: Span) -> Self {
        let (start_line, start_col) = span.start.to_zero_based();
        let (end_line, end_col) = span.end.to_zero_based();
        Self {
            contents,
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }
}

/// Describe the element or attribute at `position` using its grammar rule.
///
/// Returns `None` off any name, and for names the grammar does not know.
pub fn hover(document: &ParsedNode, position: SourcePos, table: &GrammarTable) -> Option<HoverResult> {
    let path = find_path_at(document, position)?;
    let (node, ancestors) = path.split_last()?;

    match node.kind {
        NodeKind::Element => {
            let rule = table.get(node.name()?)?;
            Some(HoverResult::new(element_markdown(rule), node.name_span()?))
        }
        NodeKind::Attribute => {
            let owner = ancestors.last()?;
            let rule = table.get(owner.name()?)?;
            let attribute = rule.attribute(node.name()?)?;
            Some(HoverResult::new(attribute_markdown(attribute), node.name_span()?))
        }
        NodeKind::Document | NodeKind::Text => None,
    }
}

fn element_markdown(rule: &GrammarRule) -> String {
    let mut contents = format!("**{}**\n\n{}", rule.name, rule.description);
    if !rule.attributes.is_empty() {
        contents.push_str("\n\nAttributes:");
        for attribute in rule.attributes {
            let _ = write!(contents, "\n- {}", attribute_summary(attribute));
        }
    }
    contents
}

fn attribute_markdown(attribute: &AttributeRule) -> String {
    format!("{}\n\n{}", attribute_summary(attribute), attribute.description)
}

fn attribute_summary(attribute: &AttributeRule) -> String {
    let presence = if attribute.required {
        "required"
    } else {
        "optional"
    };
    format!(
        "`{}` ({}, {presence})",
        attribute.name,
        attribute.value_type.as_str()
    )
}
