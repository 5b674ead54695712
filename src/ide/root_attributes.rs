//! Presence and uniqueness of the root element's attributes.

use rustc_hash::FxHashSet;

use super::diagnostics::{Diagnostic, Severity, codes};
use crate::grammar::GrammarTable;
use crate::syntax::ParsedNode;

/// Check `root`'s attributes against a set of required names.
///
/// Emits one warning per absent name, anchored on the root element name,
/// followed by one error per repeated attribute occurrence, anchored on
/// that occurrence. Independent of [`walk`](super::walk).
pub fn check_root_attributes<'a>(
    root: &ParsedNode,
    required: impl IntoIterator<Item = &'a str>,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if let Some(anchor) = root.name_span() {
        for name in required {
            if root.attribute_value(name).is_none() {
                diagnostics.push(
                    Diagnostic::at_span(
                        Severity::Warning,
                        anchor,
                        format!("missing attribute: `{name}`"),
                    )
                    .with_code(codes::MISSING_ATTRIBUTE),
                );
            }
        }
    }

    let mut seen = FxHashSet::default();
    for attribute in &root.attributes {
        let (Some(name), Some(span)) = (attribute.name(), attribute.name_span()) else {
            continue;
        };
        if !seen.insert(name) {
            diagnostics.push(
                Diagnostic::at_span(
                    Severity::Error,
                    span,
                    format!("duplicate attribute: `{name}`"),
                )
                .with_code(codes::DUPLICATE_ATTRIBUTE),
            );
        }
    }

    diagnostics
}

/// [`check_root_attributes`] with the root rule's required attributes.
///
/// Reports nothing when the top element is not the grammar's root; the
/// walk already flags that.
pub fn root_attribute_diagnostics(node: &ParsedNode, table: &GrammarTable) -> Vec<Diagnostic> {
    match node.root_element() {
        Some(root) if root.name() == Some(table.root_name()) => {
            check_root_attributes(root, table.root_rule().required_attributes())
        }
        _ => Vec::new(),
    }
}
