//! Grammar-conformance walk: one pass that yields highlighting tokens and
//! structural diagnostics.

use tracing::trace;

use super::diagnostics::{Diagnostic, Severity, codes};
use super::semantic_tokens::SemanticToken;
use crate::base::{SourcePos, Span};
use crate::grammar::{GrammarRule, GrammarTable, TokenModifiers};
use crate::syntax::ParsedNode;

/// Tokens and diagnostics from one [`walk`], both in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkResult {
    pub tokens: Vec<SemanticToken>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Validate a tree against `table`.
///
/// `node` may be the document node or its root element. If the top element
/// is not the grammar's root, the result is a single error and nothing
/// else: there is no point validating below a wrong root.
///
/// Grammar violations never stop the walk, but the interior of an unknown
/// or disallowed element is skipped to avoid cascading noise.
pub fn walk(node: &ParsedNode, table: &GrammarTable) -> WalkResult {
    let mut acc = WalkResult::default();
    let root_name = table.root_name();

    let root = match node.root_element() {
        Some(root) if root.name() == Some(root_name) => root,
        other => {
            let span = other
                .and_then(ParsedNode::name_span)
                .unwrap_or_else(|| Span::on_line(SourcePos::document_start(), 0));
            acc.diagnostics.push(
                Diagnostic::at_span(
                    Severity::Error,
                    span,
                    format!("root element `{root_name}` expected"),
                )
                .with_code(codes::ROOT_EXPECTED),
            );
            return acc;
        }
    };

    walk_element(root, table.root_rule(), table, &mut acc);
    acc
}

fn walk_element(node: &ParsedNode, rule: &GrammarRule, table: &GrammarTable, acc: &mut WalkResult) {
    if let Some(span) = node.name_span() {
        acc.tokens.push(SemanticToken::from_span(
            span,
            rule.token_type,
            TokenModifiers::DECLARATION,
        ));
    }

    for child in node.child_elements() {
        let name = child.name().unwrap_or_default();

        // Under a wildcard, known elements are still validated on their own
        // terms; anything else is opaque content.
        if rule.children.is_wildcard() {
            if let Some(child_rule) = table.get(name) {
                walk_element(child, child_rule, table, acc);
            } else {
                trace!("Skipping opaque element {} inside {}", name, rule.name);
            }
            continue;
        }

        if !rule.children.allows(name) {
            warn_at(
                acc,
                child,
                codes::UNEXPECTED_CHILD,
                format!("unexpected child element: `{name}`"),
            );
            continue;
        }

        let Some(child_rule) = table.get(name) else {
            warn_at(
                acc,
                child,
                codes::UNEXPECTED_ELEMENT,
                format!("unexpected element: `{name}`"),
            );
            continue;
        };

        if !child_rule.allows_parent(rule.name) {
            warn_at(
                acc,
                child,
                codes::INVALID_PARENT,
                format!("element `{name}` is not allowed inside `{}`", rule.name),
            );
        }

        walk_element(child, child_rule, table, acc);
    }
}

fn warn_at(acc: &mut WalkResult, node: &ParsedNode, code: &str, message: String) {
    trace!("{}", message);
    let span = node
        .name_span()
        .unwrap_or_else(|| Span::on_line(node.start, 0));
    acc.diagnostics
        .push(Diagnostic::at_span(Severity::Warning, span, message).with_code(code));
}
