//! Completion suggestions implementation.

use std::sync::Arc;

use crate::grammar::{AttributeRule, GrammarTable};
use crate::syntax::ParsedNode;

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CompletionKind {
    Attribute,
    Element,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Attribute => 10, // Property
            CompletionKind::Element => 7,    // Class
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
    /// Text to insert (if different from label).
    pub insert_text: Option<Arc<str>>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            insert_text: None,
            sort_priority: 100,
        }
    }

    fn for_attribute(attribute: &AttributeRule, sort_priority: u32) -> Self {
        Self {
            detail: Some(attribute.value_type.as_str().into()),
            documentation: Some(attribute.description.into()),
            insert_text: Some(format!("{}=\"\"", attribute.name).into()),
            sort_priority,
            ..Self::new(attribute.name, CompletionKind::Attribute)
        }
    }
}

/// Required root attributes the document does not declare yet, in grammar
/// order.
pub fn root_attribute_completions(document: &ParsedNode, table: &GrammarTable) -> Vec<CompletionItem> {
    let Some(root) = document.root_element() else {
        return Vec::new();
    };
    if root.name() != Some(table.root_name()) {
        return Vec::new();
    }

    table
        .root_rule()
        .attributes
        .iter()
        .filter(|attribute| attribute.required && root.attribute_value(attribute.name).is_none())
        .enumerate()
        .map(|(index, attribute)| CompletionItem::for_attribute(attribute, index as u32))
        .collect()
}

/// Child elements the grammar accepts inside an element named `parent`.
pub fn child_element_completions(parent: &str, table: &GrammarTable) -> Vec<CompletionItem> {
    let Some(rule) = table.get(parent) else {
        return Vec::new();
    };
    table
        .rules()
        .filter(|child| rule.children.allows(child.name) && child.allows_parent(parent))
        .map(|child| CompletionItem {
            documentation: Some(child.description.into()),
            ..CompletionItem::new(child.name, CompletionKind::Element)
        })
        .collect()
}
