//! Position-annotated XML tree.

use smol_str::SmolStr;

use crate::base::{SourcePos, Span};

/// The kind of XML construct a [`ParsedNode`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NodeKind {
    /// Synthetic wrapper around the whole document.
    Document,
    Element,
    Attribute,
    Text,
}

/// One XML construct with the position of its start token.
///
/// Nodes are built once by [`parse`](super::parse) and never mutated; the
/// next parse produces a fresh tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedNode {
    pub kind: NodeKind,
    /// Local name for elements and attributes.
    pub name: Option<SmolStr>,
    /// Start of the name token (elements, attributes) or of the content
    /// (text). The document node starts at 1:1.
    pub start: SourcePos,
    /// Attribute value or text content as written; entities are not expanded.
    pub value: Option<String>,
    /// First character of an attribute value, inside the quotes.
    pub value_start: Option<SourcePos>,
    /// Attribute nodes in source order. Duplicates are kept.
    pub attributes: Vec<ParsedNode>,
    /// Child elements and text in source order.
    pub children: Vec<ParsedNode>,
}

impl ParsedNode {
    pub fn document(children: Vec<ParsedNode>) -> Self {
        Self {
            kind: NodeKind::Document,
            name: None,
            start: SourcePos::document_start(),
            value: None,
            value_start: None,
            attributes: Vec::new(),
            children,
        }
    }

    pub fn element(name: impl Into<SmolStr>, start: SourcePos) -> Self {
        Self {
            kind: NodeKind::Element,
            name: Some(name.into()),
            start,
            value: None,
            value_start: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(
        name: impl Into<SmolStr>,
        start: SourcePos,
        value: impl Into<String>,
        value_start: SourcePos,
    ) -> Self {
        Self {
            kind: NodeKind::Attribute,
            name: Some(name.into()),
            start,
            value: Some(value.into()),
            value_start: Some(value_start),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>, start: SourcePos) -> Self {
        Self {
            kind: NodeKind::Text,
            name: None,
            start,
            value: Some(content.into()),
            value_start: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &ParsedNode> {
        self.children.iter().filter(|child| child.is_element())
    }

    /// Value of the first attribute called `name`.
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name() == Some(name))
            .and_then(|attr| attr.value.as_deref())
    }

    /// The document's root element.
    ///
    /// For a document node this is its single element child; any other
    /// element is its own root.
    pub fn root_element(&self) -> Option<&ParsedNode> {
        match self.kind {
            NodeKind::Document => self.child_elements().next(),
            NodeKind::Element => Some(self),
            NodeKind::Attribute | NodeKind::Text => None,
        }
    }

    /// Span of the name token, if the node has a name.
    pub fn name_span(&self) -> Option<Span> {
        let name = self.name.as_ref()?;
        Some(Span::on_line(self.start, name.chars().count() as u32))
    }

    /// Span of an attribute value, excluding the quotes.
    pub fn value_span(&self) -> Option<Span> {
        let start = self.value_start?;
        let value = self.value.as_ref()?;
        Some(Span::covering(start, value))
    }
}
