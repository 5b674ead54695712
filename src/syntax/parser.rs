//! Position-tracking XML parser.
//!
//! Builds a [`ParsedNode`] tree from document text using `quick-xml`.
//! The reader runs over the borrowed input, so every name and value slice
//! it hands back points into the source text; the byte offset of that slice
//! is converted to a 1-based line/column through a [`LineIndex`].

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

use super::node::ParsedNode;
use crate::base::{LineIndex, SourcePos, TextSize};

/// Malformed document text.
///
/// Distinct from grammar violations, which are reported as diagnostics
/// against a successfully parsed tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {message}")]
pub struct ParseError {
    pub message: String,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

impl ParseError {
    pub fn syntax_error(message: impl Into<String>, position: SourcePos) -> Self {
        Self {
            message: message.into(),
            line: position.line,
            column: position.column,
        }
    }

    pub fn position(&self) -> SourcePos {
        SourcePos::new(self.line, self.column)
    }
}

/// Parse document text into a tree rooted at a [`NodeKind::Document`] node.
///
/// [`NodeKind::Document`]: super::NodeKind::Document
pub fn parse(text: &str) -> Result<ParsedNode, ParseError> {
    TreeBuilder::new(text).build()
}

struct TreeBuilder<'a> {
    text: &'a str,
    lines: LineIndex,
    /// Elements whose end tag has not been seen yet.
    open: Vec<ParsedNode>,
    top_level: Vec<ParsedNode>,
}

impl<'a> TreeBuilder<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            lines: LineIndex::new(text),
            open: Vec::new(),
            top_level: Vec::new(),
        }
    }

    fn build(mut self) -> Result<ParsedNode, ParseError> {
        let mut reader = Reader::from_str(self.text);
        reader.config_mut().trim_text(true);

        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(err) => {
                    let offset = reader.error_position() as usize;
                    return Err(self.error_at_offset(offset, err.to_string()));
                }
            };

            match event {
                Event::Start(ref e) => {
                    let element = self.open_element(e)?;
                    self.open.push(element);
                }
                Event::Empty(ref e) => {
                    // Self-closing element - handle as start + end
                    let element = self.open_element(e)?;
                    self.attach(element);
                }
                Event::End(_) => {
                    let offset = reader.buffer_position() as usize;
                    let element = self.open.pop().ok_or_else(|| {
                        self.error_at_offset(offset, "closing tag without a matching opening tag")
                    })?;
                    self.attach(element);
                }
                Event::Text(ref e) => self.push_text(e),
                Event::CData(ref e) => self.push_text(e),
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctype
                _ => {}
            }
        }

        if let Some(unclosed) = self.open.first() {
            let name = unclosed.name().unwrap_or_default();
            return Err(ParseError::syntax_error(
                format!("unclosed element `<{name}>`"),
                unclosed.start,
            ));
        }
        if self.top_level.is_empty() {
            return Err(ParseError::syntax_error(
                "document has no root element",
                SourcePos::document_start(),
            ));
        }

        Ok(ParsedNode::document(self.top_level))
    }

    fn open_element(&self, e: &BytesStart<'_>) -> Result<ParsedNode, ParseError> {
        let local_name = e.local_name();
        let name_bytes = local_name.as_ref();
        let start = self.position_of(name_bytes, SourcePos::document_start());
        let name = self.decode(name_bytes, start)?;

        if self.open.is_empty() && !self.top_level.is_empty() {
            return Err(ParseError::syntax_error(
                format!("multiple root elements: `<{name}>` follows the root element"),
                start,
            ));
        }

        let mut element = ParsedNode::element(name, start);

        // Duplicates are left for the root attribute check to report.
        for attr_result in e.attributes().with_checks(false) {
            let attr = attr_result.map_err(|err| {
                ParseError::syntax_error(format!("malformed attribute: {err}"), start)
            })?;
            let key = attr.key.as_ref();
            let value: &[u8] = attr.value.as_ref();

            let key_start = self.position_of(key, start);
            let value_start = self.position_of(value, key_start);
            element.attributes.push(ParsedNode::attribute(
                self.decode(key, key_start)?,
                key_start,
                self.decode(value, value_start)?,
                value_start,
            ));
        }

        Ok(element)
    }

    fn push_text(&mut self, content: &[u8]) {
        // Text outside the root element is noise.
        if self.open.is_empty() || content.is_empty() {
            return;
        }
        let fallback = self
            .open
            .last()
            .map_or(SourcePos::document_start(), |parent| parent.start);
        let start = self.position_of(content, fallback);
        let text = String::from_utf8_lossy(content).into_owned();
        self.attach(ParsedNode::text(text, start));
    }

    fn attach(&mut self, node: ParsedNode) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.top_level.push(node),
        }
    }

    /// Position of a slice borrowed from the source text.
    fn position_of(&self, slice: &[u8], fallback: SourcePos) -> SourcePos {
        match self.offset_of(slice) {
            Some(offset) => self.lines.position(self.text, TextSize::from(offset as u32)),
            None => fallback,
        }
    }

    fn offset_of(&self, slice: &[u8]) -> Option<usize> {
        let base = self.text.as_ptr() as usize;
        let offset = (slice.as_ptr() as usize).checked_sub(base)?;
        (offset + slice.len() <= self.text.len()).then_some(offset)
    }

    fn decode(&self, bytes: &[u8], at: SourcePos) -> Result<String, ParseError> {
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|err| ParseError::syntax_error(format!("invalid UTF-8: {err}"), at))
    }

    fn error_at_offset(&self, offset: usize, message: impl Into<String>) -> ParseError {
        let position = self
            .lines
            .position(self.text, TextSize::from(offset as u32));
        ParseError::syntax_error(message, position)
    }
}
