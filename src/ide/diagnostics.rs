//! Diagnostics reported to the editor.

use std::sync::Arc;

use crate::base::{SourcePos, Span};
use crate::syntax::ParseError;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Start line (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
    pub severity: Severity,
    /// Stable code from [`codes`].
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(line: u32, col: u32, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Error, line, col, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(line: u32, col: u32, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Warning, line, col, message)
    }

    fn new(severity: Severity, line: u32, col: u32, message: impl Into<Arc<str>>) -> Self {
        Self {
            start_line: line,
            start_col: col,
            end_line: line,
            end_col: col,
            severity,
            code: None,
            message: message.into(),
        }
    }

    /// Create a diagnostic covering a 1-based source span.
    pub fn at_span(severity: Severity, span: Span, message: impl Into<Arc<str>>) -> Self {
        let (start_line, start_col) = span.start.to_zero_based();
        let (end_line, end_col) = span.end.to_zero_based();
        Self::new(severity, start_line, start_col, message).with_span(end_line, end_col)
    }

    /// Set the end of the range for this diagnostic.
    pub fn with_span(mut self, end_line: u32, end_col: u32) -> Self {
        self.end_line = end_line;
        self.end_col = end_col;
        self
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Whether this diagnostic carries `code`.
    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_deref() == Some(code)
    }

    /// 1-based start of the diagnostic range.
    pub fn start(&self) -> SourcePos {
        SourcePos::new(self.start_line + 1, self.start_col + 1)
    }
}

/// Stable diagnostic codes.
///
/// - **E0001-E0099**: errors (malformed document, wrong root, duplicates)
/// - **W0001-W0099**: warnings (grammar violations, missing attributes)
pub mod codes {
    /// The document could not be parsed at all.
    pub const PARSE_FAILURE: &str = "E0001";
    /// The top element is not the grammar's root.
    pub const ROOT_EXPECTED: &str = "E0002";
    /// An attribute appears more than once on the root element.
    pub const DUPLICATE_ATTRIBUTE: &str = "E0003";

    /// Element name not in the grammar.
    pub const UNEXPECTED_ELEMENT: &str = "W0001";
    /// Element not in its parent's allowed children.
    pub const UNEXPECTED_CHILD: &str = "W0002";
    /// Element's parent not in its allowed parents.
    pub const INVALID_PARENT: &str = "W0003";
    /// A required root attribute is absent.
    pub const MISSING_ATTRIBUTE: &str = "W0004";
}

/// The single diagnostic shown when a document has no usable tree.
///
/// Anchored at the document start: a failed parse has no position-accurate
/// tree to point into.
pub fn parse_failure_diagnostic(error: &ParseError) -> Diagnostic {
    Diagnostic::error(0, 0, format!("document failed to parse: `{}`", error.message))
        .with_code(codes::PARSE_FAILURE)
}
