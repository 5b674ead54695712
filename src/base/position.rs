//! Position tracking for parsed nodes
//!
//! Stores the source location (line/column) of XML constructs for editor
//! features like hover, semantic tokens, and diagnostics.

/// A position in source text (1-based, columns counted in characters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
}

/// A half-open range `[start, end)` in source text (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    pub start: SourcePos,
    pub end: SourcePos,
}

impl SourcePos {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Position of the first character of a document.
    pub const fn document_start() -> Self {
        Self::new(1, 1)
    }

    /// Shift right by `columns` characters on the same line.
    pub fn advance(self, columns: u32) -> Self {
        Self::new(self.line, self.column + columns)
    }

    /// Position just past `text` when it is written starting here.
    ///
    /// A `\n` moves to column 1 of the next line.
    pub fn after(self, text: &str) -> Self {
        text.chars().fold(self, |pos, ch| match ch {
            '\n' => Self::new(pos.line + 1, 1),
            _ => pos.advance(1),
        })
    }

    /// Convert to a 0-indexed `(line, character)` pair as used by LSP.
    pub fn to_zero_based(self) -> (u32, u32) {
        (self.line.saturating_sub(1), self.column.saturating_sub(1))
    }
}

impl Span {
    pub fn new(start: SourcePos, end: SourcePos) -> Self {
        Self { start, end }
    }

    /// A single-line span starting at `start` and covering `len` characters.
    pub fn on_line(start: SourcePos, len: u32) -> Self {
        Self::new(start, start.advance(len))
    }

    /// The span `text` occupies when written starting at `start`.
    pub fn covering(start: SourcePos, text: &str) -> Self {
        Self::new(start, start.after(text))
    }

    /// Check if a position falls within this span (end excluded)
    pub fn contains(&self, position: SourcePos) -> bool {
        self.start <= position && position < self.end
    }

    pub fn len_on_line(&self) -> u32 {
        if self.start.line == self.end.line {
            self.end.column.saturating_sub(self.start.column)
        } else {
            0
        }
    }
}
