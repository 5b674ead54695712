//! Byte offset to line/column conversion.

use text_size::TextSize;

use super::SourcePos;

/// Line start table for one source text.
///
/// Lines are split on `\n`; columns count Unicode scalar values, so a
/// `\r` before the newline is simply the last character of its line.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::from((offset + 1) as u32));
            }
        }
        Self { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a 1-based position.
    ///
    /// Offsets past the end of `text` clamp to the end; offsets inside a
    /// multi-byte character resolve to that character.
    pub fn position(&self, text: &str, offset: TextSize) -> SourcePos {
        let offset = offset.min(TextSize::of(text));
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = usize::from(self.line_starts[line]);
        let column = text
            .get(line_start..usize::from(offset))
            .map(|prefix| prefix.chars().count())
            .unwrap_or_else(|| {
                text[line_start..]
                    .char_indices()
                    .take_while(|(i, _)| line_start + i < usize::from(offset))
                    .count()
            });
        SourcePos::new(line as u32 + 1, column as u32 + 1)
    }
}
