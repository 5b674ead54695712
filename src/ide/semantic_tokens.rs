//! Semantic tokens: highlighting derived from the grammar walk.

use crate::base::Span;
use crate::grammar::{TokenModifiers, TokenType};

/// A semantic token for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SemanticToken {
    /// Line number (0-indexed)
    pub line: u32,
    /// Column number (0-indexed)
    pub col: u32,
    /// Length of the token in characters
    pub length: u32,
    /// The token type
    pub token_type: TokenType,
    pub modifiers: TokenModifiers,
}

impl SemanticToken {
    /// Token covering a single-line, 1-based source span.
    pub fn from_span(span: Span, token_type: TokenType, modifiers: TokenModifiers) -> Self {
        let (line, col) = span.start.to_zero_based();
        Self {
            line,
            col,
            length: span.len_on_line(),
            token_type,
            modifiers,
        }
    }
}

/// Encode tokens in the LSP relative format: five integers per token
/// (delta line, delta start, length, type index, modifier bits).
///
/// Tokens are encoded in position order whatever order they arrive in.
pub fn encode_semantic_tokens(tokens: &[SemanticToken]) -> Vec<u32> {
    let mut sorted = tokens.to_vec();
    sorted.sort_by_key(|token| (token.line, token.col));

    let mut data = Vec::with_capacity(sorted.len() * 5);
    let mut prev_line = 0;
    let mut prev_col = 0;

    for token in &sorted {
        let delta_line = token.line - prev_line;
        let delta_col = if delta_line == 0 {
            token.col - prev_col
        } else {
            token.col
        };
        data.extend([
            delta_line,
            delta_col,
            token.length,
            token.token_type.to_lsp_index(),
            token.modifiers.bits(),
        ]);
        prev_line = token.line;
        prev_col = token.col;
    }

    data
}
