//! Foundation types for the ECSchema toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`SourcePos`], [`Span`] - 1-based line/column positions for parsed nodes
//! - [`LineIndex`] - byte offset to line/column conversion
//! - [`DocumentUri`] - document identity used as the cache key
//!
//! This module has NO dependencies on other ecschema modules.

mod line_index;
mod position;
mod uri;

pub use line_index::LineIndex;
pub use position::{SourcePos, Span};
pub use uri::DocumentUri;

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::TextSize;
