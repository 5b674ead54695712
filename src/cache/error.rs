//! Error types for cache refreshes.

use thiserror::Error;

use crate::syntax::ParseError;

/// Outcome of a failed refresh.
///
/// Cloneable so one failure can be handed to every caller sharing a
/// pending refresh.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// The document text is malformed; the entry stays dirty.
    #[error("document failed to parse: {0}")]
    Parse(#[from] ParseError),

    /// The document was closed before its refresh ran.
    #[error("document was closed before its refresh completed")]
    Closed,
}

impl CacheError {
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            CacheError::Parse(err) => Some(err),
            CacheError::Closed => None,
        }
    }
}
