//! Debounced per-document parse cache.
//!
//! - [`DocumentCache`] maps URIs to [`DocumentCacheEntry`] values
//! - [`DocumentCacheEntry`] owns the current tree of one document and
//!   coalesces bursts of update requests into a single refresh
//! - [`TextSource`] is how an entry reads the text it parses

mod config;
mod entry;
mod error;
mod registry;
mod source;

pub use config::{CacheConfig, DEFAULT_REFRESH_INTERVAL};
pub use entry::{DocumentCacheEntry, RefreshPhase, RefreshStats};
pub use error::CacheError;
pub use registry::DocumentCache;
pub use source::{SharedText, TextSource};
