use std::time::Duration;

/// Minimum spacing between two parses of the same document.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(500);

/// Settings shared by every entry of a [`DocumentCache`](super::DocumentCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Debounce window: requests arriving sooner than this after the last
    /// refresh are coalesced into one deferred refresh.
    pub refresh_interval: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl CacheConfig {
    pub fn with_refresh_interval(mut self, refresh_interval: Duration) -> Self {
        self.refresh_interval = refresh_interval;
        self
    }
}
