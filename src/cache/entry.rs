//! One cached document and its debounced refresh.
//!
//! Every edit calls [`DocumentCacheEntry::request_update`], which marks the
//! entry dirty. The first request after a quiet period parses right away;
//! requests that follow within the refresh interval share a single deferred
//! refresh that fires one interval after the previous one. While dirty, the
//! entry hides its tree so readers never see a stale snapshot.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use super::config::CacheConfig;
use super::error::CacheError;
use super::source::TextSource;
use crate::base::{DocumentUri, SourcePos};
use crate::syntax::{self, ParseError, ParsedNode};

type RefreshOutcome = Result<(), CacheError>;

/// Observable refresh state of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshPhase {
    /// The tree reflects the latest requested text.
    Clean,
    /// An update was requested but no refresh is scheduled, e.g. after a
    /// parse failure.
    Dirty,
    /// A deferred refresh is armed.
    Pending,
    /// A parse is running.
    Refreshing,
}

/// Counters describing the parses performed for one entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshStats {
    pub parse_count: u64,
    pub failed_parse_count: u64,
    pub last_parse_duration: Option<Duration>,
}

#[derive(Debug)]
struct PendingRefresh {
    fire_at: Instant,
    outcome: watch::Receiver<Option<RefreshOutcome>>,
}

#[derive(Debug, Default)]
struct EntryState {
    tree: Option<Arc<ParsedNode>>,
    dirty: bool,
    /// Bumped by every request. A refresh only clears `dirty` when no
    /// request arrived after it started.
    generation: u64,
    last_refresh_at: Option<Instant>,
    pending: Option<PendingRefresh>,
    refreshing: bool,
    last_error: Option<ParseError>,
    stats: RefreshStats,
}

enum Schedule {
    Now,
    Join(watch::Receiver<Option<RefreshOutcome>>),
}

/// Cached parse result for a single document.
pub struct DocumentCacheEntry {
    uri: DocumentUri,
    source: Arc<dyn TextSource>,
    config: CacheConfig,
    state: Mutex<EntryState>,
    /// Held for the duration of a parse: at most one per entry.
    parse_gate: tokio::sync::Mutex<()>,
    closed: CancellationToken,
}

impl std::fmt::Debug for DocumentCacheEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentCacheEntry")
            .field("uri", &self.uri)
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

impl DocumentCacheEntry {
    /// Create an entry that has never been parsed. It starts dirty.
    pub fn new(uri: DocumentUri, source: Arc<dyn TextSource>, config: CacheConfig) -> Self {
        Self {
            uri,
            source,
            config,
            state: Mutex::new(EntryState {
                dirty: true,
                ..EntryState::default()
            }),
            parse_gate: tokio::sync::Mutex::new(()),
            closed: CancellationToken::new(),
        }
    }

    pub fn uri(&self) -> &DocumentUri {
        &self.uri
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    pub fn is_dirty(&self) -> bool {
        self.state.lock().dirty
    }

    pub fn is_closed(&self) -> bool {
        self.closed.is_cancelled()
    }

    pub fn phase(&self) -> RefreshPhase {
        let state = self.state.lock();
        if state.refreshing {
            RefreshPhase::Refreshing
        } else if state.pending.is_some() {
            RefreshPhase::Pending
        } else if state.dirty {
            RefreshPhase::Dirty
        } else {
            RefreshPhase::Clean
        }
    }

    /// The current tree, or `None` while the entry is dirty.
    pub fn tree(&self) -> Option<Arc<ParsedNode>> {
        let state = self.state.lock();
        if state.dirty {
            None
        } else {
            state.tree.clone()
        }
    }

    /// The error from the most recent failed parse, cleared by the next
    /// successful one.
    pub fn last_error(&self) -> Option<ParseError> {
        self.state.lock().last_error.clone()
    }

    pub fn stats(&self) -> RefreshStats {
        self.state.lock().stats
    }

    /// Run `f` on the element or attribute at `position`.
    ///
    /// Returns `None` when the entry is dirty or nothing covers the
    /// position. The node borrow cannot outlive the call, so callers never
    /// hold on to a tree that a later refresh replaced.
    pub fn find_node_at<R>(
        &self,
        position: SourcePos,
        f: impl FnOnce(&ParsedNode) -> R,
    ) -> Option<R> {
        let tree = self.tree()?;
        syntax::find_node_at(&tree, position).map(f)
    }

    /// Mark the entry dirty and wait until a refresh covering this request
    /// has run.
    ///
    /// Callers that arrive while a deferred refresh is armed share its
    /// outcome, so a burst of requests produces one extra parse.
    pub async fn request_update(self: &Arc<Self>) -> Result<(), CacheError> {
        if self.is_closed() {
            return Err(CacheError::Closed);
        }
        match self.schedule(Instant::now()) {
            Schedule::Now => self.refresh().await,
            Schedule::Join(outcome) => wait_for_outcome(outcome).await,
        }
    }

    /// Stop any armed refresh. Waiting callers get [`CacheError::Closed`].
    pub fn dispose(&self) {
        debug!("Disposing cache entry for {}", self.uri);
        self.closed.cancel();
        self.state.lock().pending = None;
    }

    fn schedule(self: &Arc<Self>, now: Instant) -> Schedule {
        let mut state = self.state.lock();
        state.dirty = true;
        state.generation += 1;

        if let Some(pending) = &state.pending {
            trace!("Joining pending refresh for {}", self.uri);
            return Schedule::Join(pending.outcome.clone());
        }

        let interval = self.config.refresh_interval;
        let fire_at = match state.last_refresh_at {
            Some(last) if now.saturating_duration_since(last) < interval => last + interval,
            _ => {
                state.last_refresh_at = Some(now);
                return Schedule::Now;
            }
        };

        let (sender, receiver) = watch::channel(None);
        state.pending = Some(PendingRefresh {
            fire_at,
            outcome: receiver.clone(),
        });
        drop(state);

        trace!(
            "Deferring refresh of {} by {:?}",
            self.uri,
            fire_at.saturating_duration_since(now)
        );
        self.arm(fire_at, sender);
        Schedule::Join(receiver)
    }

    fn arm(self: &Arc<Self>, fire_at: Instant, sender: watch::Sender<Option<RefreshOutcome>>) {
        let entry = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = entry.closed.cancelled() => Err(CacheError::Closed),
                _ = sleep_until(fire_at) => entry.fire().await,
            };
            sender.send_replace(Some(outcome));
        });
    }

    async fn fire(&self) -> RefreshOutcome {
        {
            let mut state = self.state.lock();
            debug_assert!(state.pending.as_ref().is_none_or(|p| p.fire_at <= Instant::now()));
            state.pending = None;
            state.last_refresh_at = Some(Instant::now());
        }
        self.refresh().await
    }

    async fn refresh(&self) -> RefreshOutcome {
        let _gate = self.parse_gate.lock().await;
        if self.is_closed() {
            return Err(CacheError::Closed);
        }

        let generation = {
            let mut state = self.state.lock();
            state.refreshing = true;
            state.generation
        };

        debug!("Refreshing {}", self.uri);
        let started = Instant::now();
        let text = self.source.text();
        let parsed = syntax::parse(&text);
        let elapsed = started.elapsed();

        let mut state = self.state.lock();
        state.refreshing = false;
        state.stats.parse_count += 1;
        state.stats.last_parse_duration = Some(elapsed);

        match parsed {
            Ok(tree) => {
                state.tree = Some(Arc::new(tree));
                state.last_error = None;
                if state.generation == generation {
                    state.dirty = false;
                }
                debug!("Refreshed {} in {:?}", self.uri, elapsed);
                Ok(())
            }
            Err(err) => {
                state.stats.failed_parse_count += 1;
                state.last_error = Some(err.clone());
                warn!("Failed to parse {}: {}", self.uri, err);
                Err(CacheError::Parse(err))
            }
        }
    }
}

async fn wait_for_outcome(mut outcome: watch::Receiver<Option<RefreshOutcome>>) -> RefreshOutcome {
    let received = match outcome.wait_for(Option::is_some).await {
        Ok(value) => value.clone(),
        Err(_) => None,
    };
    received.unwrap_or(Err(CacheError::Closed))
}
