// crates/countrydb-core/src/track.rs

//! # Request-generation tracking
//!
//! Guards a view against out-of-order completion: when the target key
//! changes before an earlier fetch settles, the stale result must be
//! discarded rather than applied. Each fetch takes a tag from the tracker;
//! only the latest tag is ever accepted.

use std::sync::atomic::{AtomicU64, Ordering};

/// Tag handed out for one fetch. Compares against the tracker's current
/// generation at completion time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FetchTag(u64);

/// Monotonic generation counter for one view's in-flight fetches.
#[derive(Debug, Default)]
pub struct RequestTracker {
    current: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, invalidating every tag handed out before.
    pub fn begin(&self) -> FetchTag {
        FetchTag(self.current.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// True while no later fetch has begun.
    pub fn is_current(&self, tag: FetchTag) -> bool {
        self.current.load(Ordering::Relaxed) == tag.0
    }

    /// Keep `value` only if the tag is still current; stale completions
    /// collapse to `None`.
    pub fn accept<T>(&self, tag: FetchTag, value: T) -> Option<T> {
        self.is_current(tag).then_some(value)
    }
}
