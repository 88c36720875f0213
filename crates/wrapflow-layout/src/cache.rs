//! Last-reported sizes, one per container.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use wrapflow_core::Size;

/// Identity of a wrap container inside a [`crate::LayoutEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerId(pub u64);

impl From<u64> for ContainerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a recorded size compares to the previous report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// First report for this container.
    New,
    /// Differs from the previous report.
    Changed,
    /// Same as the previous report.
    Unchanged,
}

impl ReportOutcome {
    /// True unless the size is unchanged.
    #[must_use]
    pub const fn is_changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    size: Size,
    last_used_frame: u64,
}

/// Cache of the last size each container reported.
///
/// A hit is a report equal to the cached size; anything else is a miss.
#[derive(Debug, Default)]
pub struct ReportCache {
    entries: HashMap<ContainerId, CacheEntry>,
    current_frame: u64,
    hits: usize,
    misses: usize,
}

impl ReportCache {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `size` for `id` and compare it to the previous report.
    pub fn record(&mut self, id: ContainerId, size: Size) -> ReportOutcome {
        let frame = self.current_frame;
        let outcome = match self.entries.get_mut(&id) {
            Some(entry) if entry.size == size => {
                entry.last_used_frame = frame;
                ReportOutcome::Unchanged
            }
            Some(entry) => {
                entry.size = size;
                entry.last_used_frame = frame;
                ReportOutcome::Changed
            }
            None => {
                self.entries.insert(
                    id,
                    CacheEntry {
                        size,
                        last_used_frame: frame,
                    },
                );
                ReportOutcome::New
            }
        };

        if outcome.is_changed() {
            self.misses += 1;
        } else {
            self.hits += 1;
        }
        outcome
    }

    /// Last reported size for `id`, without touching statistics.
    #[must_use]
    pub fn get(&self, id: ContainerId) -> Option<Size> {
        self.entries.get(&id).map(|entry| entry.size)
    }

    /// Forget `id`.
    pub fn remove(&mut self, id: ContainerId) -> Option<Size> {
        self.entries.remove(&id).map(|entry| entry.size)
    }

    /// Clear the entire cache.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Get the number of unchanged reports.
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Get the number of new or changed reports.
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Current frame number.
    #[must_use]
    pub const fn current_frame(&self) -> u64 {
        self.current_frame
    }

    /// Advance to the next frame and evict stale entries.
    pub fn advance_frame(&mut self) {
        self.current_frame += 1;

        // Keep containers laid out in the last 2 frames.
        let threshold = self.current_frame.saturating_sub(2);
        self.entries.retain(|_, entry| entry.last_used_frame >= threshold);
    }

    /// Get the number of cached containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
