//! Bounded selection histories
//!
//! Two independent memories with different lifecycles: a FIFO set of recently
//! shown photo identifiers that suppresses repetition in weighted picks, and
//! an ordered navigation stack with a cursor for explicit previous/next
//! traversal. Navigation never feeds back into the repetition memory.

use std::collections::VecDeque;

use crate::catalog::PhotoRecord;

/// Snapshot of the anti-repetition memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryStatus {
    /// Number of identifiers currently held
    pub size: usize,
    /// Maximum number of identifiers retained
    pub capacity: usize,
}

/// Snapshot of the navigation cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationStatus {
    /// Whether an earlier entry exists
    pub can_go_previous: bool,
    /// Whether a later entry exists
    pub can_go_next: bool,
    /// Current cursor index (0 when empty)
    pub index: usize,
    /// Total entries held
    pub total: usize,
}

/// Bounded FIFO set of recently shown photo identifiers
///
/// Mutated only by successful fresh picks. Cleared wholesale when exclusion
/// would otherwise leave every candidate pool empty.
#[derive(Debug, Clone)]
pub struct RecentHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl RecentHistory {
    /// Create an empty history with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Test whether an identifier was recently shown
    pub fn contains(&self, url: &str) -> bool {
        self.entries.iter().any(|entry| entry == url)
    }

    /// Record a freshly shown identifier, evicting the oldest beyond capacity
    pub fn record(&mut self, url: String) {
        self.entries.push_back(url);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of identifiers currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test whether the history holds nothing
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current size and capacity
    pub fn status(&self) -> HistoryStatus {
        HistoryStatus {
            size: self.entries.len(),
            capacity: self.capacity,
        }
    }
}

/// Bounded ordered sequence of displayed photos with a traversal cursor
///
/// Append-with-truncate-forward semantics: appending while the cursor is
/// behind the tail discards all entries after the cursor first. Exceeding
/// capacity evicts the oldest entry and shifts the cursor to stay on the
/// same record.
#[derive(Debug, Clone)]
pub struct NavigationHistory {
    entries: Vec<PhotoRecord>,
    cursor: usize,
    capacity: usize,
}

impl NavigationHistory {
    /// Create an empty navigation history with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            capacity,
        }
    }

    /// Append a freshly shown photo and move the cursor to it
    pub fn record(&mut self, record: PhotoRecord) {
        if self.cursor + 1 < self.entries.len() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(record);
        if self.entries.len() > self.capacity {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back, returning the record now under the cursor
    ///
    /// Returns `None` at the oldest entry or when empty; the caller keeps
    /// showing the current photo in that case.
    pub fn previous(&mut self) -> Option<PhotoRecord> {
        if self.entries.is_empty() || self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).cloned()
    }

    /// Step forward, returning the record now under the cursor
    ///
    /// Returns `None` at the tail; the caller then requests a fresh pick
    /// from the selection engine.
    pub fn next(&mut self) -> Option<PhotoRecord> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).cloned()
    }

    /// Record currently under the cursor
    pub fn current(&self) -> Option<PhotoRecord> {
        self.entries.get(self.cursor).cloned()
    }

    /// Cursor position and traversal bounds
    pub fn status(&self) -> NavigationStatus {
        NavigationStatus {
            can_go_previous: !self.entries.is_empty() && self.cursor > 0,
            can_go_next: self.cursor + 1 < self.entries.len(),
            index: self.cursor,
            total: self.entries.len(),
        }
    }
}
