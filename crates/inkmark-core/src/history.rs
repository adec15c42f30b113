//! Linear undo/redo history over whole-collection snapshots.

use crate::canvas::ElementCollection;
use std::collections::VecDeque;

/// Snapshot history of the element collection.
///
/// The history owns the current collection: the only ways to change it are
/// [`History::commit`], [`History::undo`], [`History::redo`] and the
/// unrecorded [`History::replace`].
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Earlier collections, oldest first.
    past: Vec<ElementCollection>,
    /// The collection currently shown.
    present: ElementCollection,
    /// Undone collections, nearest redo first.
    future: VecDeque<ElementCollection>,
    /// Maximum number of `past` entries to keep (None = unbounded).
    max_depth: Option<usize>,
}

impl History {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history that keeps at most `max_depth` undo states.
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// The current collection.
    pub fn present(&self) -> &ElementCollection {
        &self.present
    }

    /// Record a transition to `next`.
    ///
    /// The current collection moves onto `past` and any redo chain is discarded.
    pub fn commit(&mut self, next: ElementCollection) {
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push(previous);
        self.future.clear();

        if let Some(max) = self.max_depth {
            if self.past.len() > max {
                let excess = self.past.len() - max;
                self.past.drain(..excess);
            }
        }

        log::debug!(
            "Committed collection of {} elements (undo depth {})",
            self.present.len(),
            self.past.len()
        );
    }

    /// Step back one commit.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            log::debug!("Nothing to undo");
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Step forward one undone commit.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            log::debug!("Nothing to redo");
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        true
    }

    /// Replace the current collection without recording a history entry.
    pub fn replace(&mut self, collection: ElementCollection) {
        self.present = collection;
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Earlier collections, oldest first.
    pub fn past(&self) -> &[ElementCollection] {
        &self.past
    }

    /// Undone collections, nearest redo first.
    pub fn future(&self) -> impl Iterator<Item = &ElementCollection> {
        self.future.iter()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }
}
