//! Snapshot-based undo/redo history.
//!
//! History stores full document values, not diffs: `past` holds the documents
//! that preceded each recorded gesture, `future` the documents undone since.
//! Continuous updates inside a gesture replace `present` without recording.

use gymfloor_core::constants::DEFAULT_HISTORY_DEPTH;

/// Linear undo/redo over snapshots of `T`.
#[derive(Debug, Clone)]
pub struct History<T> {
    past: Vec<T>,
    present: T,
    /// Undone documents; the next redo target is the last element.
    future: Vec<T>,
    max_depth: usize,
    /// What the latest snapshot pushed out, restored if that snapshot is discarded
    evicted: Option<Evicted<T>>,
}

#[derive(Debug, Clone)]
struct Evicted<T> {
    oldest: Vec<T>,
    future: Vec<T>,
}

impl<T: Clone + PartialEq> History<T> {
    pub fn new(present: T) -> Self {
        Self::with_max_depth(present, DEFAULT_HISTORY_DEPTH)
    }

    /// History that keeps at most `max_depth` undo snapshots; the oldest are dropped.
    pub fn with_max_depth(present: T, max_depth: usize) -> Self {
        Self {
            past: Vec::new(),
            present,
            future: Vec::new(),
            max_depth: max_depth.max(1),
            evicted: None,
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    pub fn past(&self) -> &[T] {
        &self.past
    }

    pub fn future(&self) -> &[T] {
        &self.future
    }

    /// Record `present` as an undo point and clear the redo stack.
    ///
    /// Call once per discrete gesture (drag start, field focus, add, delete).
    pub fn snapshot(&mut self) {
        self.past.push(self.present.clone());
        let excess = self.past.len().saturating_sub(self.max_depth);
        self.evicted = Some(Evicted {
            oldest: self.past.drain(..excess).collect(),
            future: std::mem::take(&mut self.future),
        });
        tracing::trace!("History snapshot (depth {})", self.past.len());
    }

    /// Replace `present`, recording an undo point first when `record` is set.
    pub fn update(&mut self, next: T, record: bool) {
        if record {
            self.snapshot();
        }
        self.present = next;
    }

    /// Drop the last snapshot if the gesture it opened changed nothing.
    ///
    /// Entries the snapshot trimmed at the depth limit and the redo stack it
    /// cleared are put back. Returns whether a snapshot was dropped.
    pub fn discard_if_unchanged(&mut self) -> bool {
        if self.past.last() == Some(&self.present) {
            self.past.pop();
            if let Some(evicted) = self.evicted.take() {
                self.past.splice(..0, evicted.oldest);
                self.future = evicted.future;
            }
            true
        } else {
            false
        }
    }

    /// Step back one snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.evicted = None;
        match self.past.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.present, previous);
                self.future.push(current);
                true
            }
            None => false,
        }
    }

    /// Step forward one snapshot. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.evicted = None;
        match self.future.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.present, next);
                self.past.push(current);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Start over from `present` with empty stacks (new editing session).
    pub fn reset(&mut self, present: T) {
        self.past.clear();
        self.future.clear();
        self.evicted = None;
        self.present = present;
    }
}
