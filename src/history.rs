//! Linear undo/redo over full document snapshots.

use crate::models::GridConfig;
use std::collections::VecDeque;

/// Two ordered stacks of document snapshots implementing linear undo/redo.
///
/// `past` grows with every recorded edit; `future` holds states undone from
/// the present. Recording a new edit prunes `future` entirely, so history is
/// a single line, never a tree.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    past: Vec<GridConfig>,
    future: VecDeque<GridConfig>,
}

impl HistoryStack {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pre-mutation snapshot of an accepted edit.
    ///
    /// Any redo states are invalidated by the new edit.
    pub fn record(&mut self, snapshot: GridConfig) {
        self.past.push(snapshot);
        self.future.clear();
    }

    /// Steps back one edit.
    ///
    /// Returns the config to make current, or `None` if there is nothing to
    /// undo. The caller's current config moves to the front of the redo queue.
    pub fn undo(&mut self, current: &GridConfig) -> Option<GridConfig> {
        let previous = self.past.pop()?;
        self.future.push_front(current.clone());
        Some(previous)
    }

    /// Steps forward one undone edit.
    ///
    /// Returns the config to make current, or `None` if there is nothing to
    /// redo. The caller's current config moves back onto the undo stack.
    pub fn redo(&mut self, current: &GridConfig) -> Option<GridConfig> {
        let next = self.future.pop_front()?;
        self.past.push(current.clone());
        Some(next)
    }

    /// True if at least one edit can be undone.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// True if at least one undone edit can be redone.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of recorded edits available to undo.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.past.len()
    }
}
