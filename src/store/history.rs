use std::collections::VecDeque;

/// Maximum number of snapshots kept for undo.
pub const MAX_HISTORY: usize = 50;

/// Bounded linear undo/redo history of whole-state snapshots.
///
/// Pushing after an undo discards the redo branch. Once the history holds `capacity`
/// snapshots, the oldest one is dropped on each push.
#[derive(Debug, Clone)]
pub struct UndoHistory<T> {
    entries: VecDeque<T>,
    index: usize,
    capacity: usize,
}

impl<T> UndoHistory<T> {
    pub fn new(initial: T) -> Self {
        Self::with_capacity(initial, MAX_HISTORY)
    }

    pub fn with_capacity(initial: T, capacity: usize) -> Self {
        let mut entries = VecDeque::with_capacity(capacity.max(1));
        entries.push_back(initial);
        Self {
            entries,
            index: 0,
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, state: T) {
        self.entries.truncate(self.index + 1);
        self.entries.push_back(state);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.index = self.entries.len() - 1;
    }

    /// Moves back one snapshot; `None` when already at the oldest one.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index)
    }

    /// Moves forward one snapshot; `None` when already at the newest one.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index)
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every snapshot and starts over from `initial`.
    pub fn reset(&mut self, initial: T) {
        self.entries.clear();
        self.entries.push_back(initial);
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo_walks_snapshots() {
        let mut history = UndoHistory::new(0);
        history.push(1);
        history.push(2);
        assert_eq!(history.undo(), Some(&1));
        assert_eq!(history.undo(), Some(&0));
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), Some(&1));
        assert_eq!(history.redo(), Some(&2));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_push_truncates_redo_branch() {
        let mut history = UndoHistory::new(0);
        history.push(1);
        history.push(2);
        history.undo();
        history.push(3);
        assert!(!history.can_redo());
        assert_eq!(history.current(), Some(&3));
        assert_eq!(history.undo(), Some(&1));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = UndoHistory::new(0);
        for i in 1..=60 {
            history.push(i);
        }
        assert_eq!(history.len(), MAX_HISTORY);

        let mut undone = 0;
        while history.undo().is_some() {
            undone += 1;
        }
        assert_eq!(undone, MAX_HISTORY - 1);
        assert_eq!(history.current(), Some(&11));
        // further undo has no effect
        assert_eq!(history.undo(), None);
        assert_eq!(history.current(), Some(&11));
    }

    #[test]
    fn test_reset_keeps_single_entry() {
        let mut history = UndoHistory::with_capacity(0, 3);
        history.push(1);
        history.reset(7);
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
        assert_eq!(history.current(), Some(&7));
    }

    #[test]
    fn test_zero_capacity_behaves_as_one() {
        let mut history = UndoHistory::with_capacity(0, 0);
        history.push(1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(&1));
    }
}
