//! Back-navigation history.

use alloc::vec::Vec;

use crate::graph::StepIndex;

/// Linear stack of previously visited steps. Sessions are short, so the
/// stack is unbounded.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct History {
    entries: Vec<StepIndex>,
}

impl History {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, step: StepIndex) {
        self.entries.push(step);
    }

    pub fn pop(&mut self) -> Option<StepIndex> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<StepIndex> {
        self.entries.last().copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest entry first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = StepIndex> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::StepGraph;
    use crate::sequence::{DOCK_STEPS, START_STEP};

    #[test]
    fn pop_unwinds_in_reverse_order() {
        let graph = StepGraph::new(DOCK_STEPS, START_STEP).unwrap();
        let home = graph.lookup("home").unwrap();
        let door = graph.lookup("door").unwrap();

        let mut history = History::new();
        history.push(home);
        history.push(door);
        assert_eq!(history.len(), 2);
        assert_eq!(history.peek(), Some(door));
        assert_eq!(history.pop(), Some(door));
        assert_eq!(history.pop(), Some(home));
        assert!(history.is_empty());
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut history = History::new();
        assert_eq!(history.pop(), None);
        assert_eq!(history.len(), 0);
    }
}
