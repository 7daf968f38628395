//! Per-visitor session state.

use heapless::Vec as HeaplessVec;

use crate::{
    graph::{Action, MAX_CONTROLS_PER_STEP, StepIndex},
    history::History,
    hold::{HoldEngine, HoldProgress},
};

/// Identifies one control of one step.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ControlKey {
    pub step: StepIndex,
    pub position: u8,
}

impl ControlKey {
    pub const fn new(step: StepIndex, position: u8) -> Self {
        Self { step, position }
    }
}

/// Hold controls of the current step that have been confirmed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CompletedHolds {
    keys: HeaplessVec<ControlKey, MAX_CONTROLS_PER_STEP>,
}

impl CompletedHolds {
    pub const fn new() -> Self {
        Self {
            keys: HeaplessVec::new(),
        }
    }

    /// Returns `false` when the key was already recorded.
    pub fn insert(&mut self, key: ControlKey) -> bool {
        if self.contains(key) {
            return false;
        }
        // Keys are scoped to one step, whose control count the graph caps.
        self.keys.push(key).is_ok()
    }

    pub fn contains(&self, key: ControlKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ControlKey> + '_ {
        self.keys.iter().copied()
    }
}

/// Everything that changes while an operator walks the sequence.
#[derive(Clone, Debug)]
pub struct SessionState<'a> {
    current: StepIndex,
    history: History,
    completed: CompletedHolds,
    flash: Option<ControlKey>,
    hold: HoldEngine<&'a Action<'a>>,
}

impl<'a> SessionState<'a> {
    pub fn new(start: StepIndex) -> Self {
        Self {
            current: start,
            history: History::new(),
            completed: CompletedHolds::new(),
            flash: None,
            hold: HoldEngine::new(),
        }
    }

    /// Back to `(start, [])` with no step-scoped leftovers.
    pub fn reset(&mut self, start: StepIndex) {
        self.current = start;
        self.history.clear();
        self.clear_step_scope();
    }

    pub const fn current(&self) -> StepIndex {
        self.current
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn completed_holds(&self) -> &CompletedHolds {
        &self.completed
    }

    pub const fn flash_key(&self) -> Option<ControlKey> {
        self.flash
    }

    pub fn hold_progress(&self) -> Option<HoldProgress> {
        self.hold.progress()
    }

    pub(crate) fn hold_mut(&mut self) -> &mut HoldEngine<&'a Action<'a>> {
        &mut self.hold
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub(crate) fn set_current(&mut self, step: StepIndex) {
        self.current = step;
        self.clear_step_scope();
    }

    pub(crate) fn mark_hold_completed(&mut self, key: ControlKey, flash: Option<ControlKey>) {
        self.completed.insert(key);
        self.flash = flash;
    }

    pub(crate) fn clear_flash_if(&mut self, key: ControlKey) {
        if self.flash == Some(key) {
            self.flash = None;
        }
    }

    fn clear_step_scope(&mut self) {
        self.hold.cancel();
        self.completed.clear();
        self.flash = None;
    }
}
