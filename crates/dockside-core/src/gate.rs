//! Lock-gating of footer controls.
//!
//! A non-hold control is locked while any hold control before it in the same
//! step is unconfirmed. The result is derived from `(step, completed holds)`
//! on demand; nothing stores lock flags.

use heapless::Vec as HeaplessVec;

use crate::{
    graph::{MAX_CONTROLS_PER_STEP, Step, StepIndex},
    session::{CompletedHolds, ControlKey},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ControlGate {
    Open,
    Locked,
    HoldPending,
    HoldConfirmed,
}

pub type GateStates = HeaplessVec<ControlGate, MAX_CONTROLS_PER_STEP>;

pub fn resolve(step_index: StepIndex, step: &Step<'_>, completed: &CompletedHolds) -> GateStates {
    let mut states = GateStates::new();
    let mut blocked = false;

    for (position, control) in step.controls.iter().enumerate() {
        let key = ControlKey::new(step_index, position as u8);
        let gate = if control.is_hold() {
            if completed.contains(key) {
                ControlGate::HoldConfirmed
            } else {
                blocked = true;
                ControlGate::HoldPending
            }
        } else if blocked {
            ControlGate::Locked
        } else {
            ControlGate::Open
        };

        if states.push(gate).is_err() {
            break;
        }
    }

    states
}

pub fn is_locked(
    step_index: StepIndex,
    step: &Step<'_>,
    position: usize,
    completed: &CompletedHolds,
) -> bool {
    let Some(control) = step.controls.get(position) else {
        return true;
    };
    if control.is_hold() {
        return false;
    }

    step.controls[..position]
        .iter()
        .enumerate()
        .any(|(earlier, control)| {
            control.is_hold() && !completed.contains(ControlKey::new(step_index, earlier as u8))
        })
}

/// Control that gets the just-unlocked highlight when the hold at `completed`
/// confirms.
pub fn flash_target(step: &Step<'_>, completed: ControlKey) -> Option<ControlKey> {
    let next = completed.position as usize + 1;
    (next < step.controls.len()).then(|| ControlKey::new(completed.step, next as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Action, Control, MediaRef, StepGraph, StepKind, Visual};

    static STEPS: [Step<'static>; 1] = [Step {
        id: "restraint",
        label: "Raise Restraint",
        kind: StepKind::Linear {
            media: MediaRef::Video("2_restraint-engage"),
        },
        controls: &[
            Control::hold(Visual::Text("A"), Action::None),
            Control::tap(Visual::Text("B"), Action::None),
            Control::tap(Visual::Text("C"), Action::None),
        ],
    }];

    static TWO_HOLDS: [Step<'static>; 1] = [Step {
        id: "door",
        label: "Raise Door",
        kind: StepKind::Linear {
            media: MediaRef::Video("3_door-open"),
        },
        controls: &[
            Control::tap(Visual::Text("back"), Action::Back),
            Control::hold(Visual::Text("A"), Action::None),
            Control::tap(Visual::Text("B"), Action::None),
            Control::hold(Visual::Text("C"), Action::None),
        ],
    }];

    #[test]
    fn later_taps_unlock_together_after_hold() {
        let graph = StepGraph::new(&STEPS, "restraint").unwrap();
        let index = graph.start_index();
        let step = graph.start();
        let mut completed = CompletedHolds::new();

        assert_eq!(
            resolve(index, step, &completed).as_slice(),
            &[
                ControlGate::HoldPending,
                ControlGate::Locked,
                ControlGate::Locked
            ]
        );
        assert!(is_locked(index, step, 1, &completed));
        assert!(is_locked(index, step, 2, &completed));

        completed.insert(ControlKey::new(index, 0));
        assert_eq!(
            resolve(index, step, &completed).as_slice(),
            &[
                ControlGate::HoldConfirmed,
                ControlGate::Open,
                ControlGate::Open
            ]
        );
        assert!(!is_locked(index, step, 1, &completed));
        assert!(!is_locked(index, step, 2, &completed));
    }

    #[test]
    fn controls_before_hold_stay_open() {
        let graph = StepGraph::new(&TWO_HOLDS, "door").unwrap();
        let index = graph.start_index();
        let step = graph.start();
        let mut completed = CompletedHolds::new();

        assert!(!is_locked(index, step, 0, &completed));
        assert!(!is_locked(index, step, 3, &completed));

        completed.insert(ControlKey::new(index, 1));
        assert_eq!(
            resolve(index, step, &completed).as_slice(),
            &[
                ControlGate::Open,
                ControlGate::HoldConfirmed,
                ControlGate::Open,
                ControlGate::HoldPending
            ]
        );
    }

    #[test]
    fn unknown_position_is_locked() {
        let graph = StepGraph::new(&STEPS, "restraint").unwrap();
        assert!(is_locked(
            graph.start_index(),
            graph.start(),
            7,
            &CompletedHolds::new()
        ));
    }

    #[test]
    fn flash_targets_following_control() {
        let graph = StepGraph::new(&STEPS, "restraint").unwrap();
        let index = graph.start_index();
        assert_eq!(
            flash_target(graph.start(), ControlKey::new(index, 0)),
            Some(ControlKey::new(index, 1))
        );
        assert_eq!(flash_target(graph.start(), ControlKey::new(index, 2)), None);
    }
}
