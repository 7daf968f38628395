//! Navigation reducer: applies an [`Action`] to `(current step, history)`.

use log::{debug, warn};

use crate::{
    gate,
    graph::{Action, StepGraph, StepIndex},
    session::{ControlKey, SessionState},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Transition {
    Moved { from: StepIndex, to: StepIndex },
    Stayed,
    UnknownTarget,
}

impl Transition {
    pub const fn moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Every step change clears hold progress, completed holds and the flash hint.
pub fn apply<'a>(
    session: &mut SessionState<'a>,
    graph: &StepGraph<'a>,
    action: &Action<'a>,
) -> Transition {
    match *action {
        Action::Goto(target) => {
            let Some(to) = graph.lookup(target) else {
                warn!("kiosk-nav: goto unknown step {:?} ignored", target);
                return Transition::UnknownTarget;
            };
            let from = session.current();
            session.history_mut().push(from);
            session.set_current(to);
            debug!(
                "kiosk-nav: goto {} -> {} depth={}",
                graph.step(from).id,
                graph.step(to).id,
                session.history().len()
            );
            Transition::Moved { from, to }
        }
        Action::Back => {
            let from = session.current();
            let Some(to) = session.history_mut().pop() else {
                debug!(
                    "kiosk-nav: back on empty history ignored at {}",
                    graph.step(from).id
                );
                return Transition::Stayed;
            };
            session.set_current(to);
            debug!(
                "kiosk-nav: back {} -> {} depth={}",
                graph.step(from).id,
                graph.step(to).id,
                session.history().len()
            );
            Transition::Moved { from, to }
        }
        Action::None => Transition::Stayed,
        Action::HoldComplete(nested) => apply(session, graph, nested),
    }
}

/// Records a confirmed hold (completed key plus flash on the following
/// control), then runs the control's configured action.
pub fn complete_hold<'a>(
    session: &mut SessionState<'a>,
    graph: &StepGraph<'a>,
    key: ControlKey,
    on_complete: &'a Action<'a>,
) -> Transition {
    if key.step != session.current() {
        debug!("kiosk-nav: stale hold completion {:?} dropped", key);
        return Transition::Stayed;
    }

    let step = graph.step(key.step);
    session.mark_hold_completed(key, gate::flash_target(step, key));
    debug!(
        "kiosk-nav: hold confirmed step={} position={} flash={:?}",
        step.id,
        key.position,
        session.flash_key().map(|flash| flash.position)
    );
    apply(session, graph, &Action::HoldComplete(on_complete))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{DOCK_STEPS, START_STEP};
    use proptest::prelude::*;

    fn dock() -> StepGraph<'static> {
        StepGraph::new(DOCK_STEPS, START_STEP).unwrap()
    }

    #[test]
    fn goto_pushes_current_step() {
        let graph = dock();
        let mut session = SessionState::new(graph.start_index());

        let transition = apply(&mut session, &graph, &Action::Goto("restraint"));
        assert!(transition.moved());
        assert_eq!(graph.step(session.current()).id, "restraint");
        let history: Vec<_> = session.history().iter().map(|i| graph.step(i).id).collect();
        assert_eq!(history, ["home"]);
    }

    #[test]
    fn back_on_empty_history_is_noop() {
        let graph = dock();
        let mut session = SessionState::new(graph.start_index());

        assert_eq!(apply(&mut session, &graph, &Action::Back), Transition::Stayed);
        assert_eq!(session.current(), graph.start_index());
        assert!(session.history().is_empty());
    }

    #[test]
    fn none_is_inert() {
        let graph = dock();
        let mut session = SessionState::new(graph.start_index());
        apply(&mut session, &graph, &Action::Goto("door"));

        assert_eq!(apply(&mut session, &graph, &Action::None), Transition::Stayed);
        assert_eq!(graph.step(session.current()).id, "door");
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn unknown_target_leaves_state_untouched() {
        let graph = dock();
        let mut session = SessionState::new(graph.start_index());

        assert_eq!(
            apply(&mut session, &graph, &Action::Goto("loading-bay")),
            Transition::UnknownTarget
        );
        assert_eq!(session.current(), graph.start_index());
        assert!(session.history().is_empty());
    }

    #[test]
    fn step_change_clears_step_scope() {
        let graph = dock();
        let mut session = SessionState::new(graph.start_index());
        apply(&mut session, &graph, &Action::Goto("restraint"));

        let key = ControlKey::new(session.current(), 1);
        complete_hold(&mut session, &graph, key, &Action::None);
        assert!(session.completed_holds().contains(key));
        assert_eq!(session.flash_key(), Some(ControlKey::new(key.step, 2)));

        session.hold_mut().start(key, 1_000, &Action::None, 0);
        apply(&mut session, &graph, &Action::Back);
        assert!(session.completed_holds().is_empty());
        assert_eq!(session.flash_key(), None);
        assert_eq!(session.hold_progress(), None);
    }

    #[test]
    fn hold_complete_runs_nested_action() {
        let graph = dock();
        let mut session = SessionState::new(graph.start_index());
        let nested = Action::Goto("door");

        let transition = apply(&mut session, &graph, &Action::HoldComplete(&nested));
        assert!(transition.moved());
        assert_eq!(graph.step(session.current()).id, "door");
    }

    #[test]
    fn stale_completion_is_dropped() {
        let graph = dock();
        let mut session = SessionState::new(graph.start_index());
        let restraint = graph.lookup("restraint").unwrap();

        let transition =
            complete_hold(&mut session, &graph, ControlKey::new(restraint, 1), &Action::None);
        assert_eq!(transition, Transition::Stayed);
        assert!(session.completed_holds().is_empty());
    }

    #[derive(Clone, Debug)]
    enum Op {
        Goto(usize),
        Back,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..DOCK_STEPS.len()).prop_map(Op::Goto),
            Just(Op::Back),
        ]
    }

    proptest! {
        #[test]
        fn history_tracks_gotos_minus_backs(ops in proptest::collection::vec(op(), 0..80)) {
            let graph = dock();
            let mut session = SessionState::new(graph.start_index());
            let mut gotos = 0usize;
            let mut backs = 0usize;

            for op in ops {
                match op {
                    Op::Goto(position) => {
                        let target = DOCK_STEPS[position].id;
                        prop_assert!(apply(&mut session, &graph, &Action::Goto(target)).moved());
                        gotos += 1;
                    }
                    Op::Back => {
                        let before = session.current();
                        let was_empty = session.history().is_empty();
                        if apply(&mut session, &graph, &Action::Back).moved() {
                            backs += 1;
                        } else {
                            prop_assert!(was_empty);
                            prop_assert_eq!(session.current(), before);
                        }
                    }
                }
                prop_assert_eq!(session.history().len(), gotos - backs);
            }
        }
    }
}
