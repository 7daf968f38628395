//! Built-in dock-leveler procedure.
//!
//! Media and icon ids are resolved by the platform; see `MediaResolver`.
//! Some "previous" controls are hard gotos rather than `Back` so the operator
//! lands on the same step whichever branch they arrived from.

use crate::graph::{
    Action, ChoiceSide, Control, GraphError, MediaRef, Step, StepGraph, StepKind, Visual,
};

pub const START_STEP: &str = "home";

const NEXT: Visual<'static> = Visual::Icon("next");
const PREV: Visual<'static> = Visual::Icon("previous");
const RESTRAINT_LOCK: Visual<'static> = Visual::Icon("restraint-locked");
const RESTRAINT_UNLOCK: Visual<'static> = Visual::Icon("restraint-unlocked");
const DOOR_UP: Visual<'static> = Visual::Icon("door-up");
const DOOR_DOWN: Visual<'static> = Visual::Icon("door-down");
const LEVELER_UP: Visual<'static> = Visual::Icon("leveler-up");
const LEVELER_DOWN: Visual<'static> = Visual::Icon("leveler-down");
const LOADING: Visual<'static> = Visual::Icon("active-loading");

const END_LOAD_IMAGE: MediaRef<'static> = MediaRef::Image("end-load");
const REGULAR_LOAD_IMAGE: MediaRef<'static> = MediaRef::Image("regular-load");

const fn linear(video: &'static str) -> StepKind<'static> {
    StepKind::Linear {
        media: MediaRef::Video(video),
    }
}

pub static DOCK_STEPS: &[Step<'static>] = &[
    Step {
        id: "home",
        label: "Home",
        kind: linear("1_truck-back-in"),
        controls: &[Control::tap(NEXT, Action::Goto("restraint"))],
    },
    Step {
        id: "restraint",
        label: "Raise Restraint",
        kind: linear("2_restraint-engage"),
        controls: &[
            Control::tap(PREV, Action::Back),
            Control::hold_for(RESTRAINT_LOCK, 3_000, Action::None),
            Control::tap(NEXT, Action::Goto("door")),
        ],
    },
    Step {
        id: "door",
        label: "Raise Door",
        kind: linear("3_door-open"),
        controls: &[
            Control::tap(PREV, Action::Back),
            Control::hold(DOOR_UP, Action::None),
            Control::tap(NEXT, Action::Goto("which-unload")),
        ],
    },
    Step {
        id: "endload-position",
        label: "End Load",
        kind: linear("end-load-positioning-4B1"),
        controls: &[
            Control::tap(PREV, Action::Goto("which-load")),
            Control::hold(LEVELER_UP, Action::None),
            Control::tap(NEXT, Action::Goto("endload-unload")),
        ],
    },
    Step {
        id: "endload-unload",
        label: "End Unloading",
        kind: linear("end-unload-4B2"),
        controls: &[
            Control::tap(PREV, Action::Goto("endload-position")),
            Control::tap(LOADING, Action::None),
            Control::tap(NEXT, Action::Goto("reg-load-position")),
        ],
    },
    Step {
        id: "reg-load-position",
        label: "Standard Load",
        kind: linear("reg-loading-positioning-4B3"),
        controls: &[
            Control::tap(PREV, Action::Back),
            Control::hold(LEVELER_UP, Action::None),
            Control::tap(NEXT, Action::Goto("load-unload")),
        ],
    },
    Step {
        id: "load-unload",
        label: "Standard Loading",
        kind: linear("load-unload-5"),
        controls: &[
            Control::tap(PREV, Action::Back),
            Control::tap(LOADING, Action::None),
            Control::tap(NEXT, Action::Goto("which-load")),
        ],
    },
    Step {
        id: "store-leveler",
        label: "End Load",
        kind: linear("store-leveler-endload-6B1"),
        controls: &[
            Control::tap(PREV, Action::Back),
            Control::hold(LEVELER_DOWN, Action::None),
            Control::tap(NEXT, Action::Goto("endload-load")),
        ],
    },
    Step {
        id: "endload-load",
        label: "End Loading",
        kind: linear("endload-unload-6B2"),
        controls: &[
            Control::tap(PREV, Action::Goto("store-leveler")),
            Control::tap(LOADING, Action::None),
            Control::tap(NEXT, Action::Goto("leveler-complete")),
        ],
    },
    Step {
        id: "leveler-complete",
        label: "Home Leveler",
        kind: linear("store-leveler-complete"),
        controls: &[
            Control::tap(PREV, Action::Back),
            Control::hold(LEVELER_DOWN, Action::None),
            Control::tap(NEXT, Action::Goto("lower-door")),
        ],
    },
    Step {
        id: "lower-door",
        label: "Lower Door",
        kind: linear("lower-door-7"),
        controls: &[
            Control::tap(PREV, Action::Goto("leveler-complete")),
            Control::hold(DOOR_DOWN, Action::None),
            Control::tap(NEXT, Action::Goto("restraint-disengage")),
        ],
    },
    Step {
        id: "restraint-disengage",
        label: "Lower Restraint",
        kind: linear("restraint-disengage-8"),
        controls: &[
            Control::tap(PREV, Action::Goto("lower-door")),
            Control::hold(RESTRAINT_UNLOCK, Action::None),
            Control::tap(NEXT, Action::Goto("home")),
        ],
    },
    Step {
        id: "which-unload",
        label: "Unload Selection",
        kind: StepKind::Choice {
            left: ChoiceSide {
                media: END_LOAD_IMAGE,
                label: "End Load",
                action: Action::Goto("endload-position"),
            },
            right: ChoiceSide {
                media: REGULAR_LOAD_IMAGE,
                label: "Standard Load",
                action: Action::Goto("reg-load-position"),
            },
        },
        controls: &[Control::tap(PREV, Action::Back)],
    },
    Step {
        id: "which-load",
        label: "Load Selection",
        kind: StepKind::Choice {
            left: ChoiceSide {
                media: END_LOAD_IMAGE,
                label: "End Load",
                action: Action::Goto("store-leveler"),
            },
            right: ChoiceSide {
                media: REGULAR_LOAD_IMAGE,
                label: "Standard Load, Finish Loading",
                action: Action::Goto("leveler-complete"),
            },
        },
        controls: &[Control::tap(PREV, Action::Back)],
    },
];

pub fn dock_sequence() -> Result<StepGraph<'static>, GraphError<'static>> {
    StepGraph::new(DOCK_STEPS, START_STEP)
}
