//! Kiosk state machine: guided steps, hold confirmation and the idle cover.

use log::{debug, warn};

use crate::{
    clock::{WallClock, date_label, time_label},
    gate::{self, ControlGate},
    graph::{Action, MAX_CONTROLS_PER_STEP, Step, StepGraph, StepKind},
    hold::{HOLD_SAMPLE_INTERVAL_MS, HoldProgress, HoldSample},
    idle::{DismissPolicy, IdleController},
    input::{InputEvent, InputProvider, Target},
    reducer::{self, Transition},
    render::{
        AnimationFrame, AnimationKind, AnimationSpec, CHOICE_HINT, ChoiceView, ControlKind,
        ControlView, FooterView, SCREENSAVER_HINT, Screen, StepMedia,
    },
    session::{ControlKey, SessionState},
    settings::KioskConfig,
};

const ANIM_STEP_MS: u16 = 220;
const ANIM_COVER_MS: u16 = 400;
const ANIM_FLASH_MS: u16 = 600;
const CLOCK_REFRESH_MS: u64 = 1_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

pub struct KioskApp<'a, IN, CLK>
where
    IN: InputProvider,
    CLK: WallClock,
{
    graph: StepGraph<'a>,
    input: IN,
    clock: CLK,
    config: KioskConfig<'a>,
    session: SessionState<'a>,
    idle: IdleController,
    pending_redraw: bool,
    transition: Option<AnimationSpec>,
    flash_pulse: Option<AnimationSpec>,
    last_hold_slot: Option<u64>,
    last_clock_slot: Option<u64>,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");
