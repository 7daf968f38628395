//! Step graph model: the static manifest the kiosk walks through.
//!
//! Steps reference each other by id only. [`StepGraph::new`] resolves every id
//! into a [`StepIndex`] once at startup and rejects manifests with dangling
//! references, so navigation never has to follow borrowed node pointers.

use alloc::collections::BTreeMap;
use core::fmt;

/// Footer capacity of a single step.
pub const MAX_CONTROLS_PER_STEP: usize = 4;

/// Hold duration used when a hold control does not configure its own.
pub const DEFAULT_HOLD_MS: u32 = 2_000;

/// Position of a step inside its [`StepGraph`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct StepIndex(u16);

impl StepIndex {
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

/// Opaque asset identifier handed to the platform media resolver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MediaRef<'a> {
    Video(&'a str),
    Image(&'a str),
}

impl<'a> MediaRef<'a> {
    pub const fn asset_id(self) -> &'a str {
        match self {
            Self::Video(id) | Self::Image(id) => id,
        }
    }
}

/// What a control looks like on the footer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Visual<'a> {
    Icon(&'a str),
    Text(&'a str),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action<'a> {
    Goto(&'a str),
    Back,
    None,
    /// Fired by the hold engine once a hold control reaches 100%; carries the
    /// control's configured action. Never valid inside a manifest.
    HoldComplete(&'a Action<'a>),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trigger {
    Tap,
    /// `None` falls back to the kiosk default hold duration.
    Hold { duration_ms: Option<u32> },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Control<'a> {
    pub visual: Visual<'a>,
    pub trigger: Trigger,
    pub action: Action<'a>,
}

impl<'a> Control<'a> {
    pub const fn tap(visual: Visual<'a>, action: Action<'a>) -> Self {
        Self {
            visual,
            trigger: Trigger::Tap,
            action,
        }
    }

    /// Hold control using the default duration; completion runs `action`.
    pub const fn hold(visual: Visual<'a>, action: Action<'a>) -> Self {
        Self {
            visual,
            trigger: Trigger::Hold { duration_ms: None },
            action,
        }
    }

    pub const fn hold_for(visual: Visual<'a>, duration_ms: u32, action: Action<'a>) -> Self {
        Self {
            visual,
            trigger: Trigger::Hold {
                duration_ms: Some(duration_ms),
            },
            action,
        }
    }

    pub const fn is_hold(&self) -> bool {
        matches!(self.trigger, Trigger::Hold { .. })
    }

    pub fn hold_duration_ms(&self, default_ms: u32) -> Option<u32> {
        match self.trigger {
            Trigger::Tap => None,
            Trigger::Hold { duration_ms } => Some(duration_ms.unwrap_or(default_ms)),
        }
    }
}

/// One tappable half of a choice step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChoiceSide<'a> {
    pub media: MediaRef<'a>,
    pub label: &'a str,
    pub action: Action<'a>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepKind<'a> {
    Linear {
        media: MediaRef<'a>,
    },
    Choice {
        left: ChoiceSide<'a>,
        right: ChoiceSide<'a>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Step<'a> {
    pub id: &'a str,
    /// Shown in the top-right corner.
    pub label: &'a str,
    pub kind: StepKind<'a>,
    pub controls: &'a [Control<'a>],
}

impl<'a> Step<'a> {
    pub fn control(&self, position: usize) -> Option<&'a Control<'a>> {
        self.controls.get(position)
    }

    pub const fn is_choice(&self) -> bool {
        matches!(self.kind, StepKind::Choice { .. })
    }
}

/// Manifest problems detected while building a [`StepGraph`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphError<'a> {
    Empty,
    TooManySteps(usize),
    DuplicateStep(&'a str),
    UnknownStep(&'a str),
    MissingStart(&'a str),
    UnknownTarget {
        step: &'a str,
        target: &'a str,
    },
    ImplicitActionInManifest {
        step: &'a str,
    },
    ZeroHoldDuration {
        step: &'a str,
        position: usize,
    },
    TooManyControls {
        step: &'a str,
        count: usize,
    },
}

impl fmt::Display for GraphError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "step graph has no steps"),
            Self::TooManySteps(count) => write!(f, "step graph has too many steps ({count})"),
            Self::DuplicateStep(id) => write!(f, "duplicate step id {id:?}"),
            Self::UnknownStep(id) => write!(f, "unknown step id {id:?}"),
            Self::MissingStart(id) => write!(f, "start step {id:?} is not in the graph"),
            Self::UnknownTarget { step, target } => {
                write!(f, "step {step:?} navigates to unknown step {target:?}")
            }
            Self::ImplicitActionInManifest { step } => {
                write!(f, "step {step:?} configures a hold-complete action directly")
            }
            Self::ZeroHoldDuration { step, position } => {
                write!(f, "step {step:?} control {position} has a zero hold duration")
            }
            Self::TooManyControls { step, count } => write!(
                f,
                "step {step:?} has {count} controls (max {MAX_CONTROLS_PER_STEP})"
            ),
        }
    }
}

/// Immutable id-indexed lookup table over a step manifest.
#[derive(Clone, Debug)]
pub struct StepGraph<'a> {
    steps: &'a [Step<'a>],
    index: BTreeMap<&'a str, StepIndex>,
    start: StepIndex,
}

impl<'a> StepGraph<'a> {
    pub fn new(steps: &'a [Step<'a>], start_id: &'a str) -> Result<Self, GraphError<'a>> {
        if steps.is_empty() {
            return Err(GraphError::Empty);
        }
        if steps.len() > u16::MAX as usize {
            return Err(GraphError::TooManySteps(steps.len()));
        }

        let mut index = BTreeMap::new();
        for (position, step) in steps.iter().enumerate() {
            if index
                .insert(step.id, StepIndex(position as u16))
                .is_some()
            {
                return Err(GraphError::DuplicateStep(step.id));
            }
        }

        let Some(&start) = index.get(start_id) else {
            return Err(GraphError::MissingStart(start_id));
        };

        let graph = Self {
            steps,
            index,
            start,
        };
        for step in steps {
            graph.validate_step(step)?;
        }

        Ok(graph)
    }

    fn validate_step(&self, step: &'a Step<'a>) -> Result<(), GraphError<'a>> {
        if step.controls.len() > MAX_CONTROLS_PER_STEP {
            return Err(GraphError::TooManyControls {
                step: step.id,
                count: step.controls.len(),
            });
        }

        for (position, control) in step.controls.iter().enumerate() {
            if control.trigger == (Trigger::Hold { duration_ms: Some(0) }) {
                return Err(GraphError::ZeroHoldDuration {
                    step: step.id,
                    position,
                });
            }
            self.validate_action(step, &control.action)?;
        }

        if let StepKind::Choice { left, right } = &step.kind {
            self.validate_action(step, &left.action)?;
            self.validate_action(step, &right.action)?;
        }

        Ok(())
    }

    fn validate_action(&self, step: &'a Step<'a>, action: &Action<'a>) -> Result<(), GraphError<'a>> {
        match *action {
            Action::Goto(target) if !self.index.contains_key(target) => {
                Err(GraphError::UnknownTarget {
                    step: step.id,
                    target,
                })
            }
            Action::HoldComplete(_) => Err(GraphError::ImplicitActionInManifest { step: step.id }),
            Action::Goto(_) | Action::Back | Action::None => Ok(()),
        }
    }

    pub fn get(&self, id: &'a str) -> Result<&'a Step<'a>, GraphError<'a>> {
        self.lookup(id)
            .map(|index| self.step(index))
            .ok_or(GraphError::UnknownStep(id))
    }

    pub fn lookup(&self, id: &str) -> Option<StepIndex> {
        self.index.get(id).copied()
    }

    /// Step at `index`. Indices are only minted by this graph.
    pub fn step(&self, index: StepIndex) -> &'a Step<'a> {
        &self.steps[index.get()]
    }

    pub fn start(&self) -> &'a Step<'a> {
        self.step(self.start)
    }

    pub const fn start_index(&self) -> StepIndex {
        self.start
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
