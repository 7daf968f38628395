//! Input abstraction layer.

pub mod queue;

/// Where on the kiosk a pointer event landed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Target {
    /// Footer control by position in the current step.
    Control(u8),
    ChoiceLeft,
    ChoiceRight,
    /// The full-screen screensaver cover.
    Overlay,
}

/// Discrete gestures delivered by the platform.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Press(Target),
    Release(Target),
    /// Pointer slid off the target without lifting.
    Leave(Target),
    /// Platform interruption (incoming notification, focus loss).
    Cancel,
    /// Completed click on a target.
    Tap(Target),
    Key,
}

impl InputEvent {
    /// Whether the event counts as activity for the idle timer.
    pub const fn is_activity(self) -> bool {
        matches!(self, Self::Press(_) | Self::Tap(_) | Self::Key)
    }
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
