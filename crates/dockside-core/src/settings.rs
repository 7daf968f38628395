//! Deployment settings for one kiosk.

use crate::{
    graph::DEFAULT_HOLD_MS,
    idle::{DEFAULT_IDLE_TIMEOUT_MS, DismissPolicy},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KioskConfig<'a> {
    pub title: &'a str,
    /// Shown on the screensaver, e.g. "Door 2112".
    pub door_label: &'a str,
    pub idle_timeout_ms: u64,
    pub dismiss_policy: DismissPolicy,
    /// Used by hold controls that do not set their own duration.
    pub default_hold_ms: u32,
}

impl Default for KioskConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dock Leveler",
            door_label: "Door",
            idle_timeout_ms: DEFAULT_IDLE_TIMEOUT_MS,
            dismiss_policy: DismissPolicy::ResetToHome,
            default_hold_ms: DEFAULT_HOLD_MS,
        }
    }
}

impl<'a> KioskConfig<'a> {
    pub const fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub const fn with_door_label(mut self, door_label: &'a str) -> Self {
        self.door_label = door_label;
        self
    }

    pub const fn with_idle_timeout_ms(mut self, idle_timeout_ms: u64) -> Self {
        self.idle_timeout_ms = idle_timeout_ms;
        self
    }

    /// Overrides the default [`DismissPolicy::ResetToHome`].
    pub const fn with_dismiss_policy(mut self, dismiss_policy: DismissPolicy) -> Self {
        self.dismiss_policy = dismiss_policy;
        self
    }

    pub const fn with_default_hold_ms(mut self, default_hold_ms: u32) -> Self {
        self.default_hold_ms = default_hold_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reset_to_home_after_two_idle_minutes() {
        let config = KioskConfig::default();
        assert_eq!(config.dismiss_policy, DismissPolicy::ResetToHome);
        assert_eq!(config.idle_timeout_ms, 120_000);
        assert_eq!(config.default_hold_ms, 2_000);
    }

    #[test]
    fn resume_is_an_explicit_override() {
        let config = KioskConfig::default()
            .with_door_label("Door 2112")
            .with_dismiss_policy(DismissPolicy::Resume);
        assert_eq!(config.dismiss_policy, DismissPolicy::Resume);
        assert_eq!(config.door_label, "Door 2112");
        assert_eq!(config.title, "Dock Leveler");
    }
}
