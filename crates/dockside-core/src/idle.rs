//! Inactivity screensaver.

use log::debug;

use crate::timer::Deadline;

pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = 120_000;

/// What dismissing the screensaver does to the session.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DismissPolicy {
    /// Reinitialise to `(start step, empty history)`.
    #[default]
    ResetToHome,
    /// Keep the step and history the operator left behind.
    Resume,
}

impl DismissPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "reset" | "reset-to-home" | "home" => Some(Self::ResetToHome),
            "resume" => Some(Self::Resume),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IdleController {
    timeout_ms: u64,
    policy: DismissPolicy,
    timer: Deadline,
    showing: bool,
}

impl IdleController {
    pub fn new(timeout_ms: u64, policy: DismissPolicy) -> Self {
        Self {
            timeout_ms: timeout_ms.max(1),
            policy,
            timer: Deadline::disarmed(),
            showing: false,
        }
    }

    /// Arms the timer for the first time.
    pub fn start(&mut self, now_ms: u64) {
        self.timer.arm(now_ms, self.timeout_ms);
    }

    /// Qualifying activity restarts the full timeout. While the cover is up
    /// the timer stays disarmed until dismissal.
    pub fn observe_input(&mut self, now_ms: u64) {
        if !self.showing {
            self.timer.arm(now_ms, self.timeout_ms);
        }
    }

    /// Returns `true` on the tick the screensaver goes up.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.showing || !self.timer.poll(now_ms) {
            return false;
        }
        self.showing = true;
        debug!("kiosk-idle: screensaver raised at {}ms", now_ms);
        true
    }

    /// Lowers the cover. Returns the policy to apply, or `None` when nothing
    /// was showing.
    pub fn dismiss(&mut self, now_ms: u64) -> Option<DismissPolicy> {
        if !self.showing {
            return None;
        }
        self.showing = false;
        self.timer.arm(now_ms, self.timeout_ms);
        debug!(
            "kiosk-idle: screensaver dismissed at {}ms policy={:?}",
            now_ms, self.policy
        );
        Some(self.policy)
    }

    /// Tears the timer down, e.g. when the kiosk shuts down.
    pub fn stop(&mut self) -> bool {
        self.timer.cancel()
    }

    pub const fn is_showing(&self) -> bool {
        self.showing
    }

    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.timer.remaining_ms(now_ms)
    }
}
