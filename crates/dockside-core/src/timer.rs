//! One-shot deadlines checked against the caller's monotonic clock.
//!
//! Nothing here sleeps or spawns. The owner polls with `now_ms` on each tick;
//! a cancelled deadline can never fire afterwards because polling only looks at
//! the armed due time.

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Deadline {
    due_ms: Option<u64>,
}

impl Deadline {
    pub const fn disarmed() -> Self {
        Self { due_ms: None }
    }

    /// (Re)arms the deadline `after_ms` from `now_ms`, replacing any previous one.
    pub fn arm(&mut self, now_ms: u64, after_ms: u64) {
        self.due_ms = Some(now_ms.saturating_add(after_ms));
    }

    /// Returns `true` when a pending deadline was actually cancelled.
    pub fn cancel(&mut self) -> bool {
        self.due_ms.take().is_some()
    }

    pub const fn is_armed(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.due_ms.map(|due| due.saturating_sub(now_ms))
    }

    /// Fires at most once per arming: returns `true` and disarms when due.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}
