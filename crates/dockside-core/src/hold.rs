//! Press-and-hold confirmation, modelled on a dead-man control.
//!
//! At most one attempt is in flight engine-wide. The caller drives the engine
//! with `sample(now_ms)`; completion is reported exactly once per attempt and
//! carries the payload handed to `start`.

use log::debug;

use crate::session::ControlKey;

/// Render cadence for hold progress (~60 Hz).
pub const HOLD_SAMPLE_INTERVAL_MS: u64 = 16;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HoldProgress {
    pub key: ControlKey,
    /// 0..=100
    pub percent: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HoldSample<T> {
    Idle,
    Progress(HoldProgress),
    Completed { key: ControlKey, on_complete: T },
}

#[derive(Clone, Copy, Debug)]
struct HoldAttempt<T> {
    key: ControlKey,
    started_ms: u64,
    duration_ms: u32,
    percent: u8,
    on_complete: T,
}

#[derive(Clone, Copy, Debug)]
pub struct HoldEngine<T> {
    attempt: Option<HoldAttempt<T>>,
}

impl<T> Default for HoldEngine<T> {
    fn default() -> Self {
        Self { attempt: None }
    }
}

impl<T: Copy> HoldEngine<T> {
    pub const fn new() -> Self {
        Self { attempt: None }
    }

    /// Starts a new attempt from zero. Returns the key of an in-flight attempt
    /// that had to be cancelled to make room, if any.
    pub fn start(
        &mut self,
        key: ControlKey,
        duration_ms: u32,
        on_complete: T,
        now_ms: u64,
    ) -> Option<ControlKey> {
        let replaced = self.cancel();
        if let Some(previous) = replaced {
            debug!(
                "kiosk-hold: start {:?} cancelled in-flight hold {:?}",
                key, previous
            );
        }

        self.attempt = Some(HoldAttempt {
            key,
            started_ms: now_ms,
            duration_ms: duration_ms.max(1),
            percent: 0,
            on_complete,
        });
        replaced
    }

    /// Cancels whatever attempt is in flight. Idempotent.
    pub fn cancel(&mut self) -> Option<ControlKey> {
        self.attempt.take().map(|attempt| attempt.key)
    }

    /// Cancels the attempt only when it belongs to `key`. Releases aimed at a
    /// control that is not being held, or duplicate releases, are no-ops.
    pub fn release(&mut self, key: ControlKey) -> bool {
        if self.attempt.is_some_and(|attempt| attempt.key == key) {
            self.attempt = None;
            true
        } else {
            false
        }
    }

    pub fn is_active(&self) -> bool {
        self.attempt.is_some()
    }

    pub fn active_key(&self) -> Option<ControlKey> {
        self.attempt.map(|attempt| attempt.key)
    }

    pub fn progress(&self) -> Option<HoldProgress> {
        self.attempt.map(|attempt| HoldProgress {
            key: attempt.key,
            percent: attempt.percent,
        })
    }

    pub fn sample(&mut self, now_ms: u64) -> HoldSample<T> {
        let Some(attempt) = self.attempt.as_mut() else {
            return HoldSample::Idle;
        };

        let elapsed = now_ms.saturating_sub(attempt.started_ms);
        attempt.percent = hold_percent(elapsed, attempt.duration_ms).max(attempt.percent);

        if elapsed >= attempt.duration_ms as u64 {
            let key = attempt.key;
            let on_complete = attempt.on_complete;
            self.attempt = None;
            debug!("kiosk-hold: completed {:?} after {}ms", key, elapsed);
            return HoldSample::Completed { key, on_complete };
        }

        HoldSample::Progress(HoldProgress {
            key: attempt.key,
            percent: attempt.percent,
        })
    }
}

/// `clamp(0, 100, elapsed / duration * 100)`, reaching 100 only once
/// `elapsed >= duration`.
pub fn hold_percent(elapsed_ms: u64, duration_ms: u32) -> u8 {
    let duration = duration_ms.max(1) as u64;
    (elapsed_ms.saturating_mul(100) / duration).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::StepGraph;
    use crate::sequence::{DOCK_STEPS, START_STEP};
    use proptest::prelude::*;

    fn key(position: u8) -> ControlKey {
        let graph = StepGraph::new(DOCK_STEPS, START_STEP).unwrap();
        ControlKey::new(graph.lookup("restraint").unwrap(), position)
    }

    #[test]
    fn sample_at_zero_is_zero_percent() {
        let mut engine = HoldEngine::new();
        engine.start(key(1), 2_000, 'x', 500);
        assert_eq!(
            engine.sample(500),
            HoldSample::Progress(HoldProgress {
                key: key(1),
                percent: 0
            })
        );
    }

    #[test]
    fn completes_exactly_once_at_duration() {
        let mut engine = HoldEngine::new();
        engine.start(key(1), 2_000, 'x', 0);
        assert!(matches!(
            engine.sample(1_999),
            HoldSample::Progress(HoldProgress { percent: 99, .. })
        ));
        assert_eq!(
            engine.sample(2_000),
            HoldSample::Completed {
                key: key(1),
                on_complete: 'x'
            }
        );
        assert_eq!(engine.sample(2_016), HoldSample::Idle);
        assert_eq!(engine.progress(), None);
    }

    #[test]
    fn late_sample_still_completes() {
        let mut engine = HoldEngine::new();
        engine.start(key(1), 2_000, (), 0);
        assert!(matches!(
            engine.sample(9_000),
            HoldSample::Completed { .. }
        ));
    }

    #[test]
    fn release_before_duration_never_completes() {
        let mut engine = HoldEngine::new();
        engine.start(key(1), 2_000, (), 0);
        let _ = engine.sample(1_000);
        assert!(engine.release(key(1)));
        assert!(!engine.release(key(1)));
        assert_eq!(engine.cancel(), None);
        assert_eq!(engine.sample(5_000), HoldSample::Idle);
    }

    #[test]
    fn release_of_other_control_is_ignored() {
        let mut engine = HoldEngine::new();
        engine.start(key(1), 2_000, (), 0);
        assert!(!engine.release(key(2)));
        assert!(engine.is_active());
    }

    #[test]
    fn restart_begins_from_zero() {
        let mut engine = HoldEngine::new();
        engine.start(key(1), 1_000, (), 0);
        let _ = engine.sample(800);
        engine.cancel();
        engine.start(key(1), 1_000, (), 900);
        assert_eq!(engine.progress().map(|p| p.percent), Some(0));
        assert!(matches!(
            engine.sample(1_000),
            HoldSample::Progress(HoldProgress { percent: 10, .. })
        ));
    }

    #[test]
    fn start_replaces_in_flight_hold() {
        let mut engine = HoldEngine::new();
        engine.start(key(1), 1_000, 1u8, 0);
        assert_eq!(engine.start(key(2), 1_000, 2u8, 100), Some(key(1)));
        assert_eq!(engine.active_key(), Some(key(2)));
        assert_eq!(
            engine.sample(1_100),
            HoldSample::Completed {
                key: key(2),
                on_complete: 2
            }
        );
    }

    proptest! {
        #[test]
        fn progress_is_monotonic(
            duration in 1u32..10_000,
            mut times in proptest::collection::vec(0u64..20_000, 1..64),
        ) {
            times.sort_unstable();
            let mut engine = HoldEngine::new();
            engine.start(key(1), duration, (), 0);

            let mut last = 0u8;
            let mut completions = 0;
            for now in times {
                match engine.sample(now) {
                    HoldSample::Progress(progress) => {
                        prop_assert!(progress.percent >= last);
                        prop_assert!(progress.percent < 100);
                        last = progress.percent;
                    }
                    HoldSample::Completed { .. } => {
                        prop_assert!(now >= duration as u64);
                        completions += 1;
                    }
                    HoldSample::Idle => {}
                }
            }
            prop_assert!(completions <= 1);
        }
    }
}
