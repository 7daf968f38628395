//! App-level view models and animation metadata.

use crate::{
    gate::ControlGate,
    graph::{MediaRef, Visual},
};

pub const SCREENSAVER_HINT: &str = "TAP TO BEGIN";
pub const CHOICE_HINT: &str = "TAP TO SELECT";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    /// Step change or screensaver cover; eases out.
    Fade,
    /// Just-unlocked control; brightens to full at mid-point and falls back.
    Pulse,
}

impl AnimationKind {
    /// Drawn intensity for a linear `progress_pct`.
    pub const fn level(self, progress_pct: u8) -> u8 {
        let p = if progress_pct > 100 { 100 } else { progress_pct as u16 };
        let level = match self {
            Self::Fade => 100 - (100 - p) * (100 - p) / 100,
            Self::Pulse if p <= 50 => p * 2,
            Self::Pulse => (100 - p) * 2,
        };
        level as u8
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// Time through the animation, 0..=100.
    pub progress_pct: u8,
    /// Eased intensity to draw, 0..=100.
    pub level_pct: u8,
}

/// A running animation. It ends on its own once `duration_ms` has passed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub started_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, started_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            started_ms,
            duration_ms,
        }
    }

    /// `None` once the animation has finished.
    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let elapsed = now_ms.saturating_sub(self.started_ms);
        let duration = u64::from(self.duration_ms.max(1));
        (elapsed < duration).then(|| {
            let progress_pct = (elapsed * 100 / duration) as u8;
            AnimationFrame {
                kind: self.kind,
                progress_pct,
                level_pct: self.kind.level(progress_pct),
            }
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ControlKind {
    Tap,
    Hold,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControlView<'a> {
    pub visual: Visual<'a>,
    pub kind: ControlKind,
    pub gate: ControlGate,
    /// Hold fill, 0..=100. Zero for taps and idle holds.
    pub hold_pct: u8,
    /// Just-unlocked highlight; `Some` frame while the pulse is running.
    pub flash: Option<AnimationFrame>,
    pub flashed: bool,
}

impl Default for ControlView<'_> {
    fn default() -> Self {
        Self {
            visual: Visual::Text(""),
            kind: ControlKind::Tap,
            gate: ControlGate::Open,
            hold_pct: 0,
            flash: None,
            flashed: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChoiceView<'a> {
    pub media: MediaRef<'a>,
    pub label: &'a str,
    pub hint: &'a str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepMedia<'a> {
    /// Looping video filling the main area.
    Looping(MediaRef<'a>),
    Split {
        left: ChoiceView<'a>,
        right: ChoiceView<'a>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FooterView<'a> {
    pub time: &'a str,
    pub date: &'a str,
}

/// App-level view model consumed by the platform renderer.
#[derive(Debug)]
pub enum Screen<'a> {
    Step {
        title: &'a str,
        step_label: &'a str,
        media: StepMedia<'a>,
        controls: &'a [ControlView<'a>],
        footer: FooterView<'a>,
        animation: Option<AnimationFrame>,
    },
    Screensaver {
        door_label: &'a str,
        hint: &'a str,
        footer: FooterView<'a>,
        animation: Option<AnimationFrame>,
    },
}

/// Turns a configured asset id into something the platform can display. The
/// core never inspects media itself.
pub trait MediaResolver {
    type Output;

    fn resolve(&mut self, media: MediaRef<'_>) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_peaks_halfway_through() {
        let pulse = AnimationSpec::new(AnimationKind::Pulse, 1_000, 600);
        assert_eq!(
            pulse.frame(1_150),
            Some(AnimationFrame {
                kind: AnimationKind::Pulse,
                progress_pct: 25,
                level_pct: 50,
            })
        );
        assert_eq!(pulse.frame(1_300).map(|frame| frame.level_pct), Some(100));
        assert_eq!(pulse.frame(1_450).map(|frame| frame.level_pct), Some(50));
        assert_eq!(pulse.frame(1_600), None);
    }

    #[test]
    fn fade_eases_out() {
        assert_eq!(AnimationKind::Fade.level(0), 0);
        assert_eq!(AnimationKind::Fade.level(50), 75);
        assert_eq!(AnimationKind::Fade.level(100), 100);

        let fade = AnimationSpec::new(AnimationKind::Fade, 0, 200);
        assert_eq!(fade.frame(100).map(|frame| frame.level_pct), Some(75));
        assert_eq!(fade.frame(200), None);
    }
}
