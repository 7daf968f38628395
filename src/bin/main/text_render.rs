//! One-line text rendering of kiosk screens for the host replay.

use std::fmt::Write;

use dockside_core::{
    gate::ControlGate,
    graph::{MediaRef, Visual},
    render::{
        AnimationFrame, AnimationKind, ChoiceView, ControlKind, ControlView, FooterView,
        MediaResolver, Screen, StepMedia,
    },
};

/// Maps asset ids onto paths under a media root.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    media_root: String,
}

impl TextRenderer {
    pub fn new(media_root: impl Into<String>) -> Self {
        Self {
            media_root: media_root.into(),
        }
    }

    pub fn render(&mut self, screen: Screen<'_>, frame: &mut String) {
        frame.clear();
        match screen {
            Screen::Step {
                title,
                step_label,
                media,
                controls,
                footer,
                animation,
            } => {
                let _ = write!(frame, "[{title} | {step_label}]");
                push_animation(frame, animation);
                match media {
                    StepMedia::Looping(media) => {
                        let media = self.resolve(media);
                        let _ = write!(frame, " loop {media}");
                    }
                    StepMedia::Split { left, right } => {
                        self.push_choice(frame, "L", left);
                        self.push_choice(frame, "R", right);
                    }
                }
                frame.push_str(" |");
                for (position, control) in controls.iter().enumerate() {
                    push_control(frame, position, control);
                }
                push_footer(frame, footer);
            }
            Screen::Screensaver {
                door_label,
                hint,
                footer,
                animation,
            } => {
                let _ = write!(frame, "[screensaver] {door_label} - {hint}");
                push_animation(frame, animation);
                push_footer(frame, footer);
            }
        }
    }

    fn push_choice(&mut self, frame: &mut String, side: &str, choice: ChoiceView<'_>) {
        let media = self.resolve(choice.media);
        let _ = write!(
            frame,
            " {side}:{:?} {media} ({})",
            choice.label, choice.hint
        );
    }
}

impl MediaResolver for TextRenderer {
    type Output = String;

    fn resolve(&mut self, media: MediaRef<'_>) -> Self::Output {
        let (dir, ext) = match media {
            MediaRef::Video(_) => ("videos", "mp4"),
            MediaRef::Image(_) => ("images", "png"),
        };
        format!("{}/{dir}/{}.{ext}", self.media_root, media.asset_id())
    }
}

fn push_control(frame: &mut String, position: usize, control: &ControlView<'_>) {
    let visual = match control.visual {
        Visual::Icon(name) => name,
        Visual::Text(text) => text,
    };
    let state = match (control.kind, control.gate) {
        (_, ControlGate::Locked) => "locked".to_owned(),
        (ControlKind::Hold, ControlGate::HoldConfirmed) => "done".to_owned(),
        (ControlKind::Hold, _) => format!("{}%", control.hold_pct),
        (ControlKind::Tap, _) => "open".to_owned(),
    };
    let _ = write!(frame, " {position}:{visual}<{state}>");
    if control.flashed {
        frame.push('*');
    }
}

fn push_animation(frame: &mut String, animation: Option<AnimationFrame>) {
    if let Some(animation) = animation {
        let kind = match animation.kind {
            AnimationKind::Fade => "fade",
            AnimationKind::Pulse => "pulse",
        };
        let _ = write!(frame, " ~{kind} {}%", animation.level_pct);
    }
}

fn push_footer(frame: &mut String, footer: FooterView<'_>) {
    let _ = write!(frame, " | {} {}", footer.time, footer.date);
}
