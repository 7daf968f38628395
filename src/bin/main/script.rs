//! Timed input script replayed against the kiosk.
//!
//! One event per line, `#` starts a comment:
//!
//! ```text
//! 100   tap control:0
//! 300   press control:1
//! 3400  release control:1
//! 3500  tap right
//! 5000  cancel
//! 9000  key
//! 200000 idle
//! ```

use anyhow::{Context, Result, anyhow, bail};
use dockside_core::input::{InputEvent, Target};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScriptAction {
    Input(InputEvent),
    /// Nothing is delivered; the replay just runs until `at_ms`.
    Advance,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScriptEvent {
    pub at_ms: u64,
    pub action: ScriptAction,
}

pub fn parse(source: &str) -> Result<Vec<ScriptEvent>> {
    let mut events = Vec::new();
    let mut last_ms = 0u64;

    for (index, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let event = parse_line(line).with_context(|| format!("script line {}", index + 1))?;
        if event.at_ms < last_ms {
            bail!(
                "script line {}: time {}ms goes backwards (previous {}ms)",
                index + 1,
                event.at_ms,
                last_ms
            );
        }
        last_ms = event.at_ms;
        events.push(event);
    }

    Ok(events)
}

fn parse_line(line: &str) -> Result<ScriptEvent> {
    let mut words = line.split_whitespace();
    let at_ms = words
        .next()
        .ok_or_else(|| anyhow!("missing timestamp"))?
        .parse::<u64>()
        .context("timestamp is not a whole number of milliseconds")?;
    let verb = words.next().ok_or_else(|| anyhow!("missing event"))?;

    let action = match verb {
        "cancel" => ScriptAction::Input(InputEvent::Cancel),
        "key" => ScriptAction::Input(InputEvent::Key),
        "idle" => ScriptAction::Advance,
        "press" | "release" | "leave" | "tap" => {
            let target = parse_target(words.next().ok_or_else(|| anyhow!("missing target"))?)?;
            ScriptAction::Input(match verb {
                "press" => InputEvent::Press(target),
                "release" => InputEvent::Release(target),
                "leave" => InputEvent::Leave(target),
                _ => InputEvent::Tap(target),
            })
        }
        other => bail!("unknown event {other:?}"),
    };

    if let Some(extra) = words.next() {
        bail!("unexpected trailing {extra:?}");
    }

    Ok(ScriptEvent { at_ms, action })
}

fn parse_target(word: &str) -> Result<Target> {
    match word {
        "left" => Ok(Target::ChoiceLeft),
        "right" => Ok(Target::ChoiceRight),
        "overlay" => Ok(Target::Overlay),
        _ => {
            let position = word
                .strip_prefix("control:")
                .ok_or_else(|| anyhow!("unknown target {word:?}"))?;
            let position = position
                .parse::<u8>()
                .with_context(|| format!("bad control position {position:?}"))?;
            Ok(Target::Control(position))
        }
    }
}
