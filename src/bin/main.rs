//! Host replay of the dock kiosk: reads a timed input script on stdin and
//! prints every frame the kiosk asks to render.

use std::io::{self, Read};

use anyhow::{Context, Result, anyhow};
use dockside_core::{
    app::{KioskApp, TickResult},
    idle::{DEFAULT_IDLE_TIMEOUT_MS, DismissPolicy},
    input::queue::QueuedInput,
    sequence::dock_sequence,
    settings::KioskConfig,
};
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use script::{ScriptAction, ScriptEvent};
use text_render::TextRenderer;
use wall_clock::LocalClock;

#[path = "main/script.rs"]
mod script;
#[path = "main/text_render.rs"]
mod text_render;
#[path = "main/wall_clock.rs"]
mod wall_clock;

const FRAME_MS: u64 = 16;
/// Frames rendered after the last script line so trailing animations settle.
const TAIL_FRAMES: u64 = 40;
const MEDIA_ROOT: &str = "media";

const DOOR_LABEL: Option<&str> = option_env!("DOCKSIDE_DOOR_LABEL");
const IDLE_TIMEOUT_MS: Option<&str> = option_env!("DOCKSIDE_IDLE_TIMEOUT_MS");
const DISMISS_POLICY: Option<&str> = option_env!("DOCKSIDE_DISMISS_POLICY");

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("reading input script from stdin")?;
    let events = script::parse(&source)?;

    let graph = dock_sequence().map_err(|err| anyhow!("invalid dock manifest: {err}"))?;
    let steps = graph.len();
    let mut app = KioskApp::new(graph, QueuedInput::new(), LocalClock, kiosk_config(), 0);

    let config = app.config();
    info!(
        "dockside: {} steps from {:?}, door={:?}, idle_timeout_ms={}, policy={:?}, {} script events",
        steps,
        app.current_step().id,
        config.door_label,
        config.idle_timeout_ms,
        config.dismiss_policy,
        events.len()
    );

    replay(&mut app, &events);
    app.shutdown();
    Ok(())
}

fn kiosk_config() -> KioskConfig<'static> {
    let mut config = KioskConfig::default();

    if let Some(label) = DOOR_LABEL {
        config = config.with_door_label(label);
    }

    if let Some(raw) = IDLE_TIMEOUT_MS {
        match raw.trim().parse::<u64>() {
            Ok(ms) if ms > 0 => config = config.with_idle_timeout_ms(ms),
            _ => warn!(
                "dockside: DOCKSIDE_IDLE_TIMEOUT_MS={raw:?} is not a positive number, using {DEFAULT_IDLE_TIMEOUT_MS}"
            ),
        }
    }

    if let Some(raw) = DISMISS_POLICY {
        match DismissPolicy::parse(raw) {
            Some(policy) => config = config.with_dismiss_policy(policy),
            None => warn!(
                "dockside: DOCKSIDE_DISMISS_POLICY={raw:?} is not reset|resume, using {:?}",
                config.dismiss_policy
            ),
        }
    }

    config
}

fn replay(app: &mut KioskApp<'static, QueuedInput, LocalClock>, events: &[ScriptEvent]) {
    let end_ms = events
        .last()
        .map_or(0, |event| event.at_ms)
        .saturating_add(TAIL_FRAMES * FRAME_MS);
    let mut renderer = TextRenderer::new(MEDIA_ROOT);
    let mut frame = String::new();
    let mut pending = events.iter().peekable();
    let mut now_ms = 0u64;

    loop {
        while let Some(event) = pending.next_if(|event| event.at_ms <= now_ms) {
            if let ScriptAction::Input(input) = event.action {
                app.with_input_mut(|queue| queue.push(input));
            }
        }

        if app.tick(now_ms) == TickResult::RenderRequested {
            app.with_screen(now_ms, |screen| renderer.render(screen, &mut frame));
            println!("{now_ms:>8} {frame}");
        }

        if now_ms >= end_ms {
            break;
        }
        now_ms = now_ms.saturating_add(FRAME_MS).min(end_ms);
    }
}
