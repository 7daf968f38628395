#![cfg_attr(not(test), no_std)]

//! Guided-sequence kiosk engine: step graph, navigation history, press-and-hold
//! confirmation, lock gating and the inactivity screensaver.
//!
//! Platforms feed [`input::InputEvent`]s and a monotonic `now_ms` into
//! [`app::KioskApp::tick`] and draw whatever [`render::Screen`] it hands back.
//!
//! Dismissing the screensaver resets the session to the start step with an
//! empty history. Deployments that want the operator's place kept opt in with
//! [`idle::DismissPolicy::Resume`] through
//! [`settings::KioskConfig::with_dismiss_policy`].

extern crate alloc;

pub mod app;
pub mod clock;
pub mod gate;
pub mod graph;
pub mod history;
pub mod hold;
pub mod idle;
pub mod input;
pub mod reducer;
pub mod render;
pub mod sequence;
pub mod session;
pub mod settings;
pub mod timer;
