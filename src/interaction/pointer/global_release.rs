//! Window-level release handling.
//!
//! The surface-scoped tracker never sees a button released outside the surface, which would
//! leave the drag constraint attached ("stuck drag"). This module listens to releases from
//! every window (plus focus loss) and forces the tracker back to a released state.
use bevy::input::mouse::MouseButtonInput;
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::WindowFocused;

use super::tracker::PointerTracker;

const LOG_TARGET: &str = "pointer";

/// A pointer release observed at window level, wherever the pointer was.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalPointerRelease;

/// Turns host-level release signals into [`GlobalPointerRelease`].
pub fn emit_global_release(
    mut buttons: EventReader<MouseButtonInput>,
    mut touches: EventReader<TouchInput>,
    mut focus: EventReader<WindowFocused>,
    mut out: EventWriter<GlobalPointerRelease>,
) {
    let mouse_up = buttons
        .read()
        .filter(|ev| ev.button == MouseButton::Left && ev.state == ButtonState::Released)
        .count();
    let touch_end = touches
        .read()
        .filter(|ev| matches!(ev.phase, TouchPhase::Ended | TouchPhase::Canceled))
        .count();
    let blurred = focus.read().filter(|ev| !ev.focused).count();
    if mouse_up + touch_end + blurred > 0 {
        out.write(GlobalPointerRelease);
    }
}

/// Forces the tracker to "released" and drops its buffered down/up samples.
pub fn force_release_on_global_release(
    mut events: EventReader<GlobalPointerRelease>,
    tracker: Option<ResMut<PointerTracker>>,
) {
    if events.read().count() == 0 {
        return;
    }
    let Some(mut tracker) = tracker else {
        return;
    };
    if tracker.force_release() {
        debug!(target: LOG_TARGET, "global release: pointer state reset");
    }
}
