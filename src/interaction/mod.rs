//! Pointer input -> drag constraint, plus the two corrections the stock canvas pointer needs:
//! wheel passthrough and window-level release.
pub mod drag;
pub mod pointer;

use bevy::prelude::*;

use crate::app::listeners::{host_listener_active, HostEventKind};
use crate::core::config::LabConfig;
use crate::core::system::system_order::{PointerInputSet, PrePhysicsSet};
use crate::core::viewport::Viewport;
use drag::{apply_drag_constraint, update_drag_constraint, DragConstraint};
use pointer::global_release::{emit_global_release, force_release_on_global_release};
use pointer::tracker::track_pointer;
use pointer::{GlobalPointerRelease, PointerStream, PointerTracker};

const LOG_TARGET: &str = "interaction";

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<GlobalPointerRelease>()
            .add_systems(
                Update,
                (
                    track_pointer,
                    emit_global_release.run_if(host_listener_active(HostEventKind::PointerRelease)),
                    force_release_on_global_release,
                    update_drag_constraint,
                )
                    .chain()
                    .in_set(PointerInputSet),
            )
            .add_systems(Update, apply_drag_constraint.in_set(PrePhysicsSet));
    }
}

/// Mount step: pointer tracker on the surface (wheel dropped), drag constraint if enabled.
pub fn attach_pointer_controls(
    mut commands: Commands,
    viewport: Res<Viewport>,
    cfg: Res<LabConfig>,
    mut windows: Query<&mut Window>,
) {
    let mut tracker = PointerTracker::bind(viewport.surface);
    tracker.unsubscribe(PointerStream::Wheel);
    if let Ok(mut window) = windows.get_mut(viewport.surface) {
        // let the host page scroll over the surface
        window.prevent_default_event_handling = false;
    }
    commands.insert_resource(tracker);
    if cfg.drag.enabled {
        commands.insert_resource(DragConstraint::from_config(&cfg.drag, &cfg.physics));
    }
    debug!(
        target: LOG_TARGET,
        "pointer controls attached (drag {})",
        if cfg.drag.enabled { "on" } else { "off" }
    );
}

pub fn detach_pointer_controls(mut commands: Commands) {
    commands.remove_resource::<DragConstraint>();
    commands.remove_resource::<PointerTracker>();
}
