//! Debug module: feature gated periodic simulation summary.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::app::state::SceneState;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use logging::{debug_logging_system, DebugLogState};

        app.init_resource::<DebugLogState>().add_systems(
            Update,
            debug_logging_system.run_if(in_state(SceneState::Running)),
        );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
