use bevy::prelude::*;

use super::lifecycle::ScenePlugin;
use crate::core::config::LabConfig;
use crate::debug::DebugPlugin;
use crate::physics::rapier::rapier_physics::PhysicsSetupPlugin;

/// Full playground: Rapier, the mount lifecycle and the optional debug summary.
/// Expects `LabConfig` to be inserted before it is added.
pub struct PhysicsLabPlugin;

impl Plugin for PhysicsLabPlugin {
    fn build(&self, app: &mut App) {
        let background = app
            .world()
            .get_resource::<LabConfig>()
            .map(|cfg| cfg.background.color())
            .unwrap_or(Color::WHITE);
        app.insert_resource(ClearColor(background))
            .add_plugins((PhysicsSetupPlugin, ScenePlugin, DebugPlugin));
    }
}
