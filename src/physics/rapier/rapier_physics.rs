use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::LabConfig;

const LOG_TARGET: &str = "physics";

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier for the lab

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let (ppm, debug_render) = app
            .world()
            .get_resource::<LabConfig>()
            .map(|cfg| (cfg.physics.pixels_per_meter, cfg.rapier_debug))
            .unwrap_or((100.0, false));
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(ppm))
            .add_systems(Startup, configure_pipeline);
        if debug_render {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

/// Gravity from config, and no stepping until a scene is mounted.
fn configure_pipeline(mut rapier_cfg: Query<&mut RapierConfiguration>, cfg: Res<LabConfig>) {
    // Viewport gravity points down (+y); world space is y-up.
    for mut rc in &mut rapier_cfg {
        rc.gravity = Vect::new(0.0, -cfg.physics.gravity);
        rc.physics_pipeline_active = false;
    }
    info!(
        target: LOG_TARGET,
        "gravity set to {} units/s^2 (down), pipeline paused until mount", cfg.physics.gravity
    );
}

/// Runner start: physics steps are scheduled again.
pub fn resume_physics(mut rapier_cfg: Query<&mut RapierConfiguration>) {
    for mut rc in &mut rapier_cfg {
        rc.physics_pipeline_active = true;
    }
}

/// Runner stop: no further steps are scheduled; in-flight state is left as is.
pub fn pause_physics(mut rapier_cfg: Query<&mut RapierConfiguration>) {
    for mut rc in &mut rapier_cfg {
        rc.physics_pipeline_active = false;
    }
}
