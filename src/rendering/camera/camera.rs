use bevy::prelude::*;

use crate::core::components::SceneEntity;
use crate::core::viewport::Viewport;

/// The one 2D camera of a mounted scene.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneCamera;

fn surface_size(windows: &Query<&Window>, viewport: &Viewport) -> Vec2 {
    windows
        .get(viewport.surface)
        .map(|w| Vec2::new(w.width(), w.height()))
        .unwrap_or(Vec2::new(viewport.width, viewport.height))
}

pub fn spawn_scene_camera(mut commands: Commands, viewport: Res<Viewport>, windows: Query<&Window>) {
    let size = surface_size(&windows, &viewport);
    // Bevy 0.16+: spawn Camera2d component directly; Required Components supply defaults.
    commands.spawn((
        Name::new("SceneCamera"),
        SceneEntity,
        SceneCamera,
        Camera2d,
        Transform::from_translation(Viewport::camera_translation(size.x, size.y)),
    ));
}

/// Keeps the surface's top-left corner at world origin while the window changes size.
pub fn align_scene_camera(
    viewport: Res<Viewport>,
    windows: Query<&Window>,
    mut cameras: Query<&mut Transform, With<SceneCamera>>,
) {
    let size = surface_size(&windows, &viewport);
    let target = Viewport::camera_translation(size.x, size.y);
    for mut tf in &mut cameras {
        if tf.translation != target {
            tf.translation = target;
        }
    }
}
