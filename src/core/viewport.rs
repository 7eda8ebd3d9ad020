//! Viewport space <-> Bevy world space.
//!
//! Viewport space is what the scene table, the walls and pointer samples speak: origin at the
//! top-left corner of the render surface, x to the right, y downwards, angles clockwise-positive.
//! World space is Bevy's y-up space. The camera is pinned so the surface's top-left corner sits
//! at the world origin, which makes the mapping a plain y flip independent of the surface width.
use bevy::prelude::*;

/// Current render-surface dimensions in viewport units.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Entity of the window the scene renders into.
    pub surface: Entity,
    /// Current container width (tracks window resizes).
    pub width: f32,
    /// Fixed playground height.
    pub height: f32,
}

impl Viewport {
    pub fn new(surface: Entity, width: f32, height: f32) -> Self {
        Self {
            surface,
            width,
            height,
        }
    }

    #[inline]
    pub fn to_world(p: Vec2) -> Vec2 {
        Vec2::new(p.x, -p.y)
    }

    #[inline]
    pub fn to_viewport(p: Vec2) -> Vec2 {
        Vec2::new(p.x, -p.y)
    }

    /// World-space rotation for a clockwise viewport angle.
    #[inline]
    pub fn rotation_to_world(angle: f32) -> Quat {
        Quat::from_rotation_z(-angle)
    }

    /// Clockwise viewport angle of a world rotation.
    #[inline]
    pub fn angle_from_world(rotation: Quat) -> f32 {
        let (_, _, z) = rotation.to_euler(EulerRot::XYZ);
        -z
    }

    /// Camera translation that keeps the surface's top-left corner at world origin.
    pub fn camera_translation(window_width: f32, window_height: f32) -> Vec3 {
        Vec3::new(window_width * 0.5, -window_height * 0.5, 0.0)
    }
}
