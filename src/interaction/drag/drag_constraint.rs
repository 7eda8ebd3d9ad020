use bevy::prelude::*;
use bevy_rapier2d::prelude::{Collider, Velocity};

use crate::core::config::config::{DragConfig, PhysicsConfig};
use crate::core::viewport::Viewport;
use crate::interaction::pointer::tracker::{PointerButton, PointerTracker};
use crate::physics::factory::SceneBodies;

const LOG_TARGET: &str = "drag";

/// Spring-like link between the pointer and one grabbed body. Never drawn.
#[derive(Resource, Debug, Clone)]
pub struct DragConstraint {
    pub stiffness: f32,
    pub max_speed: f32,
    /// Step the spring is tuned against (one physics tick).
    pub dt: f32,
    body: Option<Entity>,
    /// Grab point in body space (world axes, body centre at origin).
    local_anchor: Vec2,
}

impl DragConstraint {
    pub fn from_config(drag: &DragConfig, physics: &PhysicsConfig) -> Self {
        Self {
            stiffness: drag.stiffness.clamp(0.0, 1.0),
            max_speed: drag.max_speed.max(0.0),
            dt: 1.0 / physics.timestep_hz.max(1.0),
            body: None,
            local_anchor: Vec2::ZERO,
        }
    }

    pub fn body(&self) -> Option<Entity> {
        self.body
    }

    pub fn local_anchor(&self) -> Vec2 {
        self.local_anchor
    }

    pub fn attach(&mut self, body: Entity, local_anchor: Vec2) {
        self.body = Some(body);
        self.local_anchor = local_anchor;
    }

    /// Drops the grabbed body, if any, and returns it.
    pub fn release(&mut self) -> Option<Entity> {
        self.local_anchor = Vec2::ZERO;
        self.body.take()
    }

    /// Velocity that moves the anchor `stiffness` of the way to the pointer within one step.
    pub fn pull_velocity(&self, anchor: Vec2, pointer: Vec2) -> Vec2 {
        ((pointer - anchor) * self.stiffness / self.dt).clamp_length_max(self.max_speed)
    }
}

/// World point expressed in the local frame of a body transform.
fn to_local(tf: &Transform, world: Vec2) -> Vec2 {
    (tf.rotation.inverse() * (world.extend(0.0) - tf.translation)).truncate()
}

/// First body in scene order whose collider covers `pointer` (world space), with the grab
/// point in body space.
pub fn pick_body(
    bodies: &SceneBodies,
    pointer: Vec2,
    colliders: &Query<(&Transform, &Collider)>,
) -> Option<(Entity, Vec2)> {
    bodies.0.iter().find_map(|&entity| {
        let (tf, collider) = colliders.get(entity).ok()?;
        let angle = tf.rotation.to_euler(EulerRot::ZYX).0;
        collider
            .contains_point(tf.translation.truncate(), angle, pointer)
            .then(|| (entity, to_local(tf, pointer)))
    })
}

/// Grab on a fresh primary down, let go as soon as the primary button is no longer held.
/// Consumes the tracker's buffered samples either way.
pub fn update_drag_constraint(
    tracker: Option<ResMut<PointerTracker>>,
    drag: Option<ResMut<DragConstraint>>,
    bodies: Option<Res<SceneBodies>>,
    colliders: Query<(&Transform, &Collider)>,
) {
    let (Some(mut tracker), Some(mut drag)) = (tracker, drag) else {
        return;
    };
    if tracker.button() != PointerButton::Primary {
        if let Some(body) = drag.release() {
            debug!(target: LOG_TARGET, "released {body:?}");
        }
    } else if let Some(down) = tracker.take_down() {
        if drag.body().is_none() {
            if let Some((body, anchor)) = bodies
                .as_deref()
                .and_then(|b| pick_body(b, Viewport::to_world(down), &colliders))
            {
                drag.attach(body, anchor);
                debug!(target: LOG_TARGET, "grabbed {body:?} at local {anchor}");
            }
        }
    }
    tracker.clear_source_events();
}

/// Drives the grabbed body's anchor towards the pointer before the physics step.
pub fn apply_drag_constraint(
    tracker: Option<Res<PointerTracker>>,
    drag: Option<ResMut<DragConstraint>>,
    mut bodies: Query<(&Transform, &mut Velocity)>,
) {
    let (Some(tracker), Some(mut drag)) = (tracker, drag) else {
        return;
    };
    let Some(entity) = drag.body() else {
        return;
    };
    let Ok((tf, mut vel)) = bodies.get_mut(entity) else {
        // body went away under the pointer
        drag.release();
        return;
    };
    let Some(pointer) = tracker.position().map(Viewport::to_world) else {
        return;
    };
    let anchor = tf.transform_point(drag.local_anchor().extend(0.0)).truncate();
    vel.linvel = drag.pull_velocity(anchor, pointer);
    vel.angvel *= 1.0 - drag.stiffness;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint() -> DragConstraint {
        DragConstraint::from_config(&DragConfig::default(), &PhysicsConfig::default())
    }

    #[test]
    fn pull_covers_stiffness_share_of_gap_per_step() {
        let d = constraint();
        let v = d.pull_velocity(Vec2::ZERO, Vec2::new(100.0, 0.0));
        assert!((v.x * d.dt - 20.0).abs() < 1e-3);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn pull_is_clamped() {
        let d = constraint();
        let v = d.pull_velocity(Vec2::ZERO, Vec2::new(1.0e7, 0.0));
        assert!((v.length() - d.max_speed).abs() < 1e-2);
    }

    #[test]
    fn rotated_body_local_point() {
        let tf = Transform::from_xyz(10.0, 0.0, 0.0)
            .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
        let local = to_local(&tf, Vec2::new(10.0, 5.0));
        assert!((local - Vec2::new(5.0, 0.0)).length() < 1e-4);
    }
}
