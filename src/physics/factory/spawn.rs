use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::body_factory::{build_body, BodyShape, BodySpec};
use super::geometry::to_world_ring;
use crate::core::components::{BodyLabel, LabBody, SceneEntity};
use crate::core::config::config::PhysicsConfig;
use crate::core::config::LabConfig;
use crate::core::viewport::Viewport;
use crate::rendering::bodies::body_meshes::body_mesh;

const LOG_TARGET: &str = "bodies";

/// Bodies sit in front of the (invisible) walls; successive entries stack slightly.
pub const BODY_Z: f32 = 10.0;
pub const BODY_Z_STEP: f32 = 0.01;

/// Non-owning, order-stable list of the scene's bodies (overlay iteration order).
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneBodies(pub Vec<Entity>);

/// Collider in world axes; also what pointer picking tests against.
fn body_collider(spec: &BodySpec) -> Option<Collider> {
    match &spec.shape {
        BodyShape::Circle { radius } => Some(Collider::ball(*radius)),
        BodyShape::Polygon { vertices } => Collider::convex_hull(&to_world_ring(vertices)),
    }
}

/// Inserts one body into the world.
pub fn spawn_body(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    physics: &PhysicsConfig,
    index: usize,
    spec: BodySpec,
) -> Option<Entity> {
    let Some(collider) = body_collider(&spec) else {
        warn!(
            target: LOG_TARGET,
            "scene[{index}] {} produced a degenerate outline; skipped", spec.kind
        );
        return None;
    };
    let mesh = meshes.add(body_mesh(&spec.shape));
    let material = materials.add(spec.color);
    let translation = Viewport::to_world(spec.position).extend(BODY_Z + index as f32 * BODY_Z_STEP);
    let entity = commands
        .spawn((
            Name::new(format!("LabBody:{}", spec.kind)),
            SceneEntity,
            LabBody {
                kind: spec.kind,
                index,
            },
            BodyLabel(spec.label),
            RigidBody::Dynamic,
            collider,
            Velocity::zero(),
            Friction::coefficient(physics.friction),
            Restitution::coefficient(physics.restitution),
            Mesh2d(mesh),
            MeshMaterial2d(material),
            Transform {
                translation,
                rotation: Viewport::rotation_to_world(spec.angle),
                scale: Vec3::ONE,
            },
        ))
        .id();
    Some(entity)
}

/// Builds every descriptor of the scene table against the current viewport width.
pub fn spawn_scene_bodies(
    mut commands: Commands,
    cfg: Res<LabConfig>,
    viewport: Res<Viewport>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let mut shapes = Vec::with_capacity(cfg.scene.len());
    for (index, descriptor) in cfg.scene.iter().enumerate() {
        let Some(spec) = build_body(descriptor, viewport.width) else {
            debug!(
                target: LOG_TARGET,
                "scene[{index}] type '{}' unrecognized; skipped", descriptor.kind
            );
            continue;
        };
        if let Some(entity) = spawn_body(
            &mut commands,
            &mut meshes,
            &mut materials,
            &cfg.physics,
            index,
            spec,
        ) {
            shapes.push(entity);
        }
    }
    info!(
        target: LOG_TARGET,
        "spawned {} of {} scene bodies (viewport width {})",
        shapes.len(),
        cfg.scene.len(),
        viewport.width
    );
    commands.insert_resource(SceneBodies(shapes));
}
