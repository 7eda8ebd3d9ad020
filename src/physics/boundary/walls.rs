use bevy::prelude::*;
use bevy::window::WindowResized;
use bevy_rapier2d::prelude::*;

use crate::core::components::{BoundaryWall, SceneEntity, WallSide};
use crate::core::config::LabConfig;
use crate::core::viewport::Viewport;

const LOG_TARGET: &str = "boundary";

/// Centre and full size of one wall, viewport space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPlacement {
    pub center: Vec2,
    pub size: Vec2,
}

/// Where the four walls sit for a given viewport. Each wall is centred `thickness / 2` outside
/// its edge so its inner face lines up with the edge and the whole thickness lies beyond it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallLayout {
    pub width: f32,
    pub height: f32,
    pub thickness: f32,
    pub ground: WallPlacement,
    pub ceiling: WallPlacement,
    pub left: WallPlacement,
    pub right: WallPlacement,
}

impl WallLayout {
    pub fn new(width: f32, height: f32, thickness: f32) -> Self {
        let horizontal = Vec2::new(width + thickness * 2.0, thickness);
        let vertical = Vec2::new(thickness, height + thickness * 2.0);
        Self {
            width,
            height,
            thickness,
            ground: WallPlacement {
                center: Vec2::new(width * 0.5, height + thickness * 0.5),
                size: horizontal,
            },
            ceiling: WallPlacement {
                center: Vec2::new(width * 0.5, -thickness * 0.5),
                size: horizontal,
            },
            left: WallPlacement {
                center: Vec2::new(-thickness * 0.5, height * 0.5),
                size: vertical,
            },
            right: WallPlacement {
                center: Vec2::new(width + thickness * 0.5, height * 0.5),
                size: vertical,
            },
        }
    }

    pub fn placement(&self, side: WallSide) -> WallPlacement {
        match side {
            WallSide::Ground => self.ground,
            WallSide::Ceiling => self.ceiling,
            WallSide::Left => self.left,
            WallSide::Right => self.right,
        }
    }

    /// Rectangle enclosed by the walls' outer faces.
    pub fn outer_bounds(&self) -> Rect {
        Rect::new(
            -self.thickness,
            -self.thickness,
            self.width + self.thickness,
            self.height + self.thickness,
        )
    }

    /// Whether one explicit integration step from `position` stays short of every outer face.
    pub fn contains_step(&self, position: Vec2, velocity: Vec2, dt: f32) -> bool {
        let next = position + velocity * dt;
        let outer = self.outer_bounds();
        next.x > outer.min.x && next.x < outer.max.x && next.y > outer.min.y && next.y < outer.max.y
    }

    /// Largest speed a body may have and still not cross a wall within one step.
    pub fn max_safe_speed(&self, dt: f32) -> f32 {
        self.thickness / dt.max(f32::EPSILON)
    }
}

/// Stable handles of the four walls for the lifetime of one mount.
#[derive(Resource, Debug, Clone, Copy)]
pub struct BoundaryWalls {
    pub ground: Entity,
    pub ceiling: Entity,
    pub left: Entity,
    pub right: Entity,
    pub thickness: f32,
}

impl BoundaryWalls {
    pub fn entity(&self, side: WallSide) -> Entity {
        match side {
            WallSide::Ground => self.ground,
            WallSide::Ceiling => self.ceiling,
            WallSide::Left => self.left,
            WallSide::Right => self.right,
        }
    }
}

/// Spawns four fixed, invisible walls for `layout`.
pub fn create_walls(commands: &mut Commands, layout: &WallLayout) -> BoundaryWalls {
    let mut spawn = |side: WallSide| {
        let placement = layout.placement(side);
        commands
            .spawn((
                Name::new(side.name()),
                SceneEntity,
                BoundaryWall { side },
                RigidBody::Fixed,
                Collider::cuboid(placement.size.x * 0.5, placement.size.y * 0.5),
                Transform::from_translation(Viewport::to_world(placement.center).extend(0.0)),
                Visibility::Hidden,
            ))
            .id()
    };
    BoundaryWalls {
        ground: spawn(WallSide::Ground),
        ceiling: spawn(WallSide::Ceiling),
        left: spawn(WallSide::Left),
        right: spawn(WallSide::Right),
        thickness: layout.thickness,
    }
}

/// Moves the existing walls to the layout for `new_width`. Sizes and identities are untouched.
pub fn reposition_walls(
    walls: &BoundaryWalls,
    new_width: f32,
    height: f32,
    transforms: &mut Query<&mut Transform, With<BoundaryWall>>,
) {
    let layout = WallLayout::new(new_width, height, walls.thickness);
    for side in WallSide::ALL {
        let Ok(mut tf) = transforms.get_mut(walls.entity(side)) else {
            continue;
        };
        let center = Viewport::to_world(layout.placement(side).center);
        tf.translation.x = center.x;
        tf.translation.y = center.y;
    }
}

pub fn spawn_boundary_walls(mut commands: Commands, viewport: Res<Viewport>, cfg: Res<LabConfig>) {
    let layout = WallLayout::new(viewport.width, viewport.height, cfg.boundary.thickness);
    let walls = create_walls(&mut commands, &layout);
    debug!(
        target: LOG_TARGET,
        "walls created width={} height={} thickness={}",
        layout.width,
        layout.height,
        layout.thickness
    );
    commands.insert_resource(walls);
}

/// Window resize -> new viewport width -> walls follow. Only the surface window counts.
pub fn reposition_walls_on_resize(
    mut resize_events: EventReader<WindowResized>,
    mut viewport: ResMut<Viewport>,
    walls: Option<Res<BoundaryWalls>>,
    mut transforms: Query<&mut Transform, With<BoundaryWall>>,
) {
    let surface = viewport.surface;
    let Some(last) = resize_events
        .read()
        .filter(|ev| ev.window == surface)
        .filter(|ev| {
            // minimised windows report 0x0; keep the last real layout
            let usable = ev.width > 0.0 && ev.height > 0.0;
            if !usable {
                debug!(target: LOG_TARGET, "ignoring {}x{} resize", ev.width, ev.height);
            }
            usable
        })
        .last()
        .cloned()
    else {
        return;
    };
    let new_width = last.width;
    if (new_width - viewport.width).abs() > f32::EPSILON {
        viewport.width = new_width;
    }
    if let Some(walls) = walls {
        reposition_walls(&walls, new_width, viewport.height, &mut transforms);
        debug!(target: LOG_TARGET, "walls repositioned for width={new_width}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_sit_half_thickness_outside() {
        let l = WallLayout::new(1000.0, 600.0, 1000.0);
        assert_eq!(l.ground.center, Vec2::new(500.0, 1100.0));
        assert_eq!(l.ceiling.center, Vec2::new(500.0, -500.0));
        assert_eq!(l.left.center, Vec2::new(-500.0, 300.0));
        assert_eq!(l.right.center, Vec2::new(1500.0, 300.0));
        assert_eq!(l.ground.size, Vec2::new(3000.0, 1000.0));
        assert_eq!(l.left.size, Vec2::new(1000.0, 2600.0));
    }

    #[test]
    fn left_wall_ignores_width() {
        let a = WallLayout::new(400.0, 600.0, 1000.0);
        let b = WallLayout::new(1800.0, 600.0, 1000.0);
        assert_eq!(a.left, b.left);
    }
}
