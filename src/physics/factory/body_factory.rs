//! Scene descriptor -> detached body description.
//!
//! `build_body` is pure: it resolves the responsive x position, looks up the geometry recipe of
//! the descriptor's kind and produces a [`BodySpec`]. Putting the body into the world is the
//! lifecycle's job (see `spawn_scene_bodies`).
use bevy::prelude::*;

use super::geometry::{chamfer, rectangle, regular_polygon};
use crate::core::scene::{ShapeDescriptor, ShapeKind};

/// Width of the scale `ShapeDescriptor::x_fraction` is expressed in.
pub const X_FRACTION_SCALE: f32 = 1000.0;

pub const DEFAULT_SQUIGGLE_SIDES: u32 = 12;
pub const DEFAULT_SQUIGGLE_RADIUS: f32 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Rectangle { width: f32, height: f32 },
    Circle { radius: f32 },
    Polygon { sides: u32, radius: f32 },
}

/// Fixed geometry of one shape kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryRecipe {
    pub primitive: Primitive,
    pub chamfer: Option<f32>,
}

impl GeometryRecipe {
    /// Kind -> recipe table. Squiggles take sides/radius from the descriptor.
    pub fn for_descriptor(descriptor: &ShapeDescriptor) -> Option<Self> {
        let recipe = match descriptor.kind {
            ShapeKind::Capsule => Self {
                primitive: Primitive::Rectangle {
                    width: 320.0,
                    height: 54.0,
                },
                chamfer: Some(27.0),
            },
            ShapeKind::Circle => Self {
                primitive: Primitive::Circle { radius: 150.0 },
                chamfer: None,
            },
            ShapeKind::Squiggle => Self {
                primitive: Primitive::Polygon {
                    sides: descriptor.sides.unwrap_or(DEFAULT_SQUIGGLE_SIDES),
                    radius: descriptor.radius.unwrap_or(DEFAULT_SQUIGGLE_RADIUS),
                },
                chamfer: Some(40.0),
            },
            ShapeKind::Flower => Self {
                primitive: Primitive::Polygon {
                    sides: 4,
                    radius: 170.0,
                },
                chamfer: Some(90.0),
            },
            ShapeKind::Hexagon => Self {
                primitive: Primitive::Polygon {
                    sides: 6,
                    radius: 170.0,
                },
                chamfer: None,
            },
            ShapeKind::Unrecognized(_) => return None,
        };
        Some(recipe)
    }

    /// Body-local outline in viewport axes.
    pub fn outline(&self) -> BodyShape {
        let ring = match self.primitive {
            Primitive::Circle { radius } => return BodyShape::Circle { radius },
            Primitive::Polygon { sides, radius } if sides < 3 => {
                return BodyShape::Circle { radius };
            }
            Primitive::Rectangle { width, height } => rectangle(width, height),
            Primitive::Polygon { sides, radius } => regular_polygon(sides, radius),
        };
        let vertices = match self.chamfer {
            Some(r) => chamfer(&ring, r),
            None => ring,
        };
        BodyShape::Polygon { vertices }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BodyShape {
    Circle { radius: f32 },
    Polygon { vertices: Vec<Vec2> },
}

/// A body ready to be inserted into the world. Positions and angles are in viewport space.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub kind: ShapeKind,
    pub position: Vec2,
    pub angle: f32,
    pub color: Color,
    pub label: String,
    pub shape: BodyShape,
}

/// Absolute x of a descriptor for the given viewport width.
#[inline]
pub fn resolve_x(x_fraction: f32, viewport_width: f32) -> f32 {
    x_fraction / X_FRACTION_SCALE * viewport_width
}

/// Builds the body a descriptor describes, or `None` for an unrecognized kind.
pub fn build_body(descriptor: &ShapeDescriptor, viewport_width: f32) -> Option<BodySpec> {
    let recipe = GeometryRecipe::for_descriptor(descriptor)?;
    Some(BodySpec {
        kind: descriptor.kind.clone(),
        position: Vec2::new(resolve_x(descriptor.x_fraction, viewport_width), descriptor.y),
        angle: descriptor.rotate.unwrap_or(0.0),
        color: descriptor.color.color(),
        label: descriptor.text.clone(),
        shape: recipe.outline(),
    })
}
