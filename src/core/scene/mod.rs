//! Declarative scene table: the single source of truth for which bodies a mount creates.
//!
//! Order matters for overlay draw order only; physics ordering is up to Rapier.
pub mod descriptor;

pub use descriptor::{HexColor, ShapeDescriptor, ShapeKind};

use std::f32::consts::FRAC_PI_2;

const GREEN: &str = "#55EF95";

/// Built-in playground layout. `height` is the viewport height the bottom row is anchored to.
pub fn default_scene(height: f32) -> Vec<ShapeDescriptor> {
    vec![
        ShapeDescriptor::new(ShapeKind::Capsule, GREEN, 160.0, 400.0)
            .with_text("加入我们的 Discord 社区")
            .with_rotation(FRAC_PI_2),
        ShapeDescriptor::new(ShapeKind::Capsule, GREEN, 195.0, 400.0)
            .with_text("订阅 Labs 新闻动态")
            .with_rotation(FRAC_PI_2),
        ShapeDescriptor::new(ShapeKind::Capsule, GREEN, 930.0, 200.0)
            .with_text("在 X 上关注 Labs")
            .with_rotation(1.2),
        ShapeDescriptor::new(ShapeKind::Capsule, GREEN, 960.0, 150.0)
            .with_text("成为受信任的测试员")
            .with_rotation(1.2),
        ShapeDescriptor::new(ShapeKind::Squiggle, "#64A3FF", 100.0, height - 150.0)
            .with_radius(150.0)
            .with_sides(12),
        ShapeDescriptor::new(ShapeKind::Squiggle, "#FFAAFF", 320.0, height - 180.0)
            .with_radius(160.0)
            .with_sides(8),
        ShapeDescriptor::new(ShapeKind::Flower, "#D4E157", 450.0, height - 250.0),
        ShapeDescriptor::new(ShapeKind::Circle, "#9797FF", 650.0, height - 150.0),
        ShapeDescriptor::new(ShapeKind::Flower, "#FF8A50", 800.0, height - 200.0),
        ShapeDescriptor::new(ShapeKind::Hexagon, "#FFFF00", 920.0, height - 120.0),
    ]
}
