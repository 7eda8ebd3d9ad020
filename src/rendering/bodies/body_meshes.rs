use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

use crate::physics::factory::body_factory::BodyShape;
use crate::physics::factory::geometry::to_world_ring;

/// Fill mesh for a body outline, in world axes around the body centre.
pub fn body_mesh(shape: &BodyShape) -> Mesh {
    match shape {
        BodyShape::Circle { radius } => Mesh::from(Circle::new(*radius)),
        BodyShape::Polygon { vertices } => fan_mesh(&to_world_ring(vertices)),
    }
}

/// Triangle fan around the centroid of a convex counter-clockwise ring.
fn fan_mesh(ring: &[Vec2]) -> Mesh {
    let n = ring.len();
    let centroid = ring.iter().copied().sum::<Vec2>() / n.max(1) as f32;
    let (min, max) = ring.iter().fold(
        (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
        |(lo, hi), v| (lo.min(*v), hi.max(*v)),
    );
    let extent = (max - min).max(Vec2::splat(f32::EPSILON));

    let mut positions = Vec::with_capacity(n + 1);
    let mut uvs = Vec::with_capacity(n + 1);
    for p in std::iter::once(centroid).chain(ring.iter().copied()) {
        positions.push([p.x, p.y, 0.0]);
        let uv = (p - min) / extent;
        uvs.push([uv.x, 1.0 - uv.y]);
    }
    let normals = vec![[0.0, 0.0, 1.0]; n + 1];
    let mut indices = Vec::with_capacity(n * 3);
    for i in 0..n as u32 {
        indices.extend_from_slice(&[0, i + 1, (i + 1) % n as u32 + 1]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::factory::geometry::rectangle;

    #[test]
    fn fan_has_one_triangle_per_edge() {
        let mesh = body_mesh(&BodyShape::Polygon {
            vertices: rectangle(4.0, 2.0),
        });
        assert_eq!(mesh.count_vertices(), 5);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(12));
    }
}
