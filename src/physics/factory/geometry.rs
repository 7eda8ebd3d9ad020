//! Convex outline helpers: regular polygons, rectangles, chamfered corners.
//!
//! All functions are orientation-agnostic; callers may hand in clockwise or counter-clockwise rings.
use bevy::math::Vec2;
use std::f32::consts::{PI, TAU};

/// Vertices of a regular polygon centred on the origin (first vertex at half a step past +x).
pub fn regular_polygon(sides: u32, radius: f32) -> Vec<Vec2> {
    let theta = TAU / sides as f32;
    let offset = theta * 0.5;
    (0..sides)
        .map(|i| {
            let angle = offset + i as f32 * theta;
            Vec2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}

pub fn rectangle(width: f32, height: f32) -> Vec<Vec2> {
    let hw = width * 0.5;
    let hh = height * 0.5;
    vec![
        Vec2::new(-hw, -hh),
        Vec2::new(hw, -hh),
        Vec2::new(hw, hh),
        Vec2::new(-hw, hh),
    ]
}

/// Twice the signed area; positive for counter-clockwise rings in a y-up frame.
pub fn signed_area2(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].perp_dot(vertices[(i + 1) % n]))
        .sum()
}

/// Arc segments per rounded corner: grows with radius, even, 2..=14.
pub fn corner_segments(radius: f32) -> usize {
    let q = (radius.max(0.0).powf(0.32) * 1.75).clamp(2.0, 14.0) as usize;
    if q % 2 == 1 {
        q + 1
    } else {
        q
    }
}

/// Replaces every corner of a convex ring with a circular arc of `radius` tangent to both edges.
///
/// The radius is clamped per corner so neighbouring arcs never overlap on a shared edge; the
/// result always lies inside the input polygon.
pub fn chamfer(vertices: &[Vec2], radius: f32) -> Vec<Vec2> {
    let n = vertices.len();
    if n < 3 || radius <= 0.0 {
        return vertices.to_vec();
    }
    let winding = signed_area2(vertices).signum();
    let mut out: Vec<Vec2> = Vec::with_capacity(n * (corner_segments(radius) + 1));
    for i in 0..n {
        let prev = vertices[(i + n - 1) % n];
        let v = vertices[i];
        let next = vertices[(i + 1) % n];
        let (len_in, len_out) = ((v - prev).length(), (next - v).length());
        if len_in < 1e-6 || len_out < 1e-6 {
            push_distinct(&mut out, v);
            continue;
        }
        let e_in = (v - prev) / len_in;
        let e_out = (next - v) / len_out;
        // exterior (turn) angle at this corner
        let turn = e_in.dot(e_out).clamp(-1.0, 1.0).acos();
        if turn < 1e-4 {
            push_distinct(&mut out, v);
            continue;
        }
        let half_interior = (PI - turn) * 0.5;
        let mut r = radius;
        let mut t = r / half_interior.tan();
        let t_max = len_in.min(len_out) * 0.5;
        if t > t_max {
            t = t_max;
            r = t * half_interior.tan();
        }
        let a = v - e_in * t;
        let inward = if winding >= 0.0 { e_in.perp() } else { -e_in.perp() };
        let center = a + inward * r;
        let start = (a - center).to_angle();
        let segments = corner_segments(r);
        for k in 0..=segments {
            let angle = start + winding * turn * k as f32 / segments as f32;
            push_distinct(&mut out, center + Vec2::from_angle(angle) * r);
        }
    }
    if out.len() > 1 && out[0].distance_squared(out[out.len() - 1]) < 1e-6 {
        out.pop();
    }
    out
}

fn push_distinct(out: &mut Vec<Vec2>, p: Vec2) {
    if out.last().is_none_or(|last| last.distance_squared(p) > 1e-6) {
        out.push(p);
    }
}

/// Mirrors a viewport-space ring into world axes, keeping it counter-clockwise.
pub fn to_world_ring(vertices: &[Vec2]) -> Vec<Vec2> {
    let mut ring: Vec<Vec2> = vertices.iter().map(|v| Vec2::new(v.x, -v.y)).collect();
    if signed_area2(&ring) < 0.0 {
        ring.reverse();
    }
    ring
}
