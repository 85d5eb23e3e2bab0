use glam::Vec2;

use crate::{
    config::{RAY_PERTURBATION, RAY_VERTEX_TOLERANCE},
    core::polygon::edges,
    utils::math::closest_on_segment,
};

/// Nearest boundary point of a polygon that contains the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryHit {
    /// Closest point on the polygon boundary.
    pub point: Vec2,
    /// Unit vector from `point` toward the query point.
    pub normal: Vec2,
    /// Distance from the query point to `point`.
    pub distance: f32,
}

/// Even-odd containment test with a horizontal ray cast toward +x.
///
/// A query whose `y` sits within a hair of some vertex `y` is nudged before
/// counting, so a ray through a shared vertex is not counted twice.
pub fn contains_point(point: Vec2, vertices: &[Vec2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut y = point.y;
    if vertices
        .iter()
        .any(|v| (v.y - y).abs() < RAY_VERTEX_TOLERANCE)
    {
        y += RAY_PERTURBATION;
    }

    let mut inside = false;
    for (start, end) in edges(vertices) {
        if (start.y > y) == (end.y > y) {
            continue;
        }
        let crossing_x = start.x + (y - start.y) * (end.x - start.x) / (end.y - start.y);
        if point.x < crossing_x {
            inside = !inside;
        }
    }
    inside
}

/// Closest point on the boundary of `vertices` to `point`, over every edge.
pub fn closest_boundary_point(point: Vec2, vertices: &[Vec2]) -> Option<Vec2> {
    edges(vertices)
        .map(|(start, end)| closest_on_segment(point, start, end))
        .min_by(|a, b| {
            a.distance_squared(point)
                .total_cmp(&b.distance_squared(point))
        })
}

/// Containment plus the boundary point that pushes `point` back out.
///
/// Returns `None` when the point is outside, or when it lies exactly on the
/// boundary so no displacement direction exists.
pub fn boundary_contact(point: Vec2, vertices: &[Vec2]) -> Option<BoundaryHit> {
    if !contains_point(point, vertices) {
        return None;
    }
    let closest = closest_boundary_point(point, vertices)?;
    let displacement = point - closest;
    let normal = displacement.try_normalize()?;
    Some(BoundaryHit {
        point: closest,
        normal,
        distance: displacement.length(),
    })
}
