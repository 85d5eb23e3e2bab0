use glam::Vec2;

use crate::{
    core::polygon::{edges, Polygon},
    error::{PhysicsError, PhysicsResult},
    utils::math::project_onto,
};

/// Minimum translation needed to separate two overlapping polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit vector pointing from the first polygon toward the second.
    pub normal: Vec2,
    pub depth: f32,
}

/// Outcome of the separating-axis test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SatResult {
    Separated,
    Penetrating(Penetration),
}

impl SatResult {
    pub fn is_penetrating(&self) -> bool {
        matches!(self, SatResult::Penetrating(_))
    }

    pub fn penetration(self) -> Option<Penetration> {
        match self {
            SatResult::Penetrating(p) => Some(p),
            SatResult::Separated => None,
        }
    }
}

/// Separating-axis test between two convex polygons.
pub fn test(a: &Polygon, b: &Polygon) -> PhysicsResult<SatResult> {
    test_polygons(a.vertices(), a.centroid(), b.vertices(), b.centroid())
}

/// Separating-axis test on raw vertex loops.
///
/// Every edge normal of `a`, then of `b`, is tried as a candidate axis. The
/// first axis with no overlap proves the loops disjoint. Otherwise the axis
/// with the smallest overlap is returned, oriented from `a` toward `b`.
pub fn test_polygons(
    a: &[Vec2],
    centroid_a: Vec2,
    b: &[Vec2],
    centroid_b: Vec2,
) -> PhysicsResult<SatResult> {
    for loop_ in [a, b] {
        if loop_.len() <= 1 {
            return Err(PhysicsError::DegeneratePolygon {
                vertex_count: loop_.len(),
            });
        }
    }

    let mut best: Option<Penetration> = None;
    for (start, end) in edges(a).chain(edges(b)) {
        let Some(axis) = (end - start).perp().try_normalize() else {
            continue;
        };

        let (min_a, max_a) = project_onto(a, axis);
        let (min_b, max_b) = project_onto(b, axis);
        let overlap = (max_b - min_a).min(max_a - min_b);
        if overlap <= 0.0 {
            return Ok(SatResult::Separated);
        }

        if best.map_or(true, |p| overlap < p.depth) {
            best = Some(Penetration {
                normal: axis,
                depth: overlap,
            });
        }
    }

    let Some(mut penetration) = best else {
        // every edge collapsed to a point: nothing to push apart along
        return Ok(SatResult::Separated);
    };
    if (centroid_a - centroid_b).dot(penetration.normal) > 0.0 {
        penetration.normal = -penetration.normal;
    }
    Ok(SatResult::Penetrating(penetration))
}
