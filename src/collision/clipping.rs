use glam::Vec2;

use super::contact::ContactPoints;

/// Half-plane `normal · p >= offset`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    normal: Vec2,
    offset: f32,
}

impl Plane {
    pub fn new(normal: Vec2, offset: f32) -> Self {
        Self { normal, offset }
    }

    fn signed_distance(&self, point: Vec2) -> f32 {
        self.normal.dot(point) - self.offset
    }
}

/// Clips the segment `start..end` to the half-plane, keeping the inside part.
///
/// Endpoints inside the plane are kept as-is. When exactly one endpoint is
/// outside, the crossing point is inserted in its place.
pub fn clip_segment(start: Vec2, end: Vec2, plane: Plane) -> ContactPoints {
    let d1 = plane.signed_distance(start);
    let d2 = plane.signed_distance(end);

    let mut clipped = ContactPoints::new();
    if d1 >= 0.0 {
        clipped.push(start);
    }
    if d2 >= 0.0 {
        clipped.push(end);
    }
    if d1 * d2 < 0.0 {
        let t = d1 / (d1 - d2);
        clipped.push(start + (end - start) * t);
    }
    clipped
}

/// Edge of a polygon that faces the collision, plus its most extreme vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub vertex: Vec2,
    pub start: Vec2,
    pub end: Vec2,
}

impl Feature {
    pub fn edge(&self) -> Vec2 {
        self.end - self.start
    }
}

/// Picks the vertex with the least projection on `direction` and, of its two
/// adjacent edges, the one closer to perpendicular with `direction`.
pub fn significant_feature(vertices: &[Vec2], direction: Vec2) -> Option<Feature> {
    let count = vertices.len();
    if count < 2 {
        return None;
    }
    let index = (0..count).min_by(|&i, &j| {
        vertices[i]
            .dot(direction)
            .total_cmp(&vertices[j].dot(direction))
    })?;

    let vertex = vertices[index];
    let prev = vertices[(index + count - 1) % count];
    let next = vertices[(index + 1) % count];

    let to_prev = (vertex - prev).normalize_or_zero();
    let to_next = (vertex - next).normalize_or_zero();
    if to_prev.dot(direction).abs() <= to_next.dot(direction).abs() {
        Some(Feature {
            vertex,
            start: prev,
            end: vertex,
        })
    } else {
        Some(Feature {
            vertex,
            start: vertex,
            end: next,
        })
    }
}

/// World-space contact points between two overlapping convex polygons.
///
/// `normal` is the separating-axis normal pointing from `a` toward `b`. The
/// face most perpendicular to it becomes the reference face; the other
/// polygon's face is clipped to the reference face's side planes, and points
/// that do not reach into the reference polygon are dropped. Any stage that
/// leaves fewer than two points yields an empty set.
pub fn contact_points(a: &[Vec2], b: &[Vec2], normal: Vec2) -> ContactPoints {
    let (Some(face_a), Some(face_b)) = (
        significant_feature(a, -normal),
        significant_feature(b, normal),
    ) else {
        return ContactPoints::new();
    };

    // `toward_incident` points from the reference polygon into the incident one.
    let (reference, incident, toward_incident) =
        if face_a.edge().normalize_or_zero().dot(normal).abs()
            <= face_b.edge().normalize_or_zero().dot(normal).abs()
        {
            (face_a, face_b, normal)
        } else {
            (face_b, face_a, -normal)
        };

    let side = reference.edge().normalize_or_zero();
    if side == Vec2::ZERO {
        return ContactPoints::new();
    }

    let clipped = clip_segment(
        incident.start,
        incident.end,
        Plane::new(side, side.dot(reference.start)),
    );
    let [p0, p1] = match clipped.as_slice() {
        [p0, p1, ..] => [*p0, *p1],
        _ => return ContactPoints::new(),
    };

    let clipped = clip_segment(p0, p1, Plane::new(-side, -side.dot(reference.end)));
    if clipped.len() < 2 {
        return ContactPoints::new();
    }

    let mut inward = side.perp();
    if inward.dot(toward_incident) > 0.0 {
        inward = -inward;
    }
    let face_extent = inward.dot(reference.vertex);

    clipped
        .iter()
        .copied()
        .filter(|point| inward.dot(*point) >= face_extent)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collision::sat, core::polygon::Polygon};
    use approx::assert_abs_diff_eq;

    #[test]
    fn straddling_segment_gains_crossing_point() {
        let plane = Plane::new(Vec2::X, 0.0);
        let clipped = clip_segment(Vec2::new(-1.0, 0.0), Vec2::new(3.0, 4.0), plane);
        assert_eq!(clipped.len(), 2);
        assert_eq!(clipped[0], Vec2::new(3.0, 4.0));
        assert_abs_diff_eq!(clipped[1].x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(clipped[1].y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn segment_fully_outside_is_dropped() {
        let plane = Plane::new(Vec2::Y, 5.0);
        assert!(clip_segment(Vec2::ZERO, Vec2::X, plane).is_empty());
    }

    #[test]
    fn significant_feature_prefers_perpendicular_edge() {
        let square = Polygon::rectangle(Vec2::ZERO, Vec2::ONE);
        let feature = significant_feature(square.vertices(), Vec2::new(0.1, 1.0)).unwrap();
        assert_abs_diff_eq!(feature.edge().normalize().dot(Vec2::Y), 0.0, epsilon = 1e-6);
        assert_eq!(feature.vertex, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn box_resting_on_wide_floor_has_two_contacts() {
        let floor = Polygon::rectangle(Vec2::new(0.0, 2.0), Vec2::new(10.0, 1.0));
        let crate_ = Polygon::rectangle(Vec2::new(0.0, 0.1), Vec2::ONE);

        let hit = sat::test(&crate_, &floor).unwrap().penetration().unwrap();
        let points = contact_points(crate_.vertices(), floor.vertices(), hit.normal);

        assert_eq!(points.len(), 2);
        for point in points.iter() {
            assert_abs_diff_eq!(point.y, 1.0, epsilon = 1e-5);
            assert!(point.x.abs() <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn tilted_corner_yields_single_contact() {
        let floor = Polygon::rectangle(Vec2::new(0.0, 2.0), Vec2::new(10.0, 1.0));
        let mut diamond = Polygon::rectangle(Vec2::new(0.0, -0.3), Vec2::ONE);
        diamond.rotate(45.0);

        let hit = sat::test(&diamond, &floor).unwrap().penetration().unwrap();
        let points = contact_points(diamond.vertices(), floor.vertices(), hit.normal);

        assert_eq!(points.len(), 1);
        assert_abs_diff_eq!(points[0].x, 0.0, epsilon = 1e-4);
        assert!(points[0].y > 1.0);
    }
}
