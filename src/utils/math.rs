//! Additional 2D math helpers layered on top of `glam`.

use glam::Vec2;

/// Velocity of a point at `offset` from the centre of a body spinning at `angular` rad/s.
pub fn point_velocity(linear: Vec2, angular: f32, offset: Vec2) -> Vec2 {
    linear + offset.perp() * angular
}

/// Rotates `point` about `pivot` by `radians` (counter-clockwise).
pub fn rotate_about(point: Vec2, pivot: Vec2, radians: f32) -> Vec2 {
    let (sin, cos) = radians.sin_cos();
    let local = point - pivot;
    pivot + Vec2::new(local.x * cos - local.y * sin, local.x * sin + local.y * cos)
}

/// Arithmetic mean of the points, or zero for an empty slice.
pub fn centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    points.iter().copied().sum::<Vec2>() / points.len() as f32
}

/// Projects every point onto `axis` and returns the `(min, max)` interval.
pub fn project_onto(points: &[Vec2], axis: Vec2) -> (f32, f32) {
    points
        .iter()
        .map(|p| p.dot(axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), d| {
            (lo.min(d), hi.max(d))
        })
}

/// Closest point to `point` on the segment `start..end`.
pub fn closest_on_segment(point: Vec2, start: Vec2, end: Vec2) -> Vec2 {
    let edge = end - start;
    let len_sq = edge.length_squared();
    if len_sq <= f32::EPSILON {
        return start;
    }
    let t = ((point - start).dot(edge) / len_sq).clamp(0.0, 1.0);
    start + edge * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn quarter_turn_about_pivot() {
        let quarter = std::f32::consts::FRAC_PI_2;
        let rotated = rotate_about(Vec2::new(2.0, 1.0), Vec2::new(1.0, 1.0), quarter);
        assert_abs_diff_eq!(rotated.x, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(rotated.y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn segment_projection_is_clamped() {
        let start = Vec2::ZERO;
        let end = Vec2::new(1.0, 0.0);
        assert_eq!(closest_on_segment(Vec2::new(-3.0, 1.0), start, end), start);
        assert_eq!(closest_on_segment(Vec2::new(0.25, 4.0), start, end), Vec2::new(0.25, 0.0));
    }

    #[test]
    fn spinning_point_moves_tangentially() {
        let v = point_velocity(Vec2::ZERO, 2.0, Vec2::new(1.0, 0.0));
        assert_abs_diff_eq!(v.x, 0.0);
        assert_abs_diff_eq!(v.y, 2.0);
    }
}
