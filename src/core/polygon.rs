use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::utils::math::{centroid, rotate_about};

/// World-space vertex loop of a convex body together with its cached centroid.
///
/// The loop is in winding order and closed implicitly (the last vertex connects
/// back to the first). Convexity is assumed by the collision routines and never
/// checked here. The centroid is the arithmetic mean of the vertices and is
/// refreshed by every mutation, so readers never see a stale value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    centroid: Vec2,
    /// Accumulated rotation in degrees.
    angle: f32,
    /// Bumped on every mutation so observers can detect changes cheaply.
    version: u64,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        let centroid = centroid(&vertices);
        Self {
            vertices,
            centroid,
            angle: 0.0,
            version: 0,
        }
    }

    /// Axis-aligned rectangle centred on `center`, wound counter-clockwise.
    pub fn rectangle(center: Vec2, half_extents: Vec2) -> Self {
        let Vec2 { x: hx, y: hy } = half_extents;
        Self::new(vec![
            center + Vec2::new(-hx, -hy),
            center + Vec2::new(hx, -hy),
            center + Vec2::new(hx, hy),
            center + Vec2::new(-hx, hy),
        ])
    }

    /// Regular polygon with `sides` vertices on a circle of `radius`.
    pub fn regular(center: Vec2, radius: f32, sides: usize) -> Self {
        let step = std::f32::consts::TAU / sides.max(1) as f32;
        Self::new(
            (0..sides)
                .map(|i| center + Vec2::from_angle(step * i as f32) * radius)
                .collect(),
        )
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges as `(start, end)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        edges(&self.vertices)
    }

    /// Translates every vertex by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
        self.centroid = centroid(&self.vertices);
        self.version += 1;
    }

    /// Rotates every vertex about the cached centroid, counter-clockwise in degrees.
    pub fn rotate(&mut self, angle_degrees: f32) {
        if angle_degrees == 0.0 {
            return;
        }
        let pivot = self.centroid;
        let radians = angle_degrees.to_radians();
        for vertex in &mut self.vertices {
            *vertex = rotate_about(*vertex, pivot, radians);
        }
        self.angle = (self.angle + angle_degrees) % 360.0;
        self.centroid = centroid(&self.vertices);
        self.version += 1;
    }
}

/// Consecutive vertex pairs of a closed loop.
pub fn edges(vertices: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let count = vertices.len();
    (0..count).map(move |i| (vertices[i], vertices[(i + 1) % count]))
}
