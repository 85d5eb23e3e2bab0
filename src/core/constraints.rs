use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::utils::allocator::BodyId;

/// Links used by articulated creatures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Joint {
    /// Pins vertex `vertex_a` of `body_a` to vertex `vertex_b` of `body_b`.
    Pin {
        body_a: BodyId,
        body_b: BodyId,
        vertex_a: usize,
        vertex_b: usize,
    },
    /// Keeps the two centroids `distance` apart.
    Distance {
        body_a: BodyId,
        body_b: BodyId,
        distance: f32,
    },
}

impl Joint {
    pub fn bodies(&self) -> (BodyId, BodyId) {
        match *self {
            Joint::Pin { body_a, body_b, .. } | Joint::Distance { body_a, body_b, .. } => {
                (body_a, body_b)
            }
        }
    }

    pub fn involves(&self, id: BodyId) -> bool {
        let (a, b) = self.bodies();
        a == id || b == id
    }

    /// World-space anchors on each body, or `None` when a vertex index is out of range.
    pub fn anchors(&self, vertices_a: &[Vec2], vertices_b: &[Vec2]) -> Option<(Vec2, Vec2)> {
        match *self {
            Joint::Pin {
                vertex_a, vertex_b, ..
            } => Some((*vertices_a.get(vertex_a)?, *vertices_b.get(vertex_b)?)),
            Joint::Distance { .. } => None,
        }
    }
}
