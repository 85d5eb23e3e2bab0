use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{config::FRICTION_DISCOUNT, utils::allocator::BodyId};

/// Linear velocity (units/s) and angular velocity (rad/s, counter-clockwise).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub linear: Vec2,
    pub angular: f32,
}

impl Velocity {
    pub fn new(linear: Vec2, angular: f32) -> Self {
        Self { linear, angular }
    }
}

/// Material coefficients consumed once when a body is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Zero makes the body immovable.
    pub inverse_mass: f32,
    pub restitution: f32,
    pub friction: f32,
    /// RGBA colour handed through to renderers.
    pub color: [u8; 4],
}

impl Default for Material {
    fn default() -> Self {
        Self {
            inverse_mass: 1.0,
            restitution: 0.2,
            friction: 0.4,
            color: [200, 200, 200, 255],
        }
    }
}

impl Material {
    pub fn rubber() -> Self {
        Self {
            inverse_mass: 1.0 / 1.4,
            restitution: 0.8,
            friction: 1.0,
            color: [40, 40, 40, 255],
        }
    }

    pub fn steel() -> Self {
        Self {
            inverse_mass: 1.0 / 7.8,
            restitution: 0.4,
            friction: 0.45,
            color: [150, 160, 170, 255],
        }
    }

    pub fn ice() -> Self {
        Self {
            inverse_mass: 1.0 / 0.9,
            restitution: 0.05,
            friction: 0.03,
            color: [190, 230, 255, 255],
        }
    }

    /// Immovable ground material.
    pub fn ground() -> Self {
        Self {
            inverse_mass: 0.0,
            restitution: 0.1,
            friction: 0.8,
            color: [90, 70, 50, 255],
        }
    }

    pub fn with_color(mut self, color: [u8; 4]) -> Self {
        self.color = color;
        self
    }

    /// Restitution and friction used when `self` touches `other`.
    pub fn combine_with(&self, other: &Self) -> MaterialPairProperties {
        MaterialPairProperties {
            restitution: self.restitution.max(other.restitution),
            friction: self.friction.min(other.friction) * FRICTION_DISCOUNT,
        }
    }
}

/// Coefficients of one contact after mixing both materials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialPairProperties {
    pub restitution: f32,
    pub friction: f32,
}

/// Read-only copy of the state renderers and reward functions look at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub centroid: Vec2,
    pub vertices: Vec<Vec2>,
    pub velocity: Velocity,
    /// Accumulated rotation in degrees.
    pub angle: f32,
    pub color: [u8; 4],
    pub is_static: bool,
    pub is_broken: bool,
}
