use glam::Vec2;

use crate::{config::DEFAULT_INVERSE_INERTIA_SCALE, utils::allocator::BodyId};

use super::{
    polygon::Polygon,
    types::{BodySnapshot, Material, Velocity},
};

/// Convex rigid body: one polygon plus mass, material and motion state.
#[derive(Debug, Clone)]
pub struct RigidBody {
    pub id: BodyId,
    polygon: Polygon,
    pub velocity: Velocity,
    /// Linear acceleration accumulated since the last integration.
    pub acceleration: Vec2,
    /// Angular acceleration accumulated since the last integration (rad/s²).
    pub angular_acceleration: f32,
    material: Material,
    inverse_mass: f32,
    inverse_inertia: f32,
    is_static: bool,
    pub is_fragile: bool,
    pub is_floor: bool,
    is_broken: bool,
}

impl RigidBody {
    /// Builds a body from its material and initial world-space polygon.
    ///
    /// A material with zero inverse mass yields a static body.
    pub fn new(material: Material, polygon: Polygon) -> Self {
        Self::with_inertia_scale(material, polygon, DEFAULT_INVERSE_INERTIA_SCALE)
    }

    /// `PhysicsWorld::add_body` replaces the scale with the world's configured one.
    pub fn with_inertia_scale(material: Material, polygon: Polygon, inertia_scale: f32) -> Self {
        let inverse_mass = material.inverse_mass.max(0.0);
        Self {
            id: BodyId::default(),
            polygon,
            velocity: Velocity::default(),
            acceleration: Vec2::ZERO,
            angular_acceleration: 0.0,
            material,
            inverse_mass,
            inverse_inertia: inverse_mass * inertia_scale,
            is_static: inverse_mass == 0.0,
            is_fragile: false,
            is_floor: false,
            is_broken: false,
        }
    }

    /// Immovable body regardless of the material's mass.
    pub fn new_static(material: Material, polygon: Polygon) -> Self {
        let mut body = Self::new(material, polygon);
        body.make_static();
        body
    }

    pub fn make_static(&mut self) {
        self.is_static = true;
        self.inverse_mass = 0.0;
        self.inverse_inertia = 0.0;
    }

    pub fn fragile(mut self) -> Self {
        self.is_fragile = true;
        self
    }

    pub fn floor(mut self) -> Self {
        self.is_floor = true;
        self
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Mutable access for joint logic that drags linked bodies together.
    pub fn polygon_mut(&mut self) -> &mut Polygon {
        &mut self.polygon
    }

    pub fn vertices(&self) -> &[Vec2] {
        self.polygon.vertices()
    }

    pub fn centroid(&self) -> Vec2 {
        self.polygon.centroid()
    }

    pub fn angle(&self) -> f32 {
        self.polygon.angle()
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn color(&self) -> [u8; 4] {
        self.material.color
    }

    pub fn restitution(&self) -> f32 {
        self.material.restitution
    }

    pub fn friction(&self) -> f32 {
        self.material.friction
    }

    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    pub fn inverse_inertia(&self) -> f32 {
        self.inverse_inertia
    }

    /// Re-derives the inverse inertia from the inverse mass. Static bodies stay at zero.
    pub(crate) fn set_inertia_scale(&mut self, inertia_scale: f32) {
        self.inverse_inertia = self.inverse_mass * inertia_scale;
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_broken(&self) -> bool {
        self.is_broken
    }

    /// Latches the broken flag. Returns `true` only on the first call.
    pub(crate) fn mark_broken(&mut self) -> bool {
        let newly = !self.is_broken;
        self.is_broken = true;
        newly
    }

    pub fn set_velocity(&mut self, linear: Vec2, angular: f32) {
        self.velocity = Velocity::new(linear, angular);
    }

    /// Adds to the acceleration consumed by the next integration.
    pub fn apply_acceleration(&mut self, acceleration: Vec2) {
        if self.is_static {
            return;
        }
        self.acceleration += acceleration;
    }

    pub fn apply_torque(&mut self, torque: f32) {
        if self.is_static {
            return;
        }
        self.angular_acceleration += torque * self.inverse_inertia;
    }

    /// Applies `impulse` at world-space `point`.
    pub fn apply_impulse(&mut self, impulse: Vec2, point: Vec2) {
        if self.is_static {
            return;
        }
        let offset = point - self.centroid();
        self.velocity.linear += impulse * self.inverse_mass;
        self.velocity.angular += offset.perp_dot(impulse) * self.inverse_inertia;
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            id: self.id,
            centroid: self.centroid(),
            vertices: self.vertices().to_vec(),
            velocity: self.velocity,
            angle: self.angle(),
            color: self.color(),
            is_static: self.is_static,
            is_broken: self.is_broken,
        }
    }
}
