use glam::Vec2;

use crate::{
    collision::contact::ContactPoints,
    config::JOINT_RESTITUTION,
    core::rigidbody::RigidBody,
    utils::math::point_velocity,
};

/// Per-collision coefficients handed to the solver by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactManifold {
    /// Unit vector from body A toward body B.
    pub normal: Vec2,
    pub restitution: f32,
    pub friction: f32,
}

impl ContactManifold {
    pub fn between(body_a: &RigidBody, body_b: &RigidBody, normal: Vec2) -> Self {
        let pair = body_a.material().combine_with(body_b.material());
        Self {
            normal,
            restitution: pair.restitution,
            friction: pair.friction,
        }
    }

    /// Joint links bounce perfectly and never rub.
    pub fn joint(normal: Vec2) -> Self {
        Self {
            normal,
            restitution: JOINT_RESTITUTION,
            friction: 0.0,
        }
    }
}

/// Impulse magnitudes applied by one resolution.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AppliedImpulse {
    pub normal: f32,
    pub tangent: f32,
}

#[derive(Debug, Default, Clone)]
pub struct SolverStepMetrics {
    pub contacts_solved: usize,
    pub joints_solved: usize,
    pub normal_impulse_sum: f32,
    pub tangent_impulse_sum: f32,
}

impl SolverStepMetrics {
    pub fn record_contact(&mut self, impulse: AppliedImpulse) {
        self.contacts_solved += 1;
        self.normal_impulse_sum += impulse.normal.abs();
        self.tangent_impulse_sum += impulse.tangent.abs();
    }

    pub fn record_joint(&mut self, impulse: f32) {
        self.joints_solved += 1;
        self.normal_impulse_sum += impulse.abs();
    }

    pub fn merge(&mut self, other: &Self) {
        self.contacts_solved += other.contacts_solved;
        self.joints_solved += other.joints_solved;
        self.normal_impulse_sum += other.normal_impulse_sum;
        self.tangent_impulse_sum += other.tangent_impulse_sum;
    }
}

/// Single-pass impulse solver for one body pair.
///
/// There is no iteration, no warm starting and no velocity bias; overlap is
/// removed separately by [`ImpulseSolver::positional_correction`].
pub struct ImpulseSolver;

impl ImpulseSolver {
    /// Resolves a collision at the contact points produced by manifold clipping.
    ///
    /// Two points are collapsed to their midpoint; the solver never distributes
    /// impulses across both. An empty set applies nothing. Bodies already
    /// separating along the normal are left alone.
    pub fn resolve_contact(
        body_a: &mut RigidBody,
        body_b: &mut RigidBody,
        contacts: &ContactPoints,
        normal: Vec2,
    ) -> Option<AppliedImpulse> {
        let point = contacts.resolution_point()?;
        let manifold = ContactManifold::between(body_a, body_b, normal);
        Self::resolve_manifold(body_a, body_b, point, &manifold)
    }

    /// Normal then tangential impulse at `point` for the given manifold.
    pub fn resolve_manifold(
        body_a: &mut RigidBody,
        body_b: &mut RigidBody,
        point: Vec2,
        manifold: &ContactManifold,
    ) -> Option<AppliedImpulse> {
        let normal = manifold.normal;
        if Self::relative_velocity(body_a, body_b, point).dot(normal) > 0.0 {
            return None;
        }

        let normal_impulse =
            Self::solve_direction(body_a, body_b, point, normal, 1.0 + manifold.restitution);
        Self::apply_impulse(body_a, body_b, point, normal, normal_impulse);

        let tangent = normal.perp();
        let tangent_impulse =
            Self::solve_direction(body_a, body_b, point, tangent, manifold.friction);
        Self::apply_impulse(body_a, body_b, point, tangent, tangent_impulse);

        Some(AppliedImpulse {
            normal: normal_impulse,
            tangent: tangent_impulse,
        })
    }

    /// Joint entry point: restitution 1, no friction, applied even when separating.
    pub fn resolve_joint(
        body_a: &mut RigidBody,
        body_b: &mut RigidBody,
        anchor: Vec2,
        normal: Vec2,
    ) -> f32 {
        let manifold = ContactManifold::joint(normal);
        let impulse = Self::solve_direction(
            body_a,
            body_b,
            anchor,
            manifold.normal,
            1.0 + manifold.restitution,
        );
        Self::apply_impulse(body_a, body_b, anchor, manifold.normal, impulse);
        impulse
    }

    /// Pushes the pair apart by `depth` along `normal`, split by inverse mass.
    ///
    /// A static body has zero inverse mass and therefore never moves; its
    /// partner takes the whole displacement.
    pub fn positional_correction(
        body_a: &mut RigidBody,
        body_b: &mut RigidBody,
        normal: Vec2,
        depth: f32,
    ) {
        let total = body_a.inverse_mass() + body_b.inverse_mass();
        if total <= f32::EPSILON {
            return;
        }
        let correction = normal * (depth / total);
        let (inverse_a, inverse_b) = (body_a.inverse_mass(), body_b.inverse_mass());
        body_a.polygon_mut().translate(-correction * inverse_a);
        body_b.polygon_mut().translate(correction * inverse_b);
    }

    /// Velocity of B relative to A at a world point.
    pub fn relative_velocity(body_a: &RigidBody, body_b: &RigidBody, point: Vec2) -> Vec2 {
        let v_a = point_velocity(
            body_a.velocity.linear,
            body_a.velocity.angular,
            point - body_a.centroid(),
        );
        let v_b = point_velocity(
            body_b.velocity.linear,
            body_b.velocity.angular,
            point - body_b.centroid(),
        );
        v_b - v_a
    }

    /// Scalar impulse along `direction` that scales the relative velocity there by `-scale`.
    fn solve_direction(
        body_a: &RigidBody,
        body_b: &RigidBody,
        point: Vec2,
        direction: Vec2,
        scale: f32,
    ) -> f32 {
        let r_a = (point - body_a.centroid()).perp_dot(direction);
        let r_b = (point - body_b.centroid()).perp_dot(direction);
        let effective = body_a.inverse_mass()
            + body_b.inverse_mass()
            + r_a * r_a * body_a.inverse_inertia()
            + r_b * r_b * body_b.inverse_inertia();
        if effective <= f32::EPSILON {
            return 0.0;
        }
        let speed = Self::relative_velocity(body_a, body_b, point).dot(direction);
        -scale * speed / effective
    }

    fn apply_impulse(
        body_a: &mut RigidBody,
        body_b: &mut RigidBody,
        point: Vec2,
        direction: Vec2,
        magnitude: f32,
    ) {
        if magnitude == 0.0 {
            return;
        }
        let impulse = direction * magnitude;
        body_a.apply_impulse(-impulse, point);
        body_b.apply_impulse(impulse, point);
    }
}
