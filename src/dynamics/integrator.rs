use glam::Vec2;

use crate::core::rigidbody::RigidBody;

/// Explicit Euler integration for a single body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integrator;

impl Integrator {
    /// Applies accumulated acceleration, then moves the polygon by the new velocity.
    ///
    /// Static bodies ignore acceleration but still follow whatever velocity the
    /// caller gave them, which is how kinematic platforms move.
    pub fn integrate_linear(body: &mut RigidBody, dt: f32) {
        if !body.is_static() {
            body.velocity.linear += body.acceleration * dt;
        }
        body.acceleration = Vec2::ZERO;

        let delta = body.velocity.linear * dt;
        body.polygon_mut().translate(delta);
    }

    /// Applies accumulated angular acceleration and spins the polygon about its centroid.
    pub fn integrate_angular(body: &mut RigidBody, dt: f32) {
        if body.is_static() {
            return;
        }
        body.velocity.angular += body.angular_acceleration * dt;
        body.angular_acceleration = 0.0;

        let degrees = (body.velocity.angular * dt).to_degrees();
        body.polygon_mut().rotate(degrees);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{polygon::Polygon, types::Material};
    use approx::assert_abs_diff_eq;

    fn unit_body() -> RigidBody {
        RigidBody::new(Material::default(), Polygon::rectangle(Vec2::ZERO, Vec2::ONE))
    }

    #[test]
    fn acceleration_is_consumed_once() {
        let mut body = unit_body();
        body.apply_acceleration(Vec2::new(0.0, 10.0));

        Integrator::integrate_linear(&mut body, 0.1);
        assert_abs_diff_eq!(body.velocity.linear.y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(body.centroid().y, 0.1, epsilon = 1e-6);

        Integrator::integrate_linear(&mut body, 0.1);
        assert_abs_diff_eq!(body.velocity.linear.y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(body.centroid().y, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn angular_velocity_rotates_polygon() {
        let mut body = unit_body();
        body.velocity.angular = std::f32::consts::PI;
        Integrator::integrate_angular(&mut body, 0.5);
        assert_abs_diff_eq!(body.angle(), 90.0, epsilon = 1e-3);
    }

    #[test]
    fn kinematic_static_body_translates_without_spinning() {
        let mut platform =
            RigidBody::new_static(Material::default(), Polygon::rectangle(Vec2::ZERO, Vec2::ONE));
        platform.set_velocity(Vec2::new(2.0, 0.0), 5.0);
        platform.apply_acceleration(Vec2::new(0.0, 50.0));

        Integrator::integrate_linear(&mut platform, 0.5);
        Integrator::integrate_angular(&mut platform, 0.5);

        assert_eq!(platform.centroid(), Vec2::new(1.0, 0.0));
        assert_eq!(platform.angle(), 0.0);
    }
}
