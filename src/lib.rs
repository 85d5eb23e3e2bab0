//! Convex Impulse – a 2D rigid-body engine for convex polygons.
//!
//! Each sub-step integrates a body, tests it against every other body with the
//! separating-axis theorem, clips a contact manifold of up to two points,
//! pushes the pair apart and applies a single restitution + friction impulse.
//! There is no broad phase, no island building and no warm starting; the
//! all-pairs sweep is meant for the few dozen bodies of a creature sandbox.
//!
//! ```
//! use convex_impulse::{Material, PhysicsWorld, Polygon, RigidBody, Vec2};
//!
//! let mut world = PhysicsWorld::default();
//! let floor = world.add_body(RigidBody::new(
//!     Material::ground(),
//!     Polygon::rectangle(Vec2::new(0.0, 10.0), Vec2::new(20.0, 1.0)),
//! ));
//! let crate_ = world.add_body(RigidBody::new(
//!     Material::default(),
//!     Polygon::rectangle(Vec2::new(0.0, 8.5), Vec2::splat(0.5)),
//! ));
//! world.step_frame().unwrap();
//! assert!(world.body(crate_).unwrap().centroid().y <= 8.6);
//! assert_eq!(world.body(floor).unwrap().centroid(), Vec2::new(0.0, 10.0));
//! ```

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use collision::{
    clipping::contact_points,
    contact::ContactPoints,
    queries::{boundary_contact, contains_point, BoundaryHit},
    sat::{Penetration, SatResult},
};
pub use config::WorldConfig;
pub use crate::core::{
    associations::AssociationGraph,
    constraints::Joint,
    polygon::Polygon,
    rigidbody::RigidBody,
    types::{BodySnapshot, Material, Velocity},
};
pub use dynamics::{
    integrator::Integrator,
    solver::{AppliedImpulse, ContactManifold, ImpulseSolver},
};
pub use error::{PhysicsError, PhysicsResult};
pub use utils::allocator::{Arena, BodyId};
pub use world::{PhysicsWorld, StepReport};
