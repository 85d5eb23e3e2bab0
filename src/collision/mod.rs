//! Collision detection: separating-axis test, manifold clipping, contact points, point queries.

pub mod clipping;
pub mod contact;
pub mod queries;
pub mod sat;

pub use clipping::contact_points;
pub use contact::ContactPoints;
pub use queries::{boundary_contact, contains_point, BoundaryHit};
pub use sat::{Penetration, SatResult};
