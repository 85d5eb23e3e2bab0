//! Core types describing bodies, their geometry, and the relations between them.

pub mod associations;
pub mod constraints;
pub mod polygon;
pub mod rigidbody;
pub mod types;

pub use associations::AssociationGraph;
pub use constraints::Joint;
pub use polygon::Polygon;
pub use rigidbody::RigidBody;
pub use types::{BodySnapshot, Material, MaterialPairProperties, Velocity};
