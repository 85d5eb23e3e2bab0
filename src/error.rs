//! Error types for the engine.
//!
//! Only genuinely invalid input surfaces as an error. Degenerate edges, empty
//! manifolds and zero-length displacement vectors are ordinary outcomes and are
//! reported through `Option`/enum variants instead.

use thiserror::Error;

use crate::utils::allocator::BodyId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhysicsError {
    /// A polygon with fewer than two vertices reached the separating-axis test.
    #[error("degenerate polygon: needs at least 2 vertices, got {vertex_count}")]
    DegeneratePolygon { vertex_count: usize },

    /// A handle that was never issued or whose body has been removed.
    #[error("unknown body {0}")]
    UnknownBody(BodyId),

    /// Configuration failed to parse or holds out-of-range values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenient result alias used across the crate.
pub type PhysicsResult<T> = Result<T, PhysicsError>;
