//! Simulation dynamics: integration and the impulse solver.

pub mod integrator;
pub mod solver;

pub use integrator::Integrator;
pub use solver::{AppliedImpulse, ContactManifold, ImpulseSolver, SolverStepMetrics};
