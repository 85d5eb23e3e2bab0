//! Global configuration for the engine.
//!
//! The constants are the authoritative defaults. [`WorldConfig`] mirrors the
//! tunable ones and can be loaded from TOML; any key missing from the document
//! falls back to the constant of the same name.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, PhysicsResult};

/// Default gravity (Y-down screen space, units per second squared).
pub const DEFAULT_GRAVITY: [f32; 2] = [0.0, 9.81];

/// Default duration of one rendered frame (in seconds).
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;

/// Number of equal physics sub-steps a frame is divided into.
pub const DEFAULT_SUBSTEPS: u32 = 8;

/// Inverse inertia is this multiple of inverse mass for every dynamic body.
pub const DEFAULT_INVERSE_INERTIA_SCALE: f32 = 0.05;

/// Multiplier applied to the smaller of the two friction coefficients of a contact.
pub const FRICTION_DISCOUNT: f32 = 0.5;

/// Joint impulses bounce perfectly.
pub const JOINT_RESTITUTION: f32 = 1.0;

/// Joint vectors shorter than this skip correction for the step.
pub const JOINT_EPSILON: f32 = 1e-6;

/// A query `y` closer than this to a vertex `y` is treated as vertex-aligned.
pub const RAY_VERTEX_TOLERANCE: f32 = 1e-3;

/// Offset applied to a vertex-aligned query `y` before counting crossings.
pub const RAY_PERTURBATION: f32 = 0.1;

/// Tunable world parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub gravity: Vec2,
    /// Duration of one frame handed to [`crate::world::PhysicsWorld::step_frame`].
    pub time_step: f32,
    pub substeps: u32,
    pub inverse_inertia_scale: f32,
    /// Wall-clock budget for one frame; exceeding it logs a warning.
    pub frame_budget_ms: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::from_array(DEFAULT_GRAVITY),
            time_step: DEFAULT_TIME_STEP,
            substeps: DEFAULT_SUBSTEPS,
            inverse_inertia_scale: DEFAULT_INVERSE_INERTIA_SCALE,
            frame_budget_ms: 16.0,
        }
    }
}

impl WorldConfig {
    /// Parses a TOML document and validates the result.
    pub fn from_toml_str(source: &str) -> PhysicsResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|err| PhysicsError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        if self.substeps == 0 {
            return Err(PhysicsError::InvalidConfig(
                "substeps must be at least 1".into(),
            ));
        }
        if !(self.time_step > 0.0 && self.time_step.is_finite()) {
            return Err(PhysicsError::InvalidConfig(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        if self.inverse_inertia_scale < 0.0 {
            return Err(PhysicsError::InvalidConfig(format!(
                "inverse_inertia_scale must not be negative, got {}",
                self.inverse_inertia_scale
            )));
        }
        Ok(())
    }

    /// Length of one sub-step.
    pub fn substep_dt(&self) -> f32 {
        self.time_step / self.substeps.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = WorldConfig::from_toml_str("substeps = 4\ngravity = [0.0, 20.0]\n")
            .expect("valid config");
        assert_eq!(config.substeps, 4);
        assert_eq!(config.gravity, Vec2::new(0.0, 20.0));
        assert_eq!(config.time_step, DEFAULT_TIME_STEP);
        assert_eq!(config.inverse_inertia_scale, DEFAULT_INVERSE_INERTIA_SCALE);
    }

    #[test]
    fn zero_substeps_is_rejected() {
        let err = WorldConfig::from_toml_str("substeps = 0").unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(WorldConfig::from_toml_str("substeps = \"many\"").is_err());
    }
}
