use glam::Vec2;
use log::debug;

use crate::{
    collision::{
        clipping::contact_points,
        contact::ContactPoints,
        queries::contains_point,
        sat::{self, Penetration},
    },
    config::{WorldConfig, JOINT_EPSILON},
    core::{
        associations::AssociationGraph,
        constraints::Joint,
        rigidbody::RigidBody,
        types::BodySnapshot,
    },
    dynamics::{
        integrator::Integrator,
        solver::{ImpulseSolver, SolverStepMetrics},
    },
    error::{PhysicsError, PhysicsResult},
    utils::{
        allocator::{Arena, BodyId},
        logging::{warn_if_frame_budget_exceeded, ScopedTimer},
    },
};

/// What happened between two bodies during one sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairContact {
    pub penetration: Penetration,
    pub points: ContactPoints,
}

/// Counters gathered over one or more sub-steps.
#[derive(Debug, Default, Clone)]
pub struct StepReport {
    pub pairs_tested: usize,
    pub overlaps: usize,
    pub solver: SolverStepMetrics,
    /// Bodies whose broken flag flipped during the step.
    pub newly_broken: Vec<BodyId>,
}

impl StepReport {
    pub fn merge(&mut self, other: StepReport) {
        self.pairs_tested += other.pairs_tested;
        self.overlaps += other.overlaps;
        self.solver.merge(&other.solver);
        self.newly_broken.extend(other.newly_broken);
    }
}

/// Owns every body and runs the all-pairs sweep.
pub struct PhysicsWorld {
    pub bodies: Arena<RigidBody>,
    pub associations: AssociationGraph,
    pub joints: Vec<Joint>,
    pub config: WorldConfig,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::with_valid_config(WorldConfig::default())
    }
}

impl PhysicsWorld {
    /// Builds an empty world, rejecting configs that `WorldConfig::validate` refuses.
    pub fn new(config: WorldConfig) -> PhysicsResult<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: WorldConfig) -> Self {
        Self {
            bodies: Arena::new(),
            associations: AssociationGraph::new(),
            joints: Vec::new(),
            config,
        }
    }

    /// Stores a body. Its inverse inertia is re-derived from
    /// `config.inverse_inertia_scale`.
    pub fn add_body(&mut self, mut body: RigidBody) -> BodyId {
        body.set_inertia_scale(self.config.inverse_inertia_scale);
        let id = self.bodies.insert(body);
        if let Some(stored) = self.bodies.get_mut(id) {
            stored.id = id;
        }
        id
    }

    /// Removes a body along with its associations and joints.
    pub fn remove_body(&mut self, id: BodyId) -> PhysicsResult<RigidBody> {
        let body = self.bodies.remove(id).ok_or(PhysicsError::UnknownBody(id))?;
        self.associations.forget(id);
        self.joints.retain(|joint| !joint.involves(id));
        Ok(body)
    }

    pub fn body(&self, id: BodyId) -> Option<&RigidBody> {
        self.bodies.get(id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        self.bodies.get_mut(id)
    }

    pub fn snapshot(&self, id: BodyId) -> Option<BodySnapshot> {
        self.bodies.get(id).map(RigidBody::snapshot)
    }

    pub fn snapshots(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(|(_, body)| body.snapshot()).collect()
    }

    /// Excludes the pair from collision testing for good.
    pub fn add_associated_body(&mut self, a: BodyId, b: BodyId) -> PhysicsResult<()> {
        self.ensure_exists(a)?;
        self.ensure_exists(b)?;
        self.associations.associate(a, b);
        Ok(())
    }

    pub fn add_associated_bodies(&mut self, id: BodyId, others: &[BodyId]) -> PhysicsResult<()> {
        for &other in others {
            self.add_associated_body(id, other)?;
        }
        Ok(())
    }

    /// Associates every body of a creature with every other one.
    pub fn add_associated_group(&mut self, group: &[BodyId]) -> PhysicsResult<()> {
        for &id in group {
            self.ensure_exists(id)?;
        }
        self.associations.associate_group(group);
        Ok(())
    }

    pub fn add_joint(&mut self, joint: Joint) -> PhysicsResult<()> {
        let (a, b) = joint.bodies();
        self.ensure_exists(a)?;
        self.ensure_exists(b)?;
        self.joints.push(joint);
        Ok(())
    }

    /// Topmost body whose polygon contains `point`.
    pub fn pick_body(&self, point: Vec2) -> Option<BodyId> {
        self.bodies
            .iter()
            .filter(|(_, body)| contains_point(point, body.vertices()))
            .map(|(id, _)| id)
            .last()
    }

    /// Advances one rendered frame as `config.substeps` equal sub-steps.
    pub fn step_frame(&mut self) -> PhysicsResult<StepReport> {
        let timer = ScopedTimer::new("world::frame");
        let dt = self.config.substep_dt();
        let mut report = StepReport::default();
        for _ in 0..self.config.substeps.max(1) {
            report.merge(self.step(dt)?);
        }
        warn_if_frame_budget_exceeded(
            timer.elapsed(),
            self.config.frame_budget_ms,
            report.pairs_tested,
        );
        Ok(report)
    }

    /// One sub-step: gravity, then every body in slot order, then joints.
    pub fn step(&mut self, dt: f32) -> PhysicsResult<StepReport> {
        let _timer = ScopedTimer::new("world::substep");
        let gravity = self.config.gravity;
        for body in self.bodies.iter_mut() {
            body.apply_acceleration(gravity);
        }

        let mut report = StepReport::default();
        for id in self.bodies.ids() {
            report.merge(self.step_body(id, dt)?);
        }
        self.solve_joints(&mut report.solver);
        Ok(report)
    }

    /// Integrates one body and resolves its collisions against every other body.
    ///
    /// Partners are mutated too: they receive their share of the positional
    /// correction and the opposite impulse.
    pub fn step_body(&mut self, id: BodyId, dt: f32) -> PhysicsResult<StepReport> {
        let mut report = StepReport::default();
        let body = self
            .bodies
            .get_mut(id)
            .ok_or(PhysicsError::UnknownBody(id))?;

        Integrator::integrate_linear(body, dt);
        if body.is_static() {
            return Ok(report);
        }
        Integrator::integrate_angular(body, dt);

        for other in self.bodies.ids() {
            if other == id || self.associations.are_associated(id, other) {
                continue;
            }
            let Some((body_a, body_b)) = self.bodies.get2_mut(id, other) else {
                continue;
            };
            report.pairs_tested += 1;
            if Self::collide_pair(body_a, body_b, &mut report)?.is_some() {
                report.overlaps += 1;
            }
        }
        Ok(report)
    }

    /// SAT, manifold, correction and impulses for one ordered pair.
    pub fn collide_pair(
        body_a: &mut RigidBody,
        body_b: &mut RigidBody,
        report: &mut StepReport,
    ) -> PhysicsResult<Option<PairContact>> {
        let Some(penetration) = sat::test(body_a.polygon(), body_b.polygon())?.penetration()
        else {
            return Ok(None);
        };

        Self::check_fragility(body_a, body_b, report);
        Self::check_fragility(body_b, body_a, report);

        let points = contact_points(body_a.vertices(), body_b.vertices(), penetration.normal);
        ImpulseSolver::positional_correction(
            body_a,
            body_b,
            penetration.normal,
            penetration.depth,
        );
        if let Some(applied) =
            ImpulseSolver::resolve_contact(body_a, body_b, &points, penetration.normal)
        {
            report.solver.record_contact(applied);
        }

        Ok(Some(PairContact {
            penetration,
            points,
        }))
    }

    fn check_fragility(body: &mut RigidBody, partner: &RigidBody, report: &mut StepReport) {
        if body.is_fragile && partner.is_floor && body.mark_broken() {
            debug!("body {} broke on floor {}", body.id, partner.id);
            report.newly_broken.push(body.id);
        }
    }

    fn solve_joints(&mut self, metrics: &mut SolverStepMetrics) {
        for joint in &self.joints {
            let (id_a, id_b) = joint.bodies();
            let Some((body_a, body_b)) = self.bodies.get2_mut(id_a, id_b) else {
                continue;
            };

            let anchors = joint.anchors(body_a.vertices(), body_b.vertices());
            let (anchor_a, anchor_b, rest) = match anchors {
                Some((anchor_a, anchor_b)) => (anchor_a, anchor_b, 0.0),
                None => match *joint {
                    Joint::Distance { distance, .. } => {
                        (body_a.centroid(), body_b.centroid(), distance)
                    }
                    Joint::Pin { .. } => continue,
                },
            };

            let delta = anchor_b - anchor_a;
            let length = delta.length();
            if length < JOINT_EPSILON {
                debug!("joint {id_a} -> {id_b} has no direction, skipping");
                continue;
            }
            let normal = delta / length;

            let (inverse_a, inverse_b) = (body_a.inverse_mass(), body_b.inverse_mass());
            let total = inverse_a + inverse_b;
            if total <= f32::EPSILON {
                continue;
            }
            let error = normal * ((length - rest) / total);
            body_a.polygon_mut().translate(error * inverse_a);
            body_b.polygon_mut().translate(-error * inverse_b);

            let anchor = (anchor_a + anchor_b) * 0.5;
            let impulse = ImpulseSolver::resolve_joint(body_a, body_b, anchor, normal);
            metrics.record_joint(impulse);
        }
    }

    fn ensure_exists(&self, id: BodyId) -> PhysicsResult<()> {
        if self.bodies.contains(id) {
            Ok(())
        } else {
            Err(PhysicsError::UnknownBody(id))
        }
    }
}
