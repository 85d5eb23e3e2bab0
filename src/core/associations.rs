use std::collections::HashSet;

use crate::utils::allocator::BodyId;

/// Symmetric relation of body pairs that never collide with each other.
///
/// Used for the limbs of one articulated creature, which overlap on purpose at
/// their joints. Populate it before the first sweep that includes both bodies.
#[derive(Debug, Clone, Default)]
pub struct AssociationGraph {
    pairs: HashSet<(BodyId, BodyId)>,
}

impl AssociationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(a: BodyId, b: BodyId) -> (BodyId, BodyId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Returns `false` if the pair was already present or names one body twice.
    pub fn associate(&mut self, a: BodyId, b: BodyId) -> bool {
        if a == b {
            return false;
        }
        self.pairs.insert(Self::key(a, b))
    }

    /// Associates every body in `group` with every other one.
    pub fn associate_group(&mut self, group: &[BodyId]) {
        for (i, &a) in group.iter().enumerate() {
            for &b in &group[i + 1..] {
                self.associate(a, b);
            }
        }
    }

    pub fn are_associated(&self, a: BodyId, b: BodyId) -> bool {
        self.pairs.contains(&Self::key(a, b))
    }

    /// Drops every pair that mentions `id`.
    pub fn forget(&mut self, id: BodyId) {
        self.pairs.retain(|&(a, b)| a != id && b != id);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
