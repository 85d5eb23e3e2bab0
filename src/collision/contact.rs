use glam::Vec2;

/// Up to two world-space contact points, rebuilt every sub-step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactPoints {
    points: [Vec2; 2],
    len: usize,
}

impl ContactPoints {
    pub const CAPACITY: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point. Points past capacity are ignored.
    pub fn push(&mut self, point: Vec2) {
        debug_assert!(self.len < Self::CAPACITY, "contact manifold overflow");
        if self.len < Self::CAPACITY {
            self.points[self.len] = point;
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Vec2] {
        &self.points[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec2> {
        self.as_slice().iter()
    }

    /// Point impulses are applied at: the midpoint of two contacts or the lone contact.
    pub fn resolution_point(&self) -> Option<Vec2> {
        match self.as_slice() {
            [] => None,
            [single] => Some(*single),
            [first, second, ..] => Some((*first + *second) * 0.5),
        }
    }
}

impl std::ops::Index<usize> for ContactPoints {
    type Output = Vec2;

    fn index(&self, index: usize) -> &Vec2 {
        &self.as_slice()[index]
    }
}

impl FromIterator<Vec2> for ContactPoints {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        let mut points = Self::new();
        for point in iter.into_iter().take(Self::CAPACITY) {
            points.push(point);
        }
        points
    }
}
