use serde::{Deserialize, Serialize};

use crate::algorithm::orientation;
use crate::dimension::Dimension;
use crate::geometry::Ring;

/// The part a ring plays in the area it bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RingRole {
    /// An exterior boundary.
    Outer,
    /// A hole inside an exterior boundary.
    Inner,
}

/// An unordered bag of [Ring]s.
///
/// There is no separate multi-polygon: a polygon with several exterior rings is still one
/// `Polygon`. Whether a ring is an exterior or a hole is encoded by its orientation, clockwise
/// for [RingRole::Outer] and counter-clockwise for [RingRole::Inner].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    rings: Vec<Ring>,
    dim: Dimension,
}

impl Polygon {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self {
            rings,
            dim: Dimension::XY,
        }
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn add_ring(&mut self, ring: Ring) {
        self.rings.push(ring);
    }

    /// The role of the `i`th ring, read from its orientation.
    pub fn ring_role(&self, i: usize) -> Option<RingRole> {
        self.rings.get(i).map(orientation::ring_role)
    }

    /// The number of rings oriented as exterior boundaries.
    pub fn exterior_ring_count(&self) -> usize {
        self.rings
            .iter()
            .filter(|r| orientation::ring_role(r) == RingRole::Outer)
            .count()
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn set_z_aware(&mut self, aware: bool) {
        self.dim = self.dim.with_z(aware);
        self.rings.iter_mut().for_each(|r| r.set_z_aware(aware));
    }

    pub fn set_m_aware(&mut self, aware: bool) {
        self.dim = self.dim.with_m(aware);
        self.rings.iter_mut().for_each(|r| r.set_m_aware(aware));
    }

    /// Close every ring, drop degenerate rings and orient each ring by its nesting depth:
    /// rings inside an even number of other rings become clockwise exteriors, the rest
    /// counter-clockwise holes.
    pub(crate) fn simplify(&mut self) {
        for ring in self.rings.iter_mut() {
            ring.dedup_consecutive();
            ring.close();
        }
        self.rings.retain(|r| r.num_points() >= 4);

        let depths: Vec<usize> = (0..self.rings.len())
            .map(|i| orientation::nesting_depth(&self.rings, i))
            .collect();
        for (ring, depth) in self.rings.iter_mut().zip(depths) {
            let want_clockwise = depth % 2 == 0;
            if ring.is_clockwise() != want_clockwise {
                ring.reverse();
            }
        }
    }
}

/// A collection of [Ring]s, each explicitly tagged with a [RingRole].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPatch {
    rings: Vec<Ring>,
    roles: Vec<RingRole>,
    dim: Dimension,
}

impl MultiPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// Append a ring, tagged as [RingRole::Outer] until told otherwise.
    pub fn add_ring(&mut self, ring: Ring) {
        self.rings.push(ring);
        self.roles.push(RingRole::Outer);
    }

    pub fn ring_role(&self, i: usize) -> Option<RingRole> {
        self.roles.get(i).copied()
    }

    /// Tag the `i`th ring. Returns `false` when there is no such ring.
    pub fn set_ring_role(&mut self, i: usize, role: RingRole) -> bool {
        match self.roles.get_mut(i) {
            Some(slot) => {
                *slot = role;
                true
            }
            None => false,
        }
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn set_z_aware(&mut self, aware: bool) {
        self.dim = self.dim.with_z(aware);
        self.rings.iter_mut().for_each(|r| r.set_z_aware(aware));
    }

    pub fn set_m_aware(&mut self, aware: bool) {
        self.dim = self.dim.with_m(aware);
        self.rings.iter_mut().for_each(|r| r.set_m_aware(aware));
    }

    pub(crate) fn simplify(&mut self) {
        self.rings.iter_mut().for_each(Ring::close);
    }
}
