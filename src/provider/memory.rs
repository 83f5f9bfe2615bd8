use thiserror::Error;

use crate::geometry::{Geometry, GeometryKind, RingRole};
use crate::provider::GeometryProvider;

/// Errors raised by [MemoryProvider].
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProviderError {
    /// The operation does not apply to a geometry of this kind.
    #[error("Incorrect geometry type for {operation}: {kind}")]
    IncorrectGeometryType {
        operation: &'static str,
        kind: GeometryKind,
    },

    /// A ring index past the end of a multipatch.
    #[error("Ring index {index} out of range for multipatch with {len} rings")]
    RingIndexOutOfRange { index: usize, len: usize },
}

fn incorrect(operation: &'static str, geometry: &Geometry) -> ProviderError {
    ProviderError::IncorrectGeometryType {
        operation,
        kind: geometry.kind(),
    }
}

/// A [GeometryProvider] building the crate's own in-memory [Geometry] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryProvider;

impl MemoryProvider {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryProvider for MemoryProvider {
    type Geometry = Geometry;
    type Error = ProviderError;

    fn create(&self, kind: GeometryKind) -> Result<Geometry, ProviderError> {
        Ok(Geometry::new_empty(kind))
    }

    fn put_coords(&self, point: &mut Geometry, x: f64, y: f64) -> Result<(), ProviderError> {
        match point {
            Geometry::Point(p) => {
                p.put_coords(x, y);
                Ok(())
            }
            other => Err(incorrect("put_coords", other)),
        }
    }

    fn set_z(&self, point: &mut Geometry, z: f64) -> Result<(), ProviderError> {
        match point {
            Geometry::Point(p) => {
                p.set_z(z);
                Ok(())
            }
            other => Err(incorrect("set_z", other)),
        }
    }

    fn set_m(&self, point: &mut Geometry, m: f64) -> Result<(), ProviderError> {
        match point {
            Geometry::Point(p) => {
                p.set_m(m);
                Ok(())
            }
            other => Err(incorrect("set_m", other)),
        }
    }

    fn add_point(&self, collection: &mut Geometry, point: Geometry) -> Result<(), ProviderError> {
        let point = match point {
            Geometry::Point(point) => point,
            other => return Err(incorrect("add_point", &other)),
        };
        match collection {
            Geometry::Multipoint(c) => c.add_point(point),
            Geometry::Path(c) => c.add_point(point),
            Geometry::Ring(c) => c.add_point(point),
            other => return Err(incorrect("add_point", other)),
        }
        Ok(())
    }

    fn add_geometry(&self, collection: &mut Geometry, part: Geometry) -> Result<(), ProviderError> {
        match (collection, part) {
            (Geometry::Polyline(c), Geometry::Path(path)) => c.add_path(path),
            (Geometry::Polygon(c), Geometry::Ring(ring)) => c.add_ring(ring),
            (Geometry::MultiPatch(c), Geometry::Ring(ring)) => c.add_ring(ring),
            (Geometry::GeometryBag(c), part) => c.add_geometry(part),
            (Geometry::Polyline(_) | Geometry::Polygon(_) | Geometry::MultiPatch(_), part) => {
                return Err(incorrect("add_geometry", &part))
            }
            (other, _) => return Err(incorrect("add_geometry", other)),
        }
        Ok(())
    }

    fn set_ring_role(
        &self,
        multipatch: &mut Geometry,
        ring_index: usize,
        role: RingRole,
    ) -> Result<(), ProviderError> {
        let patch = match multipatch {
            Geometry::MultiPatch(patch) => patch,
            other => return Err(incorrect("set_ring_role", other)),
        };
        if patch.set_ring_role(ring_index, role) {
            Ok(())
        } else {
            Err(ProviderError::RingIndexOutOfRange {
                index: ring_index,
                len: patch.num_rings(),
            })
        }
    }

    fn normalize(&self, geometry: &mut Geometry) -> Result<(), ProviderError> {
        match geometry {
            Geometry::Multipoint(g) => g.dedup(),
            Geometry::Polyline(g) => g.simplify(),
            Geometry::Polygon(g) => g.simplify(),
            Geometry::MultiPatch(g) => g.simplify(),
            Geometry::Point(_) | Geometry::Path(_) | Geometry::Ring(_) => {}
            Geometry::GeometryBag(_) => {}
        }
        Ok(())
    }

    fn set_z_aware(&self, geometry: &mut Geometry, aware: bool) -> Result<(), ProviderError> {
        geometry.set_z_aware(aware);
        Ok(())
    }

    fn set_m_aware(&self, geometry: &mut Geometry, aware: bool) -> Result<(), ProviderError> {
        geometry.set_m_aware(aware);
        Ok(())
    }
}
