//! The capability the WKT reader uses to create and assemble host geometries.

mod memory;

pub use memory::{MemoryProvider, ProviderError};

use crate::geometry::{GeometryKind, RingRole};

/// Creates and mutates geometries on behalf of the WKT reader.
///
/// The reader never touches a geometry except through this trait, so a host geometry engine
/// can be plugged in by implementing it. [MemoryProvider] is an implementation producing the
/// crate's own [Geometry][crate::geometry::Geometry] values.
///
/// Every method takes `&self`: a provider that is also `Sync` may serve several readers at once,
/// each working on its own freshly created geometries.
pub trait GeometryProvider {
    /// Handle to a geometry owned by the caller.
    type Geometry;

    /// Error raised by the host. It reaches the caller of
    /// [read_wkt][crate::read_wkt] unchanged inside [WktError::Provider][crate::WktError::Provider].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create an empty geometry of the given kind.
    fn create(&self, kind: GeometryKind) -> Result<Self::Geometry, Self::Error>;

    /// Set the X and Y of a point.
    fn put_coords(&self, point: &mut Self::Geometry, x: f64, y: f64) -> Result<(), Self::Error>;

    fn set_z(&self, point: &mut Self::Geometry, z: f64) -> Result<(), Self::Error>;

    fn set_m(&self, point: &mut Self::Geometry, m: f64) -> Result<(), Self::Error>;

    /// Append a point to a multipoint, path or ring.
    fn add_point(
        &self,
        collection: &mut Self::Geometry,
        point: Self::Geometry,
    ) -> Result<(), Self::Error>;

    /// Append a part to a polyline, polygon, multipatch or geometry bag.
    fn add_geometry(
        &self,
        collection: &mut Self::Geometry,
        part: Self::Geometry,
    ) -> Result<(), Self::Error>;

    /// Tag the ring at `ring_index` of a multipatch as an outer or inner ring.
    fn set_ring_role(
        &self,
        multipatch: &mut Self::Geometry,
        ring_index: usize,
        role: RingRole,
    ) -> Result<(), Self::Error>;

    /// Topologically clean up a freshly assembled geometry.
    fn normalize(&self, geometry: &mut Self::Geometry) -> Result<(), Self::Error>;

    fn set_z_aware(&self, geometry: &mut Self::Geometry, aware: bool) -> Result<(), Self::Error>;

    fn set_m_aware(&self, geometry: &mut Self::Geometry, aware: bool) -> Result<(), Self::Error>;
}
