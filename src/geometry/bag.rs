use crate::dimension::Dimension;
use crate::geometry::Geometry;

/// A heterogeneous collection of geometries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryBag {
    geometries: Vec<Geometry>,
    dim: Dimension,
}

impl GeometryBag {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self {
            geometries,
            dim: Dimension::XY,
        }
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn add_geometry(&mut self, geometry: Geometry) {
        self.geometries.push(geometry);
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// Mark the bag itself as Z-aware (or not). Members keep their own dimension.
    pub fn set_z_aware(&mut self, aware: bool) {
        self.dim = self.dim.with_z(aware);
    }

    /// Mark the bag itself as M-aware (or not). Members keep their own dimension.
    pub fn set_m_aware(&mut self, aware: bool) {
        self.dim = self.dim.with_m(aware);
    }
}
