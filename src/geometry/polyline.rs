use crate::dimension::Dimension;
use crate::geometry::Path;

/// A collection of [Path]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    paths: Vec<Path>,
    dim: Dimension,
}

impl Polyline {
    pub fn new(paths: Vec<Path>) -> Self {
        Self {
            paths,
            dim: Dimension::XY,
        }
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn num_paths(&self) -> usize {
        self.paths.len()
    }

    pub fn add_path(&mut self, path: Path) {
        self.paths.push(path);
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn set_z_aware(&mut self, aware: bool) {
        self.dim = self.dim.with_z(aware);
        self.paths.iter_mut().for_each(|p| p.set_z_aware(aware));
    }

    pub fn set_m_aware(&mut self, aware: bool) {
        self.dim = self.dim.with_m(aware);
        self.paths.iter_mut().for_each(|p| p.set_m_aware(aware));
    }

    /// Remove repeated vertices and drop paths that no longer span two points.
    pub(crate) fn simplify(&mut self) {
        self.paths.iter_mut().for_each(Path::dedup_consecutive);
        self.paths.retain(|p| p.num_points() >= 2);
    }
}
