//! The host-side geometry tree that WKT is read into and written from.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

mod bag;
mod point;
mod point_collection;
mod polygon;
mod polyline;

pub use bag::GeometryBag;
pub use point::Point;
pub use point_collection::{Multipoint, Path, Ring};
pub use polygon::{MultiPatch, Polygon, RingRole};
pub use polyline::Polyline;

/// The closed set of primitives a [GeometryProvider][crate::provider::GeometryProvider] can
/// create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    Path,
    Ring,
    Multipoint,
    Polyline,
    Polygon,
    MultiPatch,
    GeometryBag,
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeometryKind::Point => "Point",
            GeometryKind::Path => "Path",
            GeometryKind::Ring => "Ring",
            GeometryKind::Multipoint => "Multipoint",
            GeometryKind::Polyline => "Polyline",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPatch => "MultiPatch",
            GeometryKind::GeometryBag => "GeometryBag",
        };
        write!(f, "{name}")
    }
}

/// A geometry of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    Path(Path),
    Ring(Ring),
    Multipoint(Multipoint),
    Polyline(Polyline),
    Polygon(Polygon),
    MultiPatch(MultiPatch),
    GeometryBag(GeometryBag),
}

macro_rules! impl_dispatch {
    ($self:ident, $geom:ident => $expr:expr) => {
        match $self {
            Geometry::Point($geom) => $expr,
            Geometry::Path($geom) => $expr,
            Geometry::Ring($geom) => $expr,
            Geometry::Multipoint($geom) => $expr,
            Geometry::Polyline($geom) => $expr,
            Geometry::Polygon($geom) => $expr,
            Geometry::MultiPatch($geom) => $expr,
            Geometry::GeometryBag($geom) => $expr,
        }
    };
}

impl Geometry {
    /// An empty geometry of the given kind.
    pub fn new_empty(kind: GeometryKind) -> Self {
        match kind {
            GeometryKind::Point => Geometry::Point(Point::default()),
            GeometryKind::Path => Geometry::Path(Path::default()),
            GeometryKind::Ring => Geometry::Ring(Ring::default()),
            GeometryKind::Multipoint => Geometry::Multipoint(Multipoint::default()),
            GeometryKind::Polyline => Geometry::Polyline(Polyline::default()),
            GeometryKind::Polygon => Geometry::Polygon(Polygon::default()),
            GeometryKind::MultiPatch => Geometry::MultiPatch(MultiPatch::default()),
            GeometryKind::GeometryBag => Geometry::GeometryBag(GeometryBag::default()),
        }
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::Path(_) => GeometryKind::Path,
            Geometry::Ring(_) => GeometryKind::Ring,
            Geometry::Multipoint(_) => GeometryKind::Multipoint,
            Geometry::Polyline(_) => GeometryKind::Polyline,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPatch(_) => GeometryKind::MultiPatch,
            Geometry::GeometryBag(_) => GeometryKind::GeometryBag,
        }
    }

    pub fn dim(&self) -> Dimension {
        impl_dispatch!(self, geom => geom.dim())
    }

    /// Mark this geometry as Z-aware (or not), along with its parts and points. A geometry
    /// bag's members are left alone.
    pub fn set_z_aware(&mut self, aware: bool) {
        impl_dispatch!(self, geom => geom.set_z_aware(aware))
    }

    /// Mark this geometry as M-aware (or not), along with its parts and points. A geometry
    /// bag's members are left alone.
    pub fn set_m_aware(&mut self, aware: bool) {
        impl_dispatch!(self, geom => geom.set_m_aware(aware))
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<Multipoint> for Geometry {
    fn from(value: Multipoint) -> Self {
        Geometry::Multipoint(value)
    }
}

impl From<Polyline> for Geometry {
    fn from(value: Polyline) -> Self {
        Geometry::Polyline(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<GeometryBag> for Geometry {
    fn from(value: GeometryBag) -> Self {
        Geometry::GeometryBag(value)
    }
}
