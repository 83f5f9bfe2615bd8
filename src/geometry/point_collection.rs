use itertools::Itertools;

use crate::dimension::Dimension;
use crate::geometry::Point;

macro_rules! impl_point_collection {
    ($type:ident) => {
        impl $type {
            pub fn new(points: Vec<Point>) -> Self {
                Self {
                    points,
                    dim: Dimension::XY,
                }
            }

            pub fn points(&self) -> &[Point] {
                &self.points
            }

            pub fn num_points(&self) -> usize {
                self.points.len()
            }

            pub fn is_empty(&self) -> bool {
                self.points.is_empty()
            }

            pub fn add_point(&mut self, point: Point) {
                self.points.push(point);
            }

            pub fn dim(&self) -> Dimension {
                self.dim
            }

            /// Mark this collection and every point in it as Z-aware (or not).
            pub fn set_z_aware(&mut self, aware: bool) {
                self.dim = self.dim.with_z(aware);
                self.points.iter_mut().for_each(|p| p.set_z_aware(aware));
            }

            /// Mark this collection and every point in it as M-aware (or not).
            pub fn set_m_aware(&mut self, aware: bool) {
                self.dim = self.dim.with_m(aware);
                self.points.iter_mut().for_each(|p| p.set_m_aware(aware));
            }
        }

        impl From<Vec<Point>> for $type {
            fn from(value: Vec<Point>) -> Self {
                Self::new(value)
            }
        }
    };
}

/// An open, ordered chain of points forming one part of a [Polyline][super::Polyline].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    points: Vec<Point>,
    dim: Dimension,
}

/// A closed, ordered chain of points forming one boundary of a [Polygon][super::Polygon] or
/// [MultiPatch][super::MultiPatch].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ring {
    points: Vec<Point>,
    dim: Dimension,
}

/// An unordered set of points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Multipoint {
    points: Vec<Point>,
    dim: Dimension,
}

impl_point_collection!(Path);
impl_point_collection!(Ring);
impl_point_collection!(Multipoint);

impl Path {
    /// Remove runs of points sharing one X/Y location, keeping the first of each run.
    pub(crate) fn dedup_consecutive(&mut self) {
        self.points.dedup_by(|a, b| a.xy_eq(b));
    }
}

impl Ring {
    /// Remove runs of points sharing one X/Y location, keeping the first of each run.
    pub(crate) fn dedup_consecutive(&mut self) {
        self.points.dedup_by(|a, b| a.xy_eq(b));
    }

    pub(crate) fn to_line_string(&self) -> geo::LineString {
        self.points.iter().map(geo::Coord::from).collect()
    }

    /// Whether the last point repeats the first.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first.xy_eq(last),
            _ => false,
        }
    }

    /// Append a copy of the first point when the ring is not already closed.
    pub fn close(&mut self) {
        if !self.is_closed() {
            if let Some(first) = self.points.first().copied() {
                self.points.push(first);
            }
        }
    }

    /// Reverse the traversal direction of this ring.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Whether this ring runs clockwise, the host convention for an outer boundary.
    pub fn is_clockwise(&self) -> bool {
        crate::algorithm::orientation::is_clockwise(self)
    }
}

impl Multipoint {
    /// Drop points repeating an earlier X/Y location, keeping first-occurrence order.
    pub(crate) fn dedup(&mut self) {
        self.points = std::mem::take(&mut self.points)
            .into_iter()
            .unique_by(Point::xy_key)
            .collect();
    }
}
