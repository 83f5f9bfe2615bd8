mod geometry;
mod multipoint;
mod options;
mod point;
mod polygon;
mod polyline;

use itertools::Itertools;

use crate::dimension::Dimension;
use crate::geometry::Point;

pub use geometry::{write_wkt, write_wkt_with, write_wkt_with_grouping, ToWkt};
pub use multipoint::multipoint_to_wkt;
pub use options::{CoordinateOutput, PolygonGrouping, RingGrouping, WktWriterOptions};
pub use point::point_to_wkt;
pub use polygon::polygon_to_wkt;
pub use polyline::polyline_to_wkt;

/// The dimension actually written for a geometry of dimension `dim`.
fn output_dim(dim: Dimension, coordinates: CoordinateOutput) -> Dimension {
    match coordinates {
        CoordinateOutput::Declared => dim,
        CoordinateOutput::Xy => Dimension::XY,
    }
}

/// The keyword and dimension suffix, followed by a space.
fn header(keyword: &str, dim: Dimension) -> String {
    match dim {
        Dimension::XY => format!("{keyword} "),
        _ => format!("{keyword} {} ", dim.wkt_suffix()),
    }
}

/// `X Y`, followed by Z and M when `dim` carries them.
fn coord_tuple(point: &Point, dim: Dimension) -> String {
    let mut tuple = format!("{} {}", point.x(), point.y());
    if dim.has_z() {
        tuple.push_str(&format!(" {}", point.z()));
    }
    if dim.has_m() {
        tuple.push_str(&format!(" {}", point.m()));
    }
    tuple
}

/// `(X Y,X Y,...)`, or an empty string when there are no points.
fn point_list(points: &[Point], dim: Dimension) -> String {
    if points.is_empty() {
        return String::new();
    }
    format!(
        "({})",
        points.iter().map(|p| coord_tuple(p, dim)).join(",")
    )
}

/// `(part,part,...)`, or an empty string when there are no parts.
fn part_list(parts: impl IntoIterator<Item = String>) -> String {
    let mut parts = parts.into_iter().peekable();
    if parts.peek().is_none() {
        return String::new();
    }
    format!("({})", parts.join(","))
}
