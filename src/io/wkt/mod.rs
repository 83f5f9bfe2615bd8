//! Reading and writing OGC Well-Known Text.
//!
//! The reader tokenizes the whole string into a [WktText] tree, then walks the tree to create
//! geometries through a [GeometryProvider](crate::provider::GeometryProvider). The writer
//! renders a [Geometry](crate::geometry::Geometry) directly.

mod reader;
mod writer;

pub use reader::{build_geometry, read_wkt, WktText, WktToken, WktType};
pub use writer::{
    multipoint_to_wkt, point_to_wkt, polygon_to_wkt, polyline_to_wkt, write_wkt, write_wkt_with,
    write_wkt_with_grouping, CoordinateOutput, PolygonGrouping, RingGrouping, ToWkt,
    WktWriterOptions,
};
