use tracing::debug;

use crate::error::{WktError, WktResult};
use crate::geometry::Geometry;
use crate::io::wkt::writer::{
    multipoint_to_wkt, point_to_wkt, polygon_to_wkt, polyline_to_wkt, CoordinateOutput,
    RingGrouping, WktWriterOptions,
};

/// Write a geometry as WKT with the default [WktWriterOptions].
///
/// Paths, rings and multipatches have no WKT rendering here and are written as an empty
/// string. Geometry bags are not supported.
///
/// ```
/// use geowkt::geometry::{Geometry, Point};
///
/// let point = Geometry::Point(Point::new(30., 10.));
/// assert_eq!(geowkt::write_wkt(&point).unwrap(), "POINT (30 10)");
/// ```
pub fn write_wkt(geometry: &Geometry) -> WktResult<String> {
    write_wkt_with(geometry, &WktWriterOptions::default())
}

pub fn write_wkt_with(geometry: &Geometry, options: &WktWriterOptions) -> WktResult<String> {
    write_wkt_with_grouping(geometry, options.coordinates, &options.polygons)
}

/// Write a geometry as WKT, deciding polygon and multipolygon output with a caller-supplied
/// [RingGrouping].
pub fn write_wkt_with_grouping(
    geometry: &Geometry,
    coordinates: CoordinateOutput,
    grouping: &impl RingGrouping,
) -> WktResult<String> {
    debug!(kind = %geometry.kind(), dim = %geometry.dim(), "writing geometry as WKT");
    let wkt = match geometry {
        Geometry::Point(point) => point_to_wkt(point, coordinates),
        Geometry::Multipoint(multipoint) => multipoint_to_wkt(multipoint, coordinates),
        Geometry::Polyline(polyline) => polyline_to_wkt(polyline, coordinates),
        Geometry::Polygon(polygon) => polygon_to_wkt(polygon, coordinates, grouping),
        Geometry::GeometryBag(_) => {
            return Err(WktError::UnsupportedType(
                "geometry bags cannot be written as WKT".to_string(),
            ))
        }
        Geometry::Path(_) | Geometry::Ring(_) | Geometry::MultiPatch(_) => String::new(),
    };
    Ok(wkt)
}

/// Write a geometry as WKT.
pub trait ToWkt {
    fn to_wkt(&self) -> WktResult<String>;
}

impl ToWkt for Geometry {
    fn to_wkt(&self) -> WktResult<String> {
        write_wkt(self)
    }
}
