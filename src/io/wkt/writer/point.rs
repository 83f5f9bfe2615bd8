use crate::geometry::Point;
use crate::io::wkt::writer::{coord_tuple, header, output_dim, CoordinateOutput};

/// Write a [Point] as `POINT (X Y)`.
pub fn point_to_wkt(point: &Point, coordinates: CoordinateOutput) -> String {
    let dim = output_dim(point.dim(), coordinates);
    format!("{}({})", header("POINT", dim), coord_tuple(point, dim))
}
